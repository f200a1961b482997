//! Fetching the bytes behind a photo's source locator.

use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use albumen_core::models::is_remote;

use crate::cache::{CacheKey, ThumbnailCache};
use crate::generator::generate_thumbnail;

/// Read a local file or download a remote image.
pub async fn fetch(src: &str) -> Result<Vec<u8>> {
    if is_remote(src) {
        let response = reqwest::get(src)
            .await
            .with_context(|| format!("request {src}"))?;
        if !response.status().is_success() {
            bail!("fetching {src} returned {}", response.status());
        }
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("read body of {src}"))?;
        debug!(src, size = bytes.len(), "downloaded image");
        Ok(bytes.to_vec())
    } else {
        let path = local_path(src);
        tokio::fs::read(path)
            .await
            .with_context(|| format!("read {path}"))
    }
}

fn local_path(src: &str) -> &str {
    src.strip_prefix("file://").unwrap_or(src)
}

async fn modified_at(src: &str) -> Option<SystemTime> {
    if is_remote(src) {
        return None;
    }
    tokio::fs::metadata(local_path(src))
        .await
        .and_then(|meta| meta.modified())
        .ok()
}

/// Thumbnail bytes for a source, served from the cache when an entry for the
/// source's current version exists.
pub async fn load_thumbnail(src: &str, cache_dir: Option<&Path>) -> Result<Vec<u8>> {
    let cache = match cache_dir.map(|dir| ThumbnailCache::open(dir.to_path_buf())) {
        Some(Ok(cache)) => Some(cache),
        Some(Err(err)) => {
            warn!(%err, "thumbnail cache unavailable");
            None
        }
        None => None,
    };

    let key = CacheKey::new(src, modified_at(src).await);
    if let Some(bytes) = cache.as_ref().and_then(|c| c.get(&key)) {
        return Ok(bytes);
    }

    let encoded = fetch(src).await?;
    let thumb = tokio::task::spawn_blocking(move || generate_thumbnail(&encoded))
        .await
        .context("thumbnail task panicked")??;

    if let Some(cache) = &cache
        && let Err(err) = cache.put(&key, &thumb)
    {
        warn!(%err, "failed to cache thumbnail");
    }
    Ok(thumb)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::time::Duration;

    use super::*;

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbImage::new(width, height).save(path).unwrap();
    }

    fn set_modified(path: &Path, secs: u64) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    #[tokio::test]
    async fn fetch_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        write_png(&path, 3, 3);

        let bytes = fetch(path.to_str().unwrap()).await.unwrap();
        assert_eq!(bytes, std::fs::read(&path).unwrap());

        let url = format!("file://{}", path.display());
        assert_eq!(fetch(&url).await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn fetch_missing_file_errors() {
        assert!(fetch("/definitely/not/here.png").await.is_err());
    }

    #[tokio::test]
    async fn thumbnail_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        write_png(&path, 1024, 600);
        set_modified(&path, 1_700_000_000);
        let cache_dir = dir.path().join("cache");
        let src = path.to_str().unwrap().to_string();

        let first = load_thumbnail(&src, Some(&cache_dir)).await.unwrap();
        let cache = ThumbnailCache::open(cache_dir.clone()).unwrap();
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(cache.get(&CacheKey::new(&src, Some(modified))).unwrap(), first);

        let decoded = image::load_from_memory(&first).unwrap();
        assert_eq!(decoded.width(), 512);
    }

    #[tokio::test]
    async fn edited_file_gets_new_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edit.png");
        let cache_dir = dir.path().join("cache");
        let src = path.to_str().unwrap().to_string();

        write_png(&path, 1024, 600);
        set_modified(&path, 1_700_000_000);
        let before = load_thumbnail(&src, Some(&cache_dir)).await.unwrap();

        write_png(&path, 600, 1024);
        set_modified(&path, 1_700_000_100);
        let after = load_thumbnail(&src, Some(&cache_dir)).await.unwrap();

        assert_ne!(before, after);
        let decoded = image::load_from_memory(&after).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 512));
    }

    #[tokio::test]
    async fn thumbnail_without_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        write_png(&path, 8, 8);
        assert!(load_thumbnail(path.to_str().unwrap(), None).await.is_ok());
    }
}
