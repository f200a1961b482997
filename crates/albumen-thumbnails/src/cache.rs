//! On-disk store of generated thumbnails.
//!
//! Entries are keyed by the photo source together with the local file's
//! modification time, so a file edited in place gets a fresh entry instead
//! of its old thumbnail.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(src: &str, modified: Option<SystemTime>) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(src.as_bytes());
        if let Some(stamp) = modified.and_then(|t| t.duration_since(UNIX_EPOCH).ok()) {
            hasher.update(&stamp.as_nanos().to_le_bytes());
        }
        Self(hasher.finalize().to_hex().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct ThumbnailCache {
    root: PathBuf,
}

impl ThumbnailCache {
    pub fn open(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("create thumbnail cache {}", root.display()))?;
        Ok(Self { root })
    }

    /// `<root>/<first two hex chars>/<key>.jpg`
    fn entry_path(&self, key: &CacheKey) -> PathBuf {
        let hex = key.as_str();
        self.root.join(&hex[..2]).join(format!("{hex}.jpg"))
    }

    pub fn get(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let path = self.entry_path(key);
        match fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(?path, %err, "unreadable cached thumbnail");
                None
            }
        }
    }

    /// Write through a temporary file so readers never see a partial entry.
    pub fn put(&self, key: &CacheKey, thumbnail: &[u8]) -> Result<()> {
        let path = self.entry_path(key);
        let bucket = self.root.join(&key.as_str()[..2]);
        fs::create_dir_all(&bucket)?;
        let partial = path.with_extension("part");
        fs::write(&partial, thumbnail)
            .with_context(|| format!("write {}", partial.display()))?;
        fs::rename(&partial, &path).with_context(|| format!("finish {}", path.display()))?;
        debug!(?path, size = thumbnail.len(), "cached thumbnail");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ThumbnailCache::open(dir.path().join("thumbs")).unwrap();
        let key = CacheKey::new("/pics/lake.jpg", None);

        assert!(cache.get(&key).is_none());
        cache.put(&key, b"jpeg bytes").unwrap();
        assert_eq!(cache.get(&key).unwrap(), b"jpeg bytes");

        let hex = key.as_str();
        assert!(dir.path().join("thumbs").join(&hex[..2]).join(format!("{hex}.jpg")).exists());
        assert!(!dir.path().join("thumbs").join(&hex[..2]).join(format!("{hex}.part")).exists());
    }

    #[test]
    fn put_replaces_entry() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ThumbnailCache::open(dir.path().to_path_buf()).unwrap();
        let key = CacheKey::new("https://img/a.jpg", None);

        cache.put(&key, b"v1").unwrap();
        cache.put(&key, b"v2").unwrap();
        assert_eq!(cache.get(&key).unwrap(), b"v2");
    }

    #[test]
    fn modification_time_changes_key() {
        let before = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let after = before + Duration::from_secs(1);

        assert_eq!(CacheKey::new("/a.jpg", Some(before)), CacheKey::new("/a.jpg", Some(before)));
        assert_ne!(CacheKey::new("/a.jpg", Some(before)), CacheKey::new("/a.jpg", Some(after)));
        assert_ne!(CacheKey::new("/a.jpg", None), CacheKey::new("/b.jpg", None));
        assert_eq!(CacheKey::new("/a.jpg", None).as_str().len(), 64);
    }
}
