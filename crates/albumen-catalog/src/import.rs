use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::{info, warn};

use albumen_core::models::{AlbumId, Photo};
use albumen_core::orientation::{self, Probe};

pub struct ImportResult {
    pub photos: Vec<Photo>,
    pub skipped: usize,
}

pub fn is_supported_image(path: &Path) -> bool {
    image::ImageFormat::from_path(path).is_ok()
}

/// Title derived from the file name up to its first dot.
fn title_for(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or_default()
        .to_string()
}

fn build_photo(path: &Path, album_id: Option<AlbumId>, probe: Probe) -> Photo {
    let mut photo = Photo::new(&title_for(path), path.to_string_lossy());
    photo.album_id = album_id;
    photo.orientation = Some(probe.orientation);
    if let Some((width, height)) = probe.dimensions {
        photo.width = Some(width);
        photo.height = Some(height);
    }
    photo
}

/// Turn selected files into photo records. Every file is probed concurrently
/// and the batch is only returned once all probes have settled, in the order
/// the files were selected. Files that are not images are skipped.
pub async fn prepare_photos(album_id: Option<AlbumId>, paths: Vec<PathBuf>) -> ImportResult {
    let mut skipped = 0;
    let mut probes = JoinSet::new();
    let mut accepted = Vec::new();

    for path in paths {
        if !is_supported_image(&path) {
            warn!(?path, "skipping file that is not an image");
            skipped += 1;
            continue;
        }
        let index = accepted.len();
        accepted.push(path.clone());
        probes.spawn_blocking(move || (index, orientation::probe(&path)));
    }

    let mut results: Vec<Option<Probe>> = vec![None; accepted.len()];
    while let Some(joined) = probes.join_next().await {
        match joined {
            Ok((index, probe)) => results[index] = Some(probe),
            Err(err) => warn!(%err, "orientation probe did not complete"),
        }
    }

    let photos: Vec<Photo> = accepted
        .iter()
        .zip(results)
        .map(|(path, probe)| {
            let probe = probe.unwrap_or(Probe {
                orientation: Default::default(),
                dimensions: None,
            });
            build_photo(path, album_id, probe)
        })
        .collect();

    info!(imported = photos.len(), skipped, "photos prepared");

    ImportResult { photos, skipped }
}
