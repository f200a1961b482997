//! Seam between the photo logic and the operating system's printing and
//! file-saving facilities.

use std::path::PathBuf;

use tracing::info;

use crate::download::download_file_name;
use crate::error::Result;
use crate::models::Photo;
use crate::orientation::Orientation;
use crate::print::{PrintDocument, album_document, photo_document};

pub trait Platform {
    /// Present a printable document to the user.
    fn print(&self, document: &PrintDocument) -> Result<()>;

    /// Store downloaded bytes under a suggested name, returning where they went.
    fn save_download(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

pub fn print_photo(platform: &dyn Platform, photo: &Photo) -> Result<()> {
    info!(id = %photo.id, "printing photo");
    platform.print(&photo_document(photo))
}

/// Print every photo of an album. An empty album is refused before the
/// platform is involved.
pub fn print_album(
    platform: &dyn Platform,
    title: &str,
    photos: &[Photo],
    orientation: Orientation,
) -> Result<()> {
    let document = album_document(title, photos, orientation)?;
    info!(title, photos = photos.len(), "printing album");
    platform.print(&document)
}

pub fn download_photo(platform: &dyn Platform, photo: &Photo, bytes: &[u8]) -> Result<PathBuf> {
    let file_name = download_file_name(photo);
    let path = platform.save_download(&file_name, bytes)?;
    info!(id = %photo.id, ?path, "photo downloaded");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingPlatform {
        printed: RefCell<Vec<PrintDocument>>,
        saved: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl Platform for RecordingPlatform {
        fn print(&self, document: &PrintDocument) -> Result<()> {
            self.printed.borrow_mut().push(document.clone());
            Ok(())
        }

        fn save_download(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
            self.saved
                .borrow_mut()
                .push((file_name.to_string(), bytes.to_vec()));
            Ok(PathBuf::from("/downloads").join(file_name))
        }
    }

    #[test]
    fn print_empty_album_never_reaches_platform() {
        let platform = RecordingPlatform::default();
        let err = print_album(&platform, "Empty", &[], Orientation::Portrait).unwrap_err();
        assert!(matches!(err, Error::NothingToPrint));
        assert!(platform.printed.borrow().is_empty());
    }

    #[test]
    fn print_album_hands_over_document() {
        let platform = RecordingPlatform::default();
        let photos = vec![Photo::new("a", "/a.jpg"), Photo::new("b", "/b.jpg")];
        print_album(&platform, "Trip", &photos, Orientation::Landscape).unwrap();

        let printed = platform.printed.borrow();
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].title, "Trip");
    }

    #[test]
    fn print_single_photo() {
        let platform = RecordingPlatform::default();
        print_photo(&platform, &Photo::new("Solo", "/solo.png")).unwrap();
        assert_eq!(platform.printed.borrow()[0].title, "Solo");
    }

    #[test]
    fn download_uses_suggested_name() {
        let platform = RecordingPlatform::default();
        let photo = Photo::new("Forest", "/pics/forest.png");
        let path = download_photo(&platform, &photo, b"bytes").unwrap();

        assert_eq!(path, PathBuf::from("/downloads/Forest.png"));
        let saved = platform.saved.borrow();
        assert_eq!(saved[0].0, "Forest.png");
        assert_eq!(saved[0].1, b"bytes");
    }
}
