//! Mutations on the authoritative photo and album sequences.
//!
//! Screens own these sequences and route every change through here so the
//! ordering and validation rules live in one place.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Album, AlbumId, Photo, PhotoId};

/// Append a batch of photos, keeping the batch's own order.
pub fn append_photos(photos: &mut Vec<Photo>, batch: Vec<Photo>) -> usize {
    let added = batch.len();
    photos.extend(batch);
    debug!(added, total = photos.len(), "appended photos");
    added
}

/// Remove the photo with `id`, returning it. Others keep their relative order;
/// an unknown id leaves the sequence untouched.
pub fn remove_photo(photos: &mut Vec<Photo>, id: PhotoId) -> Option<Photo> {
    let index = photos.iter().position(|p| p.id == id)?;
    Some(photos.remove(index))
}

/// Empty the sequence, returning how many photos were dropped. Zero means
/// nothing changed and callers should stay quiet.
pub fn clear_photos(photos: &mut Vec<Photo>) -> usize {
    if photos.is_empty() {
        return 0;
    }
    let removed = photos.len();
    photos.clear();
    removed
}

fn validated_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(Error::BlankTitle)
    } else {
        Ok(trimmed)
    }
}

/// The album list owned by the albums screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlbumCollection {
    albums: Vec<Album>,
}

impl AlbumCollection {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    pub fn as_slice(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn get(&self, id: AlbumId) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: AlbumId) -> Option<&mut Album> {
        self.albums.iter_mut().find(|a| a.id == id)
    }

    /// Create an empty album. A blank title is rejected and nothing changes.
    pub fn create(&mut self, title: &str, description: &str) -> Result<&Album> {
        let title = validated_title(title)?;
        self.albums.push(Album {
            id: AlbumId::new(),
            title: title.to_string(),
            description: description.trim().to_string(),
            thumbnail_src: String::new(),
            photo_count: 0,
        });
        let album = &self.albums[self.albums.len() - 1];
        debug!(id = %album.id, title = %album.title, "album created");
        Ok(album)
    }

    /// Rename and re-describe an album, validating the title first.
    pub fn update(&mut self, id: AlbumId, title: &str, description: &str) -> Result<&Album> {
        let title = validated_title(title)?.to_string();
        let album = self
            .albums
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(Error::AlbumNotFound(id))?;
        album.title = title;
        album.description = description.trim().to_string();
        Ok(&*album)
    }

    pub fn remove(&mut self, id: AlbumId) -> Option<Album> {
        let index = self.albums.iter().position(|a| a.id == id)?;
        Some(self.albums.remove(index))
    }

    /// Refresh an album's derived count and cover from its photo list.
    pub fn sync_photos(&mut self, id: AlbumId, photos: &[Photo]) -> Result<()> {
        let album = self.get_mut(id).ok_or(Error::AlbumNotFound(id))?;
        album.refresh_from(photos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(n: usize) -> Vec<Photo> {
        (0..n)
            .map(|i| Photo::new(&format!("photo {i}"), format!("/p/{i}.jpg")))
            .collect()
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut list = photos(5);
        let original = list.clone();

        let removed = remove_photo(&mut list, original[2].id).unwrap();
        assert_eq!(removed.id, original[2].id);

        let expected: Vec<PhotoId> = original
            .iter()
            .filter(|p| p.id != original[2].id)
            .map(|p| p.id)
            .collect();
        let actual: Vec<PhotoId> = list.iter().map(|p| p.id).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = photos(3);
        let before = list.clone();
        assert!(remove_photo(&mut list, PhotoId::new()).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn clear_empty_is_noop() {
        let mut list = Vec::new();
        assert_eq!(clear_photos(&mut list), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_reports_removed_count() {
        let mut list = photos(4);
        assert_eq!(clear_photos(&mut list), 4);
        assert!(list.is_empty());
    }

    #[test]
    fn append_keeps_batch_order_after_existing() {
        let mut list = photos(2);
        let batch = photos(3);
        let batch_ids: Vec<PhotoId> = batch.iter().map(|p| p.id).collect();

        assert_eq!(append_photos(&mut list, batch), 3);
        assert_eq!(list.len(), 5);
        let tail: Vec<PhotoId> = list[2..].iter().map(|p| p.id).collect();
        assert_eq!(tail, batch_ids);
    }

    #[test]
    fn create_blank_title_rejected() {
        let mut albums = AlbumCollection::default();
        for title in ["", "   ", "\t\n"] {
            let err = albums.create(title, "desc").unwrap_err();
            assert!(matches!(err, Error::BlankTitle));
        }
        assert!(albums.is_empty());
    }

    #[test]
    fn create_appends_one_empty_album() {
        let mut albums = AlbumCollection::default();
        albums.create("First", "").unwrap();

        let album = albums.create("  Holiday  ", " beach ").unwrap();
        assert_eq!(album.title, "Holiday");
        assert_eq!(album.description, "beach");
        assert_eq!(album.photo_count, 0);
        assert_eq!(albums.len(), 2);
        assert_eq!(albums.as_slice()[1].title, "Holiday");
    }

    #[test]
    fn update_validates_and_applies() {
        let mut albums = AlbumCollection::default();
        let id = albums.create("Old", "old desc").unwrap().id;
        let before = albums.clone();

        assert!(matches!(albums.update(id, " ", "x"), Err(Error::BlankTitle)));
        assert_eq!(albums, before);

        let updated = albums.update(id, "New", "new desc").unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.description, "new desc");
    }

    #[test]
    fn update_unknown_album() {
        let mut albums = AlbumCollection::default();
        let missing = AlbumId::new();
        assert!(matches!(
            albums.update(missing, "Title", ""),
            Err(Error::AlbumNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn remove_album() {
        let mut albums = AlbumCollection::default();
        let keep = albums.create("Keep", "").unwrap().id;
        let gone = albums.create("Drop", "").unwrap().id;

        assert_eq!(albums.remove(gone).unwrap().title, "Drop");
        assert!(albums.remove(gone).is_none());
        assert_eq!(albums.len(), 1);
        assert!(albums.get(keep).is_some());
    }

    #[test]
    fn sync_photos_derives_count() {
        let mut albums = AlbumCollection::default();
        let id = albums.create("Album", "").unwrap().id;
        let list = photos(3);

        albums.sync_photos(id, &list).unwrap();
        let album = albums.get(id).unwrap();
        assert_eq!(album.photo_count, 3);
        assert_eq!(album.thumbnail_src, list[0].src);
    }
}
