//! Albums and their photo lists, stored as JSON documents in the catalog.
//!
//! Album records live under one key; each album's photos under a key derived
//! from the album id. Stored data that fails to parse is logged and treated
//! as absent so a damaged entry never blocks the application.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use albumen_core::collection::{self, AlbumCollection};
use albumen_core::models::{Album, AlbumId, Photo};
use albumen_core::sample;

use crate::db::Catalog;

pub const ALBUMS_KEY: &str = "photo-app-albums";

pub fn photos_key(album_id: AlbumId) -> String {
    format!("photo-app-photos-{album_id}")
}

pub struct Library {
    catalog: Catalog,
}

impl Library {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn open(path: &str) -> Result<Self> {
        Ok(Self::new(Catalog::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Catalog::open_in_memory()?))
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.catalog.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!(key, %err, "failed to read stored list");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                warn!(key, %err, "stored list is malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn save_list<T: Serialize>(&self, key: &str, list: &[T]) -> Result<()> {
        let json = serde_json::to_string(list).context("failed to serialize list")?;
        self.catalog.set(key, &json)?;
        debug!(key, len = list.len(), "stored list");
        Ok(())
    }

    pub fn load_albums(&self) -> AlbumCollection {
        AlbumCollection::new(self.load_list(ALBUMS_KEY))
    }

    /// Load albums, seeding the sample set the first time the store has no
    /// album entry at all. An explicitly empty list stays empty.
    pub fn load_albums_or_seed(&self) -> Result<AlbumCollection> {
        if self.catalog.contains(ALBUMS_KEY)? {
            return Ok(self.load_albums());
        }
        let albums = AlbumCollection::new(sample::sample_albums());
        self.save_albums(&albums)?;
        info!(count = albums.len(), "seeded sample albums");
        Ok(albums)
    }

    pub fn save_albums(&self, albums: &AlbumCollection) -> Result<()> {
        self.save_list(ALBUMS_KEY, albums.as_slice())
    }

    pub fn load_photos(&self, album_id: AlbumId) -> Vec<Photo> {
        self.load_list(&photos_key(album_id))
    }

    /// Store an album's photos and refresh the album's derived count and
    /// cover in the same step. Photos for an album that is no longer in
    /// `albums` are rejected so a deleted album's entry is never re-created.
    pub fn save_photos(
        &self,
        albums: &mut AlbumCollection,
        album_id: AlbumId,
        photos: &[Photo],
    ) -> Result<()> {
        if albums.get(album_id).is_none() {
            bail!("album {album_id} no longer exists");
        }
        self.save_list(&photos_key(album_id), photos)?;
        albums.sync_photos(album_id, photos)?;
        self.save_albums(albums)
    }

    /// Append a batch to an album's stored photo list, returning how many
    /// photos were added.
    pub fn append_photos(
        &self,
        albums: &mut AlbumCollection,
        album_id: AlbumId,
        batch: Vec<Photo>,
    ) -> Result<usize> {
        if albums.get(album_id).is_none() {
            bail!("album {album_id} no longer exists");
        }
        let mut stored = self.load_photos(album_id);
        let added = collection::append_photos(&mut stored, batch);
        self.save_photos(albums, album_id, &stored)?;
        Ok(added)
    }

    /// Drop an album together with its stored photo list. `albums` is only
    /// changed once both catalog writes have succeeded.
    pub fn delete_album(
        &self,
        albums: &mut AlbumCollection,
        album_id: AlbumId,
    ) -> Result<Option<Album>> {
        let mut remaining = albums.clone();
        let removed = remaining.remove(album_id);
        self.catalog.remove(&photos_key(album_id))?;
        self.save_albums(&remaining)?;
        *albums = remaining;
        if removed.is_some() {
            info!(%album_id, "album deleted");
        }
        Ok(removed)
    }

    /// Every photo of every album, in album order.
    pub fn all_photos(&self, albums: &AlbumCollection) -> Vec<Photo> {
        albums
            .as_slice()
            .iter()
            .flat_map(|album| self.load_photos(album.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(title: &str, album_id: AlbumId) -> Photo {
        let mut photo = Photo::new(title, format!("/pics/{title}.jpg"));
        photo.album_id = Some(album_id);
        photo.tags = vec!["tag".into()];
        photo
    }

    #[test]
    fn albums_round_trip() {
        let library = Library::open_in_memory().unwrap();
        let mut albums = AlbumCollection::default();
        albums.create("One", "first").unwrap();
        albums.create("Two", "").unwrap();

        library.save_albums(&albums).unwrap();
        assert_eq!(library.load_albums(), albums);
    }

    #[test]
    fn photos_round_trip_and_update_album() {
        let library = Library::open_in_memory().unwrap();
        let mut albums = AlbumCollection::default();
        let id = albums.create("Trip", "").unwrap().id;
        library.save_albums(&albums).unwrap();

        let photos = vec![photo("a", id), photo("b", id), photo("c", id)];
        library.save_photos(&mut albums, id, &photos).unwrap();

        assert_eq!(library.load_photos(id), photos);
        let stored = library.load_albums();
        let album = stored.get(id).unwrap();
        assert_eq!(album.photo_count, 3);
        assert_eq!(album.thumbnail_src, "/pics/a.jpg");
    }

    #[test]
    fn photo_count_follows_deletions() {
        let library = Library::open_in_memory().unwrap();
        let mut albums = AlbumCollection::default();
        let id = albums.create("Trip", "").unwrap().id;

        let mut photos = vec![photo("a", id), photo("b", id)];
        library.save_photos(&mut albums, id, &photos).unwrap();
        photos.pop();
        library.save_photos(&mut albums, id, &photos).unwrap();

        assert_eq!(library.load_albums().get(id).unwrap().photo_count, 1);
    }

    #[test]
    fn malformed_albums_load_empty() {
        let catalog = Catalog::open_in_memory().unwrap();
        catalog.set(ALBUMS_KEY, "{not json").unwrap();
        let library = Library::new(catalog);
        assert!(library.load_albums().is_empty());
    }

    #[test]
    fn malformed_photos_load_empty() {
        let catalog = Catalog::open_in_memory().unwrap();
        let id = AlbumId::new();
        catalog.set(&photos_key(id), "[{\"id\": 42}]").unwrap();
        let library = Library::new(catalog);
        assert!(library.load_photos(id).is_empty());
    }

    #[test]
    fn missing_photos_load_empty() {
        let library = Library::open_in_memory().unwrap();
        assert!(library.load_photos(AlbumId::new()).is_empty());
    }

    #[test]
    fn seeds_only_once() {
        let library = Library::open_in_memory().unwrap();
        let mut seeded = library.load_albums_or_seed().unwrap();
        assert_eq!(seeded.len(), 6);

        let ids: Vec<AlbumId> = seeded.as_slice().iter().map(|a| a.id).collect();
        for id in ids {
            library.delete_album(&mut seeded, id).unwrap();
        }

        let reloaded = library.load_albums_or_seed().unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn delete_album_removes_its_photos() {
        let library = Library::open_in_memory().unwrap();
        let mut albums = AlbumCollection::default();
        let id = albums.create("Gone", "").unwrap().id;
        library
            .save_photos(&mut albums, id, &[photo("x", id)])
            .unwrap();

        let removed = library.delete_album(&mut albums, id).unwrap();
        assert_eq!(removed.unwrap().title, "Gone");
        assert!(library.load_albums().is_empty());
        assert!(library.load_photos(id).is_empty());
        assert!(!library.catalog.contains(&photos_key(id)).unwrap());
    }

    #[test]
    fn all_photos_spans_albums() {
        let library = Library::open_in_memory().unwrap();
        let mut albums = AlbumCollection::default();
        let first = albums.create("First", "").unwrap().id;
        let second = albums.create("Second", "").unwrap().id;
        library
            .save_photos(&mut albums, first, &[photo("a", first)])
            .unwrap();
        library
            .save_photos(&mut albums, second, &[photo("b", second), photo("c", second)])
            .unwrap();

        let titles: Vec<String> = library
            .all_photos(&albums)
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn photos_for_deleted_album_are_not_stored() {
        let library = Library::open_in_memory().unwrap();
        let mut albums = AlbumCollection::default();
        let id = albums.create("Short lived", "").unwrap().id;
        library
            .save_photos(&mut albums, id, &[photo("a", id)])
            .unwrap();
        library.delete_album(&mut albums, id).unwrap();

        // A batch that finishes preparing after the album was deleted.
        assert!(library
            .append_photos(&mut albums, id, vec![photo("late", id)])
            .is_err());
        assert!(library
            .save_photos(&mut albums, id, &[photo("late", id)])
            .is_err());
        assert!(!library.catalog.contains(&photos_key(id)).unwrap());
        assert!(library.load_albums().is_empty());
    }

    #[test]
    fn append_photos_extends_stored_list() {
        let library = Library::open_in_memory().unwrap();
        let mut albums = AlbumCollection::default();
        let id = albums.create("Trip", "").unwrap().id;
        library
            .save_photos(&mut albums, id, &[photo("a", id)])
            .unwrap();

        let added = library
            .append_photos(&mut albums, id, vec![photo("b", id), photo("c", id)])
            .unwrap();
        assert_eq!(added, 2);

        let titles: Vec<String> = library
            .load_photos(id)
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_eq!(albums.get(id).unwrap().photo_count, 3);
    }

    #[test]
    fn failed_delete_keeps_album() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        let library = Library::open(path.to_str().unwrap()).unwrap();
        let mut albums = AlbumCollection::default();
        let id = albums.create("Keep", "").unwrap().id;
        library
            .save_photos(&mut albums, id, &[photo("a", id)])
            .unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TRIGGER refuse_delete BEFORE DELETE ON entries
             BEGIN SELECT RAISE(ABORT, 'read only'); END;",
        )
        .unwrap();

        assert!(library.delete_album(&mut albums, id).is_err());
        assert_eq!(albums.get(id).unwrap().title, "Keep");
        assert_eq!(library.load_albums().len(), 1);
        assert_eq!(library.load_photos(id).len(), 1);
    }
}
