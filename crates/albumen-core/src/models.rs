use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::orientation::Orientation;

pub const UNTITLED_PHOTO: &str = "Untitled";
pub const UNDESCRIBED_PHOTO: &str = "Image without description";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(Uuid);

impl PhotoId {
    /// Random v4 identifier, unique with overwhelming probability across sessions.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PhotoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(Uuid);

impl AlbumId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AlbumId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: PhotoId,
    pub title: String,
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<AlbumId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Photo {
    /// Build a photo record for a freshly added file. Blank titles fall back
    /// to placeholder text.
    pub fn new(title: &str, src: impl Into<String>) -> Self {
        let title = title.trim();
        Self {
            id: PhotoId::new(),
            title: if title.is_empty() {
                UNTITLED_PHOTO.to_string()
            } else {
                title.to_string()
            },
            src: src.into(),
            alt: if title.is_empty() {
                UNDESCRIBED_PHOTO.to_string()
            } else {
                title.to_string()
            },
            tags: Vec::new(),
            orientation: None,
            album_id: None,
            width: None,
            height: None,
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    /// The source as something a browser can load: remote and `file:` URLs
    /// pass through, bare paths become `file://` URLs.
    pub fn source_url(&self) -> String {
        source_url(&self.src)
    }
}

pub fn source_url(src: &str) -> String {
    if is_remote(src) || src.starts_with("file:") {
        return src.to_string();
    }
    let path = src.replace('\\', "/");
    let Ok(mut url) = Url::parse("file:///") else {
        return format!("file:///{}", path.trim_start_matches('/'));
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .clear()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
    }
    url.into()
}

pub fn is_remote(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_src: String,
    #[serde(default)]
    pub photo_count: usize,
}

impl Album {
    /// Re-derive the bookkeeping fields from the album's current photos. The
    /// cover only changes when there is a photo to take it from.
    pub fn refresh_from(&mut self, photos: &[Photo]) {
        self.photo_count = photos.len();
        if let Some(first) = photos.first() {
            self.thumbnail_src = first.src.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct() {
        assert_ne!(PhotoId::new(), PhotoId::new());
        assert_ne!(AlbumId::new(), AlbumId::new());
    }

    #[test]
    fn blank_title_gets_placeholders() {
        let photo = Photo::new("   ", "/tmp/a.jpg");
        assert_eq!(photo.title, UNTITLED_PHOTO);
        assert_eq!(photo.alt, UNDESCRIBED_PHOTO);
        assert!(photo.tags.is_empty());
    }

    #[test]
    fn refresh_tracks_count_and_cover() {
        let mut album = Album {
            id: AlbumId::new(),
            title: "Trips".into(),
            description: String::new(),
            thumbnail_src: "cover.jpg".into(),
            photo_count: 7,
        };

        album.refresh_from(&[]);
        assert_eq!(album.photo_count, 0);
        assert_eq!(album.thumbnail_src, "cover.jpg");

        let photos = vec![Photo::new("a", "/a.jpg"), Photo::new("b", "/b.jpg")];
        album.refresh_from(&photos);
        assert_eq!(album.photo_count, 2);
        assert_eq!(album.thumbnail_src, "/a.jpg");
    }

    #[test]
    fn photo_json_uses_camel_case() {
        let album_id = AlbumId::new();
        let mut photo = Photo::new("Lake", "/lake.jpg");
        photo.album_id = Some(album_id);
        photo.orientation = Some(Orientation::Landscape);

        let json = serde_json::to_string(&photo).unwrap();
        assert!(json.contains("\"albumId\""));
        assert!(json.contains("\"orientation\":\"landscape\""));
        assert!(!json.contains("\"width\""));
    }

    #[test]
    fn legacy_photo_without_optional_fields_parses() {
        let json = r#"{"id":"6f1c2d1e-3a4b-4c5d-8e9f-0a1b2c3d4e5f","title":"t","src":"s","alt":"a"}"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        assert!(photo.tags.is_empty());
        assert!(photo.orientation.is_none());
        assert!(photo.album_id.is_none());
    }

    #[test]
    fn source_urls() {
        assert_eq!(source_url("https://x/y.jpg"), "https://x/y.jpg");
        assert_eq!(source_url("/home/me/a.jpg"), "file:///home/me/a.jpg");
        assert_eq!(source_url("C:\\pics\\a.jpg"), "file:///C:/pics/a.jpg");
        assert_eq!(source_url("file:///already/a.jpg"), "file:///already/a.jpg");
        assert!(is_remote("http://example.com"));
        assert!(!is_remote("/local"));
    }

    #[test]
    fn local_paths_are_percent_encoded() {
        assert_eq!(
            source_url("/pics/beach #1.jpg"),
            "file:///pics/beach%20%231.jpg"
        );
        assert_eq!(source_url("/pics/100%.jpg"), "file:///pics/100%25.jpg");
        assert_eq!(source_url("/pics/what?.jpg"), "file:///pics/what%3F.jpg");
        assert_eq!(
            source_url("/my pics/a b.png"),
            "file:///my%20pics/a%20b.png"
        );
    }
}
