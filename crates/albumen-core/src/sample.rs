//! Built-in content shown before the user has added anything.

use crate::models::{Album, AlbumId, Photo, PhotoId};

const SAMPLE_ALBUMS: &[(&str, &str, &str)] = &[
    (
        "Nature",
        "A collection of beautiful landscapes",
        "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05",
    ),
    (
        "City Life",
        "Architecture and street scenes",
        "https://images.unsplash.com/photo-1480714378408-67cf0d13bc1b",
    ),
    (
        "Animals",
        "Wild and domestic animals in their habitat",
        "https://images.unsplash.com/photo-1474511320723-9a56873867b5",
    ),
    (
        "Travel",
        "Interesting places from around the world",
        "https://images.unsplash.com/photo-1516483638261-f4dbaf036963",
    ),
    (
        "Flowers and Plants",
        "Beautiful flowers and exotic plants",
        "https://images.unsplash.com/photo-1496309732348-3627f3f040ee",
    ),
    (
        "Macro",
        "An amazing world in detail",
        "https://images.unsplash.com/photo-1429198739803-7db875882052",
    ),
];

const SAMPLE_PHOTOS: &[(&str, &str, &str, &[&str])] = &[
    (
        "Mountain Landscape",
        "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
        "A majestic mountain landscape at dawn",
        &["nature", "mountains", "dawn"],
    ),
    (
        "Seashore",
        "https://images.unsplash.com/photo-1505118380757-91f5f5632de0",
        "A calm seashore with golden sand",
        &["sea", "beach", "waves"],
    ),
    (
        "City Architecture",
        "https://images.unsplash.com/photo-1517999144091-3d9dca6d1e43",
        "Modern skyscrapers downtown",
        &["city", "architecture", "buildings"],
    ),
    (
        "Autumn Forest",
        "https://images.unsplash.com/photo-1508193638397-1c4234db14d8",
        "A colourful autumn forest with yellow and red leaves",
        &["autumn", "forest", "trees"],
    ),
    (
        "Wildlife",
        "https://images.unsplash.com/photo-1546182990-dffeafbe841d",
        "A wild lion resting in the savanna",
        &["animals", "lion", "wildlife"],
    ),
    (
        "Floral Arrangement",
        "https://images.unsplash.com/photo-1464982326199-86f32f81b211",
        "A bright arrangement of wildflowers",
        &["flowers", "plants", "nature"],
    ),
    (
        "Waterfall",
        "https://images.unsplash.com/photo-1494472155656-f34e81b17ddc",
        "A powerful waterfall among rocks and greenery",
        &["water", "nature", "waterfall"],
    ),
    (
        "Beach Sunset",
        "https://images.unsplash.com/photo-1507525428034-b723cf961d3e",
        "A stunning sunset reflected in the ocean",
        &["sunset", "sea", "beach"],
    ),
    (
        "Mountain Lake",
        "https://images.unsplash.com/photo-1501785888041-af3ef285b470",
        "A crystal clear lake surrounded by mountains",
        &["lake", "mountains", "nature"],
    ),
];

pub fn sample_albums() -> Vec<Album> {
    SAMPLE_ALBUMS
        .iter()
        .map(|(title, description, cover)| Album {
            id: AlbumId::new(),
            title: title.to_string(),
            description: description.to_string(),
            thumbnail_src: cover.to_string(),
            photo_count: 0,
        })
        .collect()
}

pub fn sample_photos() -> Vec<Photo> {
    SAMPLE_PHOTOS
        .iter()
        .map(|(title, src, alt, tags)| Photo {
            id: PhotoId::new(),
            title: title.to_string(),
            src: src.to_string(),
            alt: alt.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            orientation: None,
            album_id: None,
            width: None,
            height: None,
        })
        .collect()
}
