//! Layout math shared by the grid, list and masonry renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Photo;
use crate::orientation::Orientation;

pub const MASONRY_COLUMNS: usize = 3;

pub const SPACING_MIN: u16 = 0;
pub const SPACING_MAX: u16 = 40;
pub const SPACING_STEP: u16 = 4;
pub const DEFAULT_SPACING: u16 = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Masonry,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::List, ViewMode::Masonry];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => f.write_str("Grid"),
            ViewMode::List => f.write_str("List"),
            ViewMode::Masonry => f.write_str("Masonry"),
        }
    }
}

/// How a screen currently presents its photos. Never touches the photos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    pub mode: ViewMode,
    pub spacing: u16,
    pub orientation: Orientation,
    pub show_delete: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            spacing: DEFAULT_SPACING,
            orientation: Orientation::default(),
            show_delete: true,
        }
    }
}

/// Snap a requested spacing onto the slider's range and step.
pub fn clamp_spacing(spacing: u16) -> u16 {
    let clamped = spacing.clamp(SPACING_MIN, SPACING_MAX);
    let steps = (clamped + SPACING_STEP / 2) / SPACING_STEP;
    (steps * SPACING_STEP).min(SPACING_MAX)
}

/// Deal items into `columns` buckets round-robin: item `i` lands in bucket
/// `i % columns`, keeping relative order inside every bucket.
pub fn masonry_columns<T>(items: &[T], columns: usize) -> Vec<Vec<&T>> {
    let columns = columns.max(1);
    let mut buckets: Vec<Vec<&T>> = (0..columns).map(|_| Vec::new()).collect();
    for (index, item) in items.iter().enumerate() {
        buckets[index % columns].push(item);
    }
    buckets
}

/// Portrait tiles are narrow, so more of them fit on a row.
pub fn grid_columns(orientation: Orientation) -> usize {
    match orientation {
        Orientation::Portrait => 4,
        Orientation::Landscape => 3,
    }
}

/// Width over height of a grid tile.
pub fn grid_aspect(orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Portrait => 3.0 / 4.0,
        Orientation::Landscape => 4.0 / 3.0,
    }
}

/// Chunk items into rows of `columns`; the last row may be short.
pub fn grid_rows<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    items.chunks(columns.max(1)).collect()
}

/// Masonry tile height for a given tile width. Uses the measured aspect ratio
/// when known, then the recorded orientation, then a square.
pub fn tile_height(photo: &Photo, width: f32) -> f32 {
    if let Some((w, h)) = photo.dimensions()
        && w > 0
        && h > 0
    {
        return width * h as f32 / w as f32;
    }
    match photo.orientation {
        Some(Orientation::Portrait) => width * 4.0 / 3.0,
        Some(Orientation::Landscape) => width * 3.0 / 4.0,
        None => width,
    }
}
