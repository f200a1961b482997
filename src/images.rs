//! Decoded image handles held by the application: one thumbnail per source,
//! and the full-size image of the photo currently open in the detail overlay.

use std::collections::{HashMap, HashSet};

use iced::widget::image::Handle;

#[derive(Default)]
pub struct ImageStore {
    thumbnails: HashMap<String, Handle>,
    in_flight: HashSet<String>,
    preview: Option<(String, Handle)>,
}

impl ImageStore {
    /// Claim a thumbnail load for `src`. False when it is already loaded or
    /// being loaded.
    pub fn begin_thumbnail(&mut self, src: &str) -> bool {
        !self.thumbnails.contains_key(src) && self.in_flight.insert(src.to_string())
    }

    pub fn thumbnail_loaded(&mut self, src: String, bytes: Vec<u8>) {
        self.in_flight.remove(&src);
        self.thumbnails.insert(src, Handle::from_bytes(bytes));
    }

    /// Release the claim so the next request tries again.
    pub fn thumbnail_failed(&mut self, src: &str) {
        self.in_flight.remove(src);
    }

    pub fn thumbnails(&self) -> &HashMap<String, Handle> {
        &self.thumbnails
    }

    pub fn has_preview(&self, src: &str) -> bool {
        self.preview.as_ref().is_some_and(|(open, _)| open == src)
    }

    /// Keep a full-size image, but only while its photo is still the open one.
    pub fn preview_loaded(&mut self, src: String, bytes: Vec<u8>, open_src: Option<&str>) -> bool {
        if open_src != Some(src.as_str()) {
            return false;
        }
        self.preview = Some((src, Handle::from_bytes(bytes)));
        true
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Full-size image for `src`, falling back to its thumbnail.
    pub fn best_for(&self, src: &str) -> Option<&Handle> {
        match &self.preview {
            Some((open, handle)) if open == src => Some(handle),
            _ => self.thumbnails.get(src),
        }
    }

    /// Drop every handle held for `src`.
    pub fn forget(&mut self, src: &str) {
        self.thumbnails.remove(src);
        self.in_flight.remove(src);
        if self.has_preview(src) {
            self.preview = None;
        }
    }
}
