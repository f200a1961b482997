use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{Row, container, image, text};
use iced::{Border, Color, Element, Length};

use albumen_core::layout::{ViewConfig, ViewMode};
use albumen_core::models::Photo;

use crate::app::Message;

pub mod album_dialog;
pub mod controls;
pub mod gallery_grid;
pub mod gallery_list;
pub mod gallery_masonry;
pub mod modal;
pub mod photo_modal;
pub mod toasts;

const TAG_BG: Color = Color::from_rgb(0.18, 0.18, 0.20);
const PLACEHOLDER_BG: Color = Color::from_rgb(0.12, 0.12, 0.12);

/// Render a photo sequence with the layout selected in `config`.
pub fn photos_view<'a>(
    photos: &'a [Photo],
    thumbnails: &'a HashMap<String, Handle>,
    config: &ViewConfig,
) -> Element<'a, Message> {
    if photos.is_empty() {
        return container(text("No photos yet. Use 'Add Photos' to upload some.").size(16))
            .padding(40)
            .center_x(Length::Fill)
            .into();
    }

    match config.mode {
        ViewMode::Grid => gallery_grid::view(photos, thumbnails, config),
        ViewMode::List => gallery_list::view(photos, thumbnails, config),
        ViewMode::Masonry => gallery_masonry::view(photos, thumbnails, config),
    }
}

pub fn tag_chips<'a>(tags: &'a [String], limit: usize) -> Element<'a, Message> {
    let chips: Vec<Element<'a, Message>> = tags
        .iter()
        .take(limit)
        .map(|tag| {
            container(text(tag.as_str()).size(10))
                .padding([2, 6])
                .style(|_theme: &_| container::Style {
                    background: Some(TAG_BG.into()),
                    border: Border {
                        radius: 8.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .into()
        })
        .collect();
    Row::with_children(chips).spacing(4).into()
}

/// Thumbnail at a fixed size, or a placeholder while it loads.
pub fn thumbnail<'a>(handle: Option<&Handle>, width: f32, height: f32) -> Element<'a, Message> {
    match handle {
        Some(handle) => image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(text("...").size(12))
            .width(width)
            .height(height)
            .center_x(width)
            .center_y(height)
            .style(|_theme: &_| container::Style {
                background: Some(PLACEHOLDER_BG.into()),
                ..Default::default()
            })
            .into(),
    }
}
