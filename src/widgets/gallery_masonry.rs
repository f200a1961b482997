use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{Column, button, column, container, row, stack, text};
use iced::{Element, Length, Padding};

use albumen_core::layout::{MASONRY_COLUMNS, ViewConfig, masonry_columns, tile_height};
use albumen_core::models::Photo;

use crate::app::Message;

const COLUMN_WIDTH: f32 = 300.0;

pub fn view<'a>(
    photos: &'a [Photo],
    thumbnails: &'a HashMap<String, Handle>,
    config: &ViewConfig,
) -> Element<'a, Message> {
    let spacing = f32::from(config.spacing);

    let columns: Vec<Element<'a, Message>> = masonry_columns(photos, MASONRY_COLUMNS)
        .into_iter()
        .map(|bucket| {
            let tiles: Vec<Element<'a, Message>> = bucket
                .into_iter()
                .map(|photo| tile(photo, thumbnails.get(&photo.src), config.show_delete))
                .collect();
            Column::with_children(tiles)
                .spacing(spacing)
                .width(COLUMN_WIDTH)
                .into()
        })
        .collect();

    row(columns).spacing(spacing).padding(10).into()
}

fn tile<'a>(photo: &'a Photo, handle: Option<&Handle>, show_delete: bool) -> Element<'a, Message> {
    let height = tile_height(photo, COLUMN_WIDTH);
    let picture = super::thumbnail(handle, COLUMN_WIDTH, height);

    let picture: Element<'a, Message> = if show_delete {
        let delete = container(
            button(text("x").size(11))
                .on_press(Message::DeletePhoto(photo.id))
                .padding(Padding::from([1, 6]))
                .style(button::danger),
        )
        .padding(6)
        .align_right(Length::Fill);
        stack![picture, delete].into()
    } else {
        picture
    };

    let cell = column![
        picture,
        text(photo.title.as_str()).size(12),
        super::tag_chips(&photo.tags, 3),
    ]
    .spacing(4);

    button(cell)
        .on_press(Message::ShowPhoto(photo.id))
        .padding(0)
        .style(button::text)
        .into()
}
