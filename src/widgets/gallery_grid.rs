use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Padding};

use albumen_core::layout::{ViewConfig, grid_aspect, grid_columns, grid_rows};
use albumen_core::models::Photo;

use crate::app::Message;

const ROW_WIDTH: f32 = 960.0;

pub fn view<'a>(
    photos: &'a [Photo],
    thumbnails: &'a HashMap<String, Handle>,
    config: &ViewConfig,
) -> Element<'a, Message> {
    let columns = grid_columns(config.orientation);
    let spacing = f32::from(config.spacing);
    let tile_width = (ROW_WIDTH - spacing * (columns - 1) as f32) / columns as f32;
    let tile_height = tile_width / grid_aspect(config.orientation);

    let rows: Vec<Element<'a, Message>> = grid_rows(photos, columns)
        .into_iter()
        .map(|chunk| {
            let mut cells: Vec<Element<'a, Message>> = chunk
                .iter()
                .map(|photo| {
                    tile(
                        photo,
                        thumbnails.get(&photo.src),
                        tile_width,
                        tile_height,
                        config.show_delete,
                    )
                })
                .collect();
            // Pad incomplete row
            while cells.len() < columns {
                cells.push(Space::new().width(tile_width).into());
            }
            row(cells).spacing(spacing).into()
        })
        .collect();

    column(rows).spacing(spacing).padding(10).into()
}

fn tile<'a>(
    photo: &'a Photo,
    handle: Option<&Handle>,
    width: f32,
    height: f32,
    show_delete: bool,
) -> Element<'a, Message> {
    let mut header = row![
        text(photo.title.as_str()).size(12).width(iced::Length::Fill)
    ]
    .spacing(4);
    if show_delete {
        header = header.push(
            button(text("x").size(11))
                .on_press(Message::DeletePhoto(photo.id))
                .padding(Padding::from([1, 6]))
                .style(button::danger),
        );
    }

    let cell = column![
        super::thumbnail(handle, width, height),
        header,
        super::tag_chips(&photo.tags, 2),
    ]
    .spacing(4)
    .width(width);

    button(container(cell))
        .on_press(Message::ShowPhoto(photo.id))
        .padding(4)
        .style(button::text)
        .into()
}
