use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};

use albumen_core::layout::ViewConfig;
use albumen_core::models::Photo;

use crate::app::Message;

const THUMB_SIZE: f32 = 96.0;
const ROW_BG: Color = Color::from_rgb(0.11, 0.11, 0.12);

pub fn view<'a>(
    photos: &'a [Photo],
    thumbnails: &'a HashMap<String, Handle>,
    config: &ViewConfig,
) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = photos
        .iter()
        .map(|photo| list_row(photo, thumbnails.get(&photo.src), config.show_delete))
        .collect();

    column(rows)
        .spacing(f32::from(config.spacing))
        .padding(10)
        .into()
}

fn list_row<'a>(
    photo: &'a Photo,
    handle: Option<&Handle>,
    show_delete: bool,
) -> Element<'a, Message> {
    let details = column![
        text(photo.title.as_str()).size(16),
        text(photo.alt.as_str()).size(12),
        super::tag_chips(&photo.tags, usize::MAX),
    ]
    .spacing(6)
    .width(Length::Fill);

    let mut actions = row![button(text("View").size(12)).on_press(Message::ShowPhoto(photo.id))]
        .spacing(6);
    if show_delete {
        actions = actions.push(
            button(text("Delete").size(12))
                .on_press(Message::DeletePhoto(photo.id))
                .style(button::danger),
        );
    }

    let content = row![
        super::thumbnail(handle, THUMB_SIZE, THUMB_SIZE),
        details,
        Space::new().width(8),
        actions,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    button(container(content).padding(8).style(|_theme: &_| container::Style {
        background: Some(ROW_BG.into()),
        ..Default::default()
    }))
    .on_press(Message::ShowPhoto(photo.id))
    .padding(0)
    .style(button::text)
    .width(Length::Fill)
    .into()
}
