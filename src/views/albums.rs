use iced::widget::{Row, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Length, Padding};

use albumen_core::models::Album;

use super::CANVAS_BG;
use crate::app::{App, Message};
use crate::widgets;

const CARD_WIDTH: f32 = 260.0;
const COVER_HEIGHT: f32 = 180.0;
const CARDS_PER_ROW: usize = 4;
const CARD_BG: Color = Color::from_rgb(0.12, 0.12, 0.13);

pub fn view(app: &App) -> Element<'_, Message> {
    let toolbar = row![
        text("My Albums").size(24),
        Space::new().width(Length::Fill),
        button("All Photos").on_press(Message::ShowGallery),
        button("New Album").on_press(Message::NewAlbum),
    ]
    .spacing(10)
    .padding(10)
    .align_y(Alignment::Center);

    let albums = app.albums();
    let content: Element<'_, Message> = if albums.is_empty() {
        container(text("No albums yet. Click 'New Album' to create one.").size(16))
            .padding(40)
            .center_x(Length::Fill)
            .into()
    } else {
        let rows: Vec<Element<'_, Message>> = albums
            .chunks(CARDS_PER_ROW)
            .map(|chunk| {
                Row::with_children(chunk.iter().map(|album| album_card(app, album)))
                    .spacing(16)
                    .into()
            })
            .collect();
        column(rows).spacing(16).padding(10).into()
    };

    let canvas = container(scrollable(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &_| container::Style {
            background: Some(CANVAS_BG.into()),
            ..Default::default()
        });

    column![toolbar, canvas]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn album_card<'a>(app: &'a App, album: &'a Album) -> Element<'a, Message> {
    let cover = widgets::thumbnail(
        app.thumbnails().get(&album.thumbnail_src),
        CARD_WIDTH,
        COVER_HEIGHT,
    );

    let count = super::plural(album.photo_count, "photo", "photos");

    let footer = row![
        text(count).size(11),
        Space::new().width(Length::Fill),
        button(text("Delete").size(11))
            .on_press(Message::DeleteAlbum(album.id))
            .padding(Padding::from([2, 8]))
            .style(button::danger),
    ]
    .align_y(Alignment::Center);

    let card = column![
        cover,
        text(album.title.as_str()).size(16),
        text(album.description.as_str()).size(12),
        footer,
    ]
    .spacing(6)
    .width(CARD_WIDTH);

    button(container(card).padding(8).style(|_theme: &_| container::Style {
        background: Some(CARD_BG.into()),
        ..Default::default()
    }))
    .on_press(Message::OpenAlbum(album.id))
    .padding(0)
    .style(button::text)
    .into()
}
