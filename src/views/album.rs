use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::CANVAS_BG;
use crate::app::{App, Message};
use crate::widgets;

pub fn view(app: &App) -> Element<'_, Message> {
    let (title, description) = app
        .current_album()
        .map(|album| (album.title.as_str(), album.description.as_str()))
        .unwrap_or_default();
    let photos = app.current_photos();
    let has_photos = !photos.is_empty();

    let toolbar = row![
        button("< Albums").on_press(Message::ShowAlbums),
        column![text(title).size(22), text(description).size(12)].spacing(2),
        Space::new().width(Length::Fill),
        button("Edit").on_press(Message::EditAlbum),
        button("Add Photos").on_press(Message::AddPhotos),
        button("Print Album").on_press_maybe(has_photos.then_some(Message::PrintAlbum)),
        button("Delete All")
            .on_press_maybe(has_photos.then_some(Message::DeleteAllPhotos))
            .style(button::danger),
    ]
    .spacing(10)
    .padding(10)
    .align_y(Alignment::Center);

    let controls = container(widgets::controls::view(app.album_view(), true)).padding([0, 10]);

    let photos_view = container(
        scrollable(widgets::photos_view(photos, app.thumbnails(), app.album_view()))
            .height(Length::Fill)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme: &_| container::Style {
        background: Some(CANVAS_BG.into()),
        ..Default::default()
    });

    let status = container(text(super::plural(photos.len(), "photo", "photos")).size(12))
        .padding(5)
        .width(Length::Fill);

    column![toolbar, controls, photos_view, status]
        .spacing(6)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
