use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::CANVAS_BG;
use crate::app::{App, Message};
use crate::widgets;

pub fn view(app: &App) -> Element<'_, Message> {
    let photos = app.current_photos();

    let toolbar = row![
        button("< Albums").on_press(Message::ShowAlbums),
        text("All Photos").size(22),
        Space::new().width(Length::Fill),
        text(super::plural(photos.len(), "photo", "photos")).size(12),
    ]
    .spacing(10)
    .padding(10)
    .align_y(Alignment::Center);

    let controls = container(widgets::controls::view(app.gallery_view(), false)).padding([0, 10]);

    let grid = container(
        scrollable(widgets::photos_view(photos, app.thumbnails(), app.gallery_view()))
            .height(Length::Fill)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme: &_| container::Style {
        background: Some(CANVAS_BG.into()),
        ..Default::default()
    });

    column![toolbar, controls, grid]
        .spacing(6)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
