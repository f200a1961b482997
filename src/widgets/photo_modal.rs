use iced::widget::image::Handle;
use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Color, Element, Length};

use albumen_core::models::Photo;

use crate::app::Message;

const PANEL_BG: Color = Color::from_rgb(0.10, 0.10, 0.11);
const IMAGE_MAX: f32 = 760.0;

pub fn view<'a>(
    photo: &'a Photo,
    full: Option<&Handle>,
    can_delete: bool,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match full {
        Some(handle) => image(handle.clone())
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
        None => container(text("Loading image...").size(16))
            .width(IMAGE_MAX)
            .height(IMAGE_MAX * 0.6)
            .center_x(IMAGE_MAX)
            .center_y(IMAGE_MAX * 0.6)
            .into(),
    };

    let mut actions = row![
        button(text("Print").size(13)).on_press(Message::PrintPhoto(photo.id)),
        button(text("Download").size(13)).on_press(Message::DownloadPhoto(photo.id)),
    ]
    .spacing(8);
    if can_delete {
        actions = actions.push(
            button(text("Delete").size(13))
                .on_press(Message::DeletePhoto(photo.id))
                .style(button::danger),
        );
    }

    let header = row![
        text(photo.title.as_str()).size(20),
        Space::new().width(Length::Fill),
        button(text("Close").size(13))
            .on_press(Message::ClosePhoto)
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let body = column![
        header,
        container(picture).max_width(IMAGE_MAX).max_height(IMAGE_MAX),
        text(photo.alt.as_str()).size(13),
        super::tag_chips(&photo.tags, usize::MAX),
        actions,
    ]
    .spacing(12)
    .max_width(IMAGE_MAX + 40.0);

    container(body)
        .padding(20)
        .style(|_theme: &_| container::Style {
            background: Some(PANEL_BG.into()),
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
