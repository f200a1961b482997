use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Color, Element, Length};

use crate::app::{AlbumDialog, DialogTarget, Message};

const PANEL_BG: Color = Color::from_rgb(0.10, 0.10, 0.11);

pub fn view(dialog: &AlbumDialog) -> Element<'_, Message> {
    let (heading, submit) = match dialog.target {
        DialogTarget::Create => ("New album", "Create"),
        DialogTarget::Edit(_) => ("Edit album", "Save"),
    };

    let title = text_input("Album title", &dialog.title)
        .on_input(Message::DialogTitleChanged)
        .on_submit(Message::SubmitDialog)
        .padding(8);

    let description = text_input("Description", &dialog.description)
        .on_input(Message::DialogDescriptionChanged)
        .on_submit(Message::SubmitDialog)
        .padding(8);

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(13))
            .on_press(Message::CancelDialog)
            .style(button::secondary),
        button(text(submit).size(13)).on_press(Message::SubmitDialog),
    ]
    .spacing(8);

    container(
        column![
            text(heading).size(20),
            text("Title").size(12),
            title,
            text("Description").size(12),
            description,
            buttons,
        ]
        .spacing(8),
    )
    .width(420)
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
