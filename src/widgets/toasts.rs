use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Space, button, column, container, row, stack, text};
use iced::{Border, Color, Element, Length};

use crate::app::Message;
use crate::notifications::{Notification, Notifications};

const TOAST_BG: Color = Color::from_rgb(0.13, 0.13, 0.14);
const TOAST_WIDTH: f32 = 320.0;

pub fn overlay<'a>(
    base: Element<'a, Message>,
    notifications: &'a Notifications,
) -> Element<'a, Message> {
    if notifications.is_empty() {
        return base;
    }

    let toasts = Column::with_children(notifications.visible().map(toast)).spacing(8);

    stack![
        base,
        container(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom),
    ]
    .into()
}

fn toast(notification: &Notification) -> Element<'_, Message> {
    let accent = notification.severity().color();

    let header = row![
        text(notification.title()).size(14),
        Space::new().width(Length::Fill),
        button(text("x").size(11))
            .on_press(Message::DismissNotification(notification.id()))
            .padding([1, 6])
            .style(button::text),
    ];

    container(column![header, text(notification.body()).size(12)].spacing(4))
        .width(TOAST_WIDTH)
        .padding(10)
        .style(move |_theme: &_| container::Style {
            background: Some(TOAST_BG.into()),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}
