use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

use crate::app::Message;

const BACKDROP: Color = Color {
    a: 0.8,
    ..Color::BLACK
};

/// Layer `content` over a dimmed `base`. Pressing the backdrop emits
/// `on_blur`; presses inside `content` never reach it.
pub fn modal<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(BACKDROP.into()),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
