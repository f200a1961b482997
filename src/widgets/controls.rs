use iced::widget::{Space, button, column, row, slider, text};
use iced::{Alignment, Element, Length};

use albumen_core::layout::{SPACING_MAX, SPACING_MIN, SPACING_STEP, ViewConfig, ViewMode};
use albumen_core::orientation::Orientation;

use crate::app::Message;

/// View mode tabs and spacing slider. `album_controls` adds the orientation
/// switch and the delete toggle.
pub fn view(config: &ViewConfig, album_controls: bool) -> Element<'_, Message> {
    let tabs = row(ViewMode::ALL.iter().map(|&mode| {
        let style = if mode == config.mode {
            button::primary
        } else {
            button::secondary
        };
        button(text(mode.to_string()).size(12))
            .on_press(Message::SetViewMode(mode))
            .style(style)
            .into()
    }))
    .spacing(4);

    let spacing = column![
        text(format!("Spacing {} px", config.spacing)).size(12),
        slider(SPACING_MIN..=SPACING_MAX, config.spacing, Message::SpacingChanged)
            .step(SPACING_STEP)
            .width(160),
    ]
    .spacing(4);

    let mut bar = row![tabs, Space::new().width(16), spacing]
        .spacing(10)
        .align_y(Alignment::Center);

    if album_controls {
        let orientation = row(Orientation::ALL.iter().map(|&orientation| {
            let style = if orientation == config.orientation {
                button::primary
            } else {
                button::secondary
            };
            button(text(orientation.to_string()).size(12))
                .on_press(Message::SetOrientation(orientation))
                .style(style)
                .into()
        }))
        .spacing(4);

        let delete_label = if config.show_delete {
            "Hide delete"
        } else {
            "Show delete"
        };

        bar = bar.push(Space::new().width(16)).push(orientation).push(
            button(text(delete_label).size(12))
                .on_press(Message::ToggleDeleteControls)
                .style(button::secondary),
        );
    }

    bar.push(Space::new().width(Length::Fill)).into()
}
