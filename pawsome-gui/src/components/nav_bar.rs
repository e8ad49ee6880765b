use iced::{
    Alignment, Element,
    Length::Fill,
    widget::{button, container, row, space, text},
};

use crate::{config::Theme, icons::icon};

#[derive(Debug, Clone)]
pub enum Message {
    OpenSeedPressed,
    ThemeTogglePressed,
}

/// Title bar. `status` is shown next to the buttons, e.g. when a seed fails to load.
pub fn view<'a>(theme: Theme, status: Option<&'a str>) -> Element<'a, Message> {
    container(
        row![
            text("Pawsome Playdates").size(24),
            space::horizontal(),
            status.map(|status| text(status).size(14)),
            button(row![icon("folder"), text("Open seed…")].spacing(6))
                .style(button::secondary)
                .on_press(Message::OpenSeedPressed),
            button(icon(theme.toggle_icon()))
                .style(button::secondary)
                .on_press(Message::ThemeTogglePressed),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Fill)
    .style(container::dark)
    .into()
}
