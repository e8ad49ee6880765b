use iced::{
    Element,
    Length::Fill,
    widget::{button, column, container, row, space, text},
};
use pawsome_lib::{Decision, Profile};

use crate::icons::icon;

/// The swipe card for `profile`. Emits the [`Decision`] the user made.
pub fn view(profile: &Profile) -> Element<'_, Decision> {
    container(column![
        container(text(profile.image_url().as_str()).size(12))
            .center(Fill)
            .height(256)
            .style(container::dark),
        column![
            text(format!("{}, {}", profile.name(), profile.age())).size(22),
            text(profile.breed().as_str()),
        ]
        .padding(16),
        row![
            button(icon("x"))
                .style(button::danger)
                .on_press(Decision::Pass),
            space::horizontal(),
            button(icon("heart"))
                .style(button::success)
                .on_press(Decision::Like),
        ]
        .padding(16),
    ])
    .width(Fill)
    .style(container::rounded_box)
    .into()
}
