use iced::{
    Alignment, Element,
    Length::Fill,
    widget::{Column, column, container, row, text},
};
use pawsome_lib::Playdate;

use crate::icons::icon;

pub fn view<'a, Message: 'a>(playdates: &'a [Playdate]) -> Element<'a, Message> {
    container(
        column![
            text("Nearby Playdates").size(20),
            Column::with_children(playdates.iter().map(playdate_row::<Message>)).spacing(12)
        ]
        .spacing(16),
    )
    .padding(16)
    .width(Fill)
    .style(container::rounded_box)
    .into()
}

fn playdate_row<'a, Message: 'a>(playdate: &'a Playdate) -> Element<'a, Message> {
    container(
        column![
            row![icon("calendar"), text(playdate.date().as_str())]
                .spacing(8)
                .align_y(Alignment::Center),
            row![icon("map_pin"), text(playdate.location().as_str())]
                .spacing(8)
                .align_y(Alignment::Center),
            text(playdate.description().as_str()).size(14),
            text(format!("Hosted by: {}", playdate.host_name())).size(14),
        ]
        .spacing(6),
    )
    .padding(8)
    .width(Fill)
    .style(container::bordered_box)
    .into()
}
