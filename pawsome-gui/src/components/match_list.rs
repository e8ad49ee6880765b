use iced::{
    Alignment, Element,
    Length::Fill,
    widget::{Column, column, container, row, text},
};
use pawsome_lib::Match;

pub fn view<'a, Message: 'a>(matches: &'a [Match]) -> Element<'a, Message> {
    let rows = matches.iter().map(match_row::<Message>);

    container(
        column![
            text("Your Matches").size(20),
            Column::with_children(rows).spacing(8)
        ]
        .spacing(16),
    )
    .padding(16)
    .width(Fill)
    .style(container::rounded_box)
    .into()
}

fn match_row<'a, Message: 'a>(m: &'a Match) -> Element<'a, Message> {
    row![
        container(text(m.image_url().as_str()).size(8))
            .width(40)
            .height(40)
            .clip(true)
            .style(container::dark),
        text(m.name().as_str()),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
