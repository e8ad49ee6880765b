use iced::{
    Element,
    Length::{Fill, FillPortion},
    widget::{Column, Row, column, container, space, text},
};
use pawsome_lib::{MatchSession, Post};

const COLUMNS: usize = 2;

/// Gallery of every post made by the session's matches.
pub fn view<'a, Message: 'a>(session: &'a MatchSession) -> Element<'a, Message> {
    let posts: Vec<Post<'a>> = session.posts().collect();

    let gallery: Element<'a, Message> = if posts.is_empty() {
        text("No posts yet").into()
    } else {
        Column::with_children(posts.chunks(COLUMNS).map(|chunk| -> Element<'a, Message> {
            let mut tiles =
                Row::with_children(chunk.iter().copied().map(post_tile::<Message>)).spacing(16);

            // Keep a lone last tile at the same width as the others
            for _ in chunk.len()..COLUMNS {
                tiles = tiles.push(space::horizontal().width(FillPortion(1)));
            }

            tiles.into()
        }))
        .spacing(16)
        .into()
    };

    container(column![text("Match Posts").size(20), gallery].spacing(16))
        .padding(16)
        .width(Fill)
        .style(container::rounded_box)
        .into()
}

fn post_tile<'a, Message: 'a>(post: Post<'a>) -> Element<'a, Message> {
    container(column![
        text(post.url).size(12),
        space::vertical(),
        container(text(post.author).size(14))
            .padding([4, 8])
            .style(container::dark),
    ])
    .padding(8)
    .width(FillPortion(1))
    .height(160)
    .style(container::bordered_box)
    .into()
}
