use iced::widget::{Svg, svg};
use include_dir::{Dir, include_dir};
use tracing::warn;

static ICONS: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Load one of the bundled SVG icons by file stem. Unknown names render as an empty icon.
pub fn icon(name: &str) -> Svg<'static> {
    let contents: &'static [u8] = match ICONS.get_file(format!("{name}.svg")) {
        Some(file) => file.contents(),
        None => {
            warn!("No icon named '{name}'");
            &[]
        }
    };

    svg(svg::Handle::from_memory(contents)).width(20).height(20)
}
