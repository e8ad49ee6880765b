use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Name of the icon for the toggle button, which shows the theme it switches to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
        }
    }
}
