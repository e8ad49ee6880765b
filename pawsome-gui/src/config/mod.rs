use std::{fs, sync::Arc};

use pawsome_lib::{Result, fs::config_dir};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use crate::config::theme::Theme;

mod theme;

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "gui.toml";

/// Handle to the GUI's configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// The GUI's configuration, serialized to TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    version: u16,
    pub theme: Theme,
}

impl GuiConfig {
    /// Load the config, falling back to the defaults if it can't be read.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            warn!("Using the default GUI config: {err}");
            Self::default()
        })
    }

    fn try_load() -> Result<Self> {
        let path = config_dir()?.join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let cfg = Self::default();
            cfg.save()?;
            Ok(cfg)
        }
    }

    pub fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        fs::write(config_dir()?.join(FILE_NAME), contents)?;

        Ok(())
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            theme: Theme::default(),
        }
    }
}
