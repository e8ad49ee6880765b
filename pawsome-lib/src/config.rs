use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, entities::CurrentUser, fs::config_dir};

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "core.toml";

/// Handle to the core configuration
pub type Cfg = Arc<RwLock<CoreConfig>>;

/// The core configuration shared by every front end, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    version: u16,
    /// Identity used as the host of every playdate created in a session
    pub current_user: CurrentUser,
    /// Seed file to start sessions from instead of the built-in one
    pub seed_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Load the configuration from the user's config directory, writing the defaults there
    /// first if no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join(FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            debug!("No config at {}, writing defaults", path.display());
            let cfg = Self::default();
            cfg.save_to(path)?;
            Ok(cfg)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_dir()?.join(FILE_NAME))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// Wrap this configuration in a shareable [`Cfg`] handle.
    pub fn into_handle(self) -> Cfg {
        Arc::new(RwLock::new(self))
    }

    #[cfg(test)]
    /// A configuration that never touches the filesystem
    pub(crate) fn mock() -> Self {
        Self::default()
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            current_user: CurrentUser::default(),
            seed_path: None,
        }
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;
    use crate::ProfileId;

    #[test]
    fn test_load_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pawsome").join(FILE_NAME);

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg, CoreConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let mut cfg = CoreConfig::mock();
        cfg.current_user = CurrentUser::new(ProfileId::from(42), "Rex's human");
        cfg.seed_path = Some(PathBuf::from("/tmp/seed.toml"));
        cfg.save_to(&path).unwrap();

        assert_eq!(CoreConfig::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "seed_path = \"dogs.toml\"\n").unwrap();

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg.version(), CURRENT_CONFIG_VERSION);
        assert_eq!(cfg.current_user, CurrentUser::default());
        assert_eq!(cfg.seed_path, Some(PathBuf::from("dogs.toml")));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "version = \"one\"").unwrap();

        assert!(matches!(
            CoreConfig::load_from(&path),
            Err(crate::Error::De(_))
        ));
    }
}
