use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    entities::{Match, Playdate, Profile},
};

const BUILTIN: &str = include_str!("seed.toml");

/// The data a [`MatchSession`](crate::MatchSession) starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Candidates, in the order they are shown
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub playdates: Vec<Playdate>,
}

impl Seed {
    /// The seed bundled with Pawsome: four dogs to browse, two existing matches and their
    /// playdates.
    pub fn builtin() -> Result<Self> {
        Ok(toml::from_str(BUILTIN)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let seed: Self = toml::from_str(&contents)?;

        debug!(
            "Loaded seed from {}: {} profiles, {} matches, {} playdates",
            path.display(),
            seed.profiles.len(),
            seed.matches.len(),
            seed.playdates.len()
        );

        Ok(seed)
    }

    /// Load the seed at `path`, or the built-in one if there is none.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;
    use crate::{Error, ProfileId};

    #[test]
    fn test_builtin() {
        let seed = Seed::builtin().unwrap();

        let names: Vec<&str> = seed.profiles.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["Buddy", "Luna", "Max", "Bella"]);

        let match_ids: Vec<ProfileId> = seed.matches.iter().map(Match::id).collect();
        assert_eq!(match_ids, [ProfileId::from(5), ProfileId::from(6)]);

        let post_counts: Vec<usize> = seed.matches.iter().map(|m| m.posts().len()).collect();
        assert_eq!(post_counts, [2, 1]);

        assert_eq!(seed.playdates.len(), 2);
    }

    #[test]
    fn test_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.toml");
        fs::write(
            &path,
            r#"
            [[profiles]]
            id = 10
            name = "Rex"
            breed = "Beagle"
            age = 5
            image_url = "rex.png"
            "#,
        )
        .unwrap();

        let seed = Seed::load_or_builtin(Some(&path)).unwrap();

        assert_eq!(seed.profiles.len(), 1);
        assert!(seed.matches.is_empty());
        assert!(seed.playdates.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();

        assert!(matches!(
            Seed::load(&dir.path().join("nope.toml")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.toml");
        fs::write(&path, "[[profiles]]\nid = \"one\"\n").unwrap();

        assert!(matches!(Seed::load(&path), Err(Error::De(_))));
    }
}
