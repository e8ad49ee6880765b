use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::entities::{Profile, ProfileId};

/// A [`Profile`] the user liked, along with the photos it has posted.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Match {
    /// Same as the id of the [`Profile`] this match was made from
    #[getset(get_copy = "pub")]
    id: ProfileId,
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    image_url: String,
    /// Image URLs, oldest first
    #[serde(default)]
    #[getset(get = "pub")]
    posts: Vec<String>,
}

impl Match {
    pub fn new(id: ProfileId, name: &str, image_url: &str, posts: Vec<String>) -> Self {
        Self {
            id,
            name: name.to_string(),
            image_url: image_url.to_string(),
            posts,
        }
    }
}

/// A fresh match has not posted anything yet.
impl From<&Profile> for Match {
    fn from(profile: &Profile) -> Self {
        Self::new(profile.id(), profile.name(), profile.image_url(), Vec::new())
    }
}
