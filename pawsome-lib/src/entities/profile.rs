use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::entities::ProfileId;

/// A candidate dog shown on the swipe card.
///
/// Profiles come from the seed and are never modified during a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Profile {
    #[getset(get_copy = "pub")]
    id: ProfileId,
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    breed: String,
    #[getset(get_copy = "pub")]
    age: u8,
    #[getset(get = "pub")]
    image_url: String,
}

impl Profile {
    pub fn new(id: ProfileId, name: &str, breed: &str, age: u8, image_url: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            breed: breed.to_string(),
            age,
            image_url: image_url.to_string(),
        }
    }
}
