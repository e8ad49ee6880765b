//! Core domain entities for Pawsome.
//!
//! Profiles are the candidates shown on the swipe card, matches are profiles the user liked,
//! and playdates are events hosted by matches or by the current user.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter};

mod match_;
mod playdate;
mod profile;

pub use match_::Match;
pub use playdate::{DATE_FORMAT, NewPlaydate, Playdate};
pub use profile::Profile;

/// Identifies a [`Profile`], and any [`Match`] made from it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProfileId(u32);

/// Identifies a [`Playdate`] within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlaydateId(usize);

/// The user driving the session. Hosts every playdate created through the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: ProfileId,
    pub name: String,
}

impl CurrentUser {
    pub fn new(id: ProfileId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::new(ProfileId(1), "You")
    }
}

/// User-editable fields of a [`NewPlaydate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PlaydateField {
    Location,
    Date,
    Description,
}
