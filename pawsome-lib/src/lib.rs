//! Core of Pawsome Playdates.
//!
//! Holds the domain entities, the built-in seed data and the [`MatchSession`] state engine
//! that both the GUI and the CLI drive.

use thiserror::Error;

use crate::entities::PlaydateField;

pub mod config;
pub mod entities;
pub mod fs;
pub mod seed;
pub mod session;

pub use entities::{CurrentUser, Match, NewPlaydate, Playdate, PlaydateId, Profile, ProfileId};
pub use seed::Seed;
pub use session::{Decision, MatchSession, Post};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("A seed must contain at least one profile")]
    NoProfiles,
    #[error("The playdate {0} must not be empty")]
    EmptyField(PlaydateField),
    #[error("'{date}' is not a calendar date (expected YYYY-MM-DD)")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("$HOME must exist")]
    NoHomeDir,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    De(#[from] toml::de::Error),
    #[error("Failed to serialize TOML: {0}")]
    Ser(#[from] toml::ser::Error),
}
