use chrono::NaiveDate;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    Error, Result,
    entities::{CurrentUser, PlaydateField, PlaydateId, ProfileId},
};

/// Format of [`Playdate::date`], as produced by a calendar date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Playdate {
    #[getset(get_copy = "pub")]
    id: PlaydateId,
    #[getset(get_copy = "pub")]
    host_id: ProfileId,
    #[getset(get = "pub")]
    host_name: String,
    #[getset(get = "pub")]
    location: String,
    /// Calendar date, `YYYY-MM-DD`
    #[getset(get = "pub")]
    date: String,
    #[getset(get = "pub")]
    description: String,
}

impl Playdate {
    /// Build a playdate hosted by `host` from submitted form data.
    pub(crate) fn hosted(id: PlaydateId, host: &CurrentUser, new_playdate: NewPlaydate) -> Self {
        let NewPlaydate {
            location,
            date,
            description,
        } = new_playdate;

        Self {
            id,
            host_id: host.id,
            host_name: host.name.clone(),
            location,
            date,
            description,
        }
    }
}

/// Form data for hosting a [`Playdate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlaydate {
    pub location: String,
    pub date: String,
    pub description: String,
}

impl NewPlaydate {
    pub fn new(location: &str, date: &str, description: &str) -> Self {
        Self {
            location: location.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        }
    }

    pub fn field(&self, field: PlaydateField) -> &str {
        match field {
            PlaydateField::Location => &self.location,
            PlaydateField::Date => &self.date,
            PlaydateField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: PlaydateField) -> &mut String {
        match field {
            PlaydateField::Location => &mut self.location,
            PlaydateField::Date => &mut self.date,
            PlaydateField::Description => &mut self.description,
        }
    }

    /// Check the form is ready to submit: every field is filled in and the date is a real
    /// calendar date.
    pub fn validate(&self) -> Result<()> {
        for field in PlaydateField::iter() {
            if self.field(field).trim().is_empty() {
                return Err(Error::EmptyField(field));
            }
        }

        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|source| {
            Error::InvalidDate {
                date: self.date.clone(),
                source,
            }
        })?;

        Ok(())
    }

    /// Reset the form
    pub fn clear(&mut self) {
        self.location.clear();
        self.date.clear();
        self.description.clear();
    }
}
