//! Core types for the wedding invite
//!
//! The details record is plain data: it is read once at startup, validated,
//! and then only ever borrowed by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::{InviteError, InviteResult};

/// One half of the couple, with parentage as printed on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub full_name: String,
    pub father: String,
    pub mother: String,
}

/// Where the ceremony takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
    /// Opaque link handed to the presentation layer; never validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
}

/// When the ceremony takes place.
///
/// `date` is a civil calendar date (`YYYY-MM-DD`). `time` is the free-form
/// string shown on the card (`"8:45 AM - 10:00 AM"`); its leading time of day
/// anchors the countdown target. `utc_offset` pins the civil date and time to
/// an absolute instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
    pub venue: Venue,
}

/// Everything printed on the invitation card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingDetails {
    pub groom: Person,
    pub bride: Person,
    pub event: EventInfo,
    /// Link to the companion app, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion_app_url: Option<String>,
}

impl WeddingDetails {
    /// Check that every required field carries a value.
    ///
    /// Only presence is checked here. The date, time and offset are checked
    /// when the event target is resolved.
    pub fn validate(&self) -> InviteResult<()> {
        let required = [
            ("groom.full_name", &self.groom.full_name),
            ("groom.father", &self.groom.father),
            ("groom.mother", &self.groom.mother),
            ("bride.full_name", &self.bride.full_name),
            ("bride.father", &self.bride.father),
            ("bride.mother", &self.bride.mother),
            ("event.date", &self.event.date),
            ("event.venue.name", &self.event.venue.name),
            ("event.venue.address", &self.event.venue.address),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(InviteError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Initials embossed on the wax seal, e.g. `"V & S"`.
    pub fn seal_initials(&self) -> String {
        format!(
            "{} & {}",
            initial(&self.groom.full_name),
            initial(&self.bride.full_name)
        )
    }
}

fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
