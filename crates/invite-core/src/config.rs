//! Loading invitation details and resolving the event target.
//!
//! Details are looked up in this order:
//!
//! 1. an explicit path (the `--details` flag of either binary)
//! 2. `<config_dir>/wedding-invite/details.json`
//! 3. the invitation bundled into the binary
//!
//! A missing or malformed event date is a startup failure. Nothing here
//! substitutes a default date, since that would drive a meaningless countdown.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

use crate::error::{InviteError, InviteResult};
use crate::types::{EventInfo, WeddingDetails};

/// Invitation shipped with the binaries.
const BUNDLED_DETAILS: &str = include_str!("../assets/details.json");

/// Directory under the platform config dir that holds the details file.
pub const CONFIG_DIR_NAME: &str = "wedding-invite";

/// File name looked up inside the per-user config directory.
pub const DETAILS_FILE_NAME: &str = "details.json";

/// Where a details record was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsSource {
    /// Path given on the command line
    Explicit(PathBuf),
    /// Per-user config directory
    UserConfig(PathBuf),
    /// Compiled into the binary
    Bundled,
}

impl fmt::Display for DetailsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailsSource::Explicit(path) | DetailsSource::UserConfig(path) => {
                write!(f, "{}", path.display())
            }
            DetailsSource::Bundled => write!(f, "<bundled>"),
        }
    }
}

/// Validated details together with the resolved countdown target.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub details: WeddingDetails,
    date: NaiveDate,
    target: DateTime<FixedOffset>,
}

impl Invitation {
    /// Validate `details` and resolve its event target.
    pub fn new(details: WeddingDetails) -> InviteResult<Self> {
        details.validate()?;
        let date = parse_date(&details.event.date)?;
        let target = resolve_target(&details.event)?;
        Ok(Self {
            details,
            date,
            target,
        })
    }

    /// Parse and resolve a JSON details record.
    pub fn from_json(json: &str) -> InviteResult<Self> {
        let details: WeddingDetails = serde_json::from_str(json)?;
        Self::new(details)
    }

    /// The invitation compiled into the binary.
    pub fn bundled() -> InviteResult<Self> {
        Self::from_json(BUNDLED_DETAILS)
    }

    /// Read and resolve a details file.
    pub fn from_path(path: &Path) -> InviteResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The instant the countdown runs towards, in the event's own offset.
    pub fn target(&self) -> DateTime<FixedOffset> {
        self.target
    }

    /// The countdown target as a UTC instant.
    pub fn target_utc(&self) -> DateTime<Utc> {
        self.target.with_timezone(&Utc)
    }

    /// Event date in long English form, e.g. `"Friday, February 6, 2026"`.
    pub fn formatted_date(&self) -> String {
        format_long_date(self.date)
    }
}

/// Resolve which details to use and load them.
pub fn load_invitation(explicit: Option<&Path>) -> InviteResult<(Invitation, DetailsSource)> {
    load_invitation_from(explicit, dirs::config_dir().as_deref())
}

/// [`load_invitation`] against a given config directory instead of the
/// platform one.
pub fn load_invitation_from(
    explicit: Option<&Path>,
    config_dir: Option<&Path>,
) -> InviteResult<(Invitation, DetailsSource)> {
    if let Some(path) = explicit {
        tracing::debug!("Loading invitation details from {:?}", path);
        let invitation = Invitation::from_path(path)?;
        return Ok((invitation, DetailsSource::Explicit(path.to_path_buf())));
    }

    let user_path = config_dir.map(details_path_in).filter(|p| p.is_file());
    if let Some(path) = user_path {
        tracing::debug!("Loading invitation details from user config {:?}", path);
        let invitation = Invitation::from_path(&path)?;
        return Ok((invitation, DetailsSource::UserConfig(path)));
    }

    tracing::debug!("Using bundled invitation details");
    Ok((Invitation::bundled()?, DetailsSource::Bundled))
}

/// `<config_dir>/wedding-invite/details.json`, if the platform has a config dir.
pub fn user_details_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| details_path_in(&dir))
}

fn details_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_DIR_NAME).join(DETAILS_FILE_NAME)
}

/// Combine date, optional start time and offset into the countdown target.
///
/// A missing time string anchors the target at midnight.
pub fn resolve_target(event: &EventInfo) -> InviteResult<DateTime<FixedOffset>> {
    let date = parse_date(&event.date)?;
    let time = match event.time.as_deref() {
        Some(text) => parse_start_time(text)?,
        None => NaiveTime::MIN,
    };
    let offset = match event.utc_offset.as_deref() {
        Some(text) => parse_offset(text)?,
        None => Utc.fix(),
    };

    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| InviteError::InvalidDate {
            value: event.date.clone(),
            reason: "not representable at the configured offset".to_string(),
        })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> InviteResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|e| InviteError::InvalidDate {
        value: text.to_string(),
        reason: e.to_string(),
    })
}

/// Parse the leading time of day of a display string such as
/// `"8:45 AM - 10:00 AM"`. Both 12-hour and 24-hour forms are accepted.
pub fn parse_start_time(text: &str) -> InviteResult<NaiveTime> {
    let start = text
        .split(['-', '\u{2013}', '\u{2014}'])
        .next()
        .unwrap_or_default()
        .trim();

    ["%I:%M %p", "%I:%M%p", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(start, fmt).ok())
        .ok_or_else(|| InviteError::InvalidTime(text.to_string()))
}

/// Parse a `+HH:MM` / `-HH:MM` offset from UTC.
pub fn parse_offset(text: &str) -> InviteResult<FixedOffset> {
    let invalid = || InviteError::InvalidOffset(text.to_string());
    let trimmed = text.trim();

    let (sign, rest) = match trimmed.chars().next() {
        Some('+') => (1, &trimmed[1..]),
        Some('-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Long English date, e.g. `"Friday, February 6, 2026"`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
