//! Helpers for the zero-padded "HH:MM" time-of-day strings used across the
//! doctor and appointment tables.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid time '{0}', expected 24-hour HH:MM")]
pub struct InvalidTime(pub String);

/// Parse a 24-hour "HH:MM" string into (hours, minutes).
pub fn parse_hhmm(value: &str) -> Result<(u32, u32), InvalidTime> {
    let invalid = || InvalidTime(value.to_string());

    let (hours_part, minutes_part) = value.split_once(':').ok_or_else(invalid)?;
    if hours_part.len() != 2 || minutes_part.len() != 2 {
        return Err(invalid());
    }

    let hours: u32 = hours_part.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes_part.parse().map_err(|_| invalid())?;

    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }

    Ok((hours, minutes))
}

/// Format (hours, minutes) back into a zero-padded "HH:MM" string.
pub fn format_hhmm(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

/// Validate that a value is a well-formed "HH:MM" string.
pub fn is_valid_hhmm(value: &str) -> bool {
    parse_hhmm(value).is_ok()
}
