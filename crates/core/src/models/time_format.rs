//! `HH:MM` wire format for wall-clock times.
//!
//! The backend may hand back `HH:MM:SS`; anything past the minutes is dropped
//! on the way in, so `"09:30:45"` reads as 09:30.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%H:%M";

/// Parses `HH:MM`, truncating any seconds suffix.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    let hhmm = trimmed.get(..5)?;
    NaiveTime::parse_from_str(hhmm, FORMAT).ok()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(FORMAT).to_string()
}

pub mod hhmm {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_time(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
    }
}

pub mod hhmm_option {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.serialize_str(&format_time(*time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_time(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid time '{}', expected HH:MM", raw))),
            None => Ok(None),
        }
    }
}
