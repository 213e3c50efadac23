use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_format::hhmm_option;
use crate::errors::{ScheduleError, ScheduleResult};

/// The closed set of ways a date can deviate from the weekly template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    /// The whole day is blocked.
    DayOff,
    /// Working hours differ from the template.
    Modified,
    /// An ad-hoc working day on an otherwise non-working weekday.
    Working,
    /// A pause inside a working day.
    Break,
}

impl ExceptionKind {
    pub const ALL: [ExceptionKind; 4] = [
        ExceptionKind::DayOff,
        ExceptionKind::Modified,
        ExceptionKind::Working,
        ExceptionKind::Break,
    ];

    /// Every kind except `day_off` carries its own start and end time.
    pub fn is_timed(self) -> bool {
        !matches!(self, ExceptionKind::DayOff)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExceptionKind::DayOff => "day_off",
            ExceptionKind::Modified => "modified",
            ExceptionKind::Working => "working",
            ExceptionKind::Break => "break",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExceptionKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExceptionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ScheduleError::Validation(format!("Unknown exception type '{}'", s)))
    }
}

/// A persisted override of the weekly template for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleException {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: ExceptionKind,
    #[serde(default, with = "hhmm_option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm_option")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ScheduleException {
    pub fn from_payload(id: Uuid, payload: ExceptionPayload) -> Self {
        let payload = payload.normalized();
        Self {
            id,
            date: payload.date,
            kind: payload.kind,
            start_time: payload.start_time,
            end_time: payload.end_time,
            reason: payload.reason,
        }
    }
}

/// Request body for creating or replacing an exception.
///
/// Times are left out of the JSON entirely for `day_off`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionPayload {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: ExceptionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm_option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm_option")]
    pub end_time: Option<NaiveTime>,
}

impl ExceptionPayload {
    pub fn new(
        date: NaiveDate,
        kind: ExceptionKind,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        reason: Option<String>,
    ) -> Self {
        Self {
            date,
            kind,
            reason,
            start_time,
            end_time,
        }
        .normalized()
    }

    /// Drops times on `day_off` and blank reasons.
    pub fn normalized(mut self) -> Self {
        if !self.kind.is_timed() {
            self.start_time = None;
            self.end_time = None;
        }
        self.reason = self
            .reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty());
        self
    }

    /// Timed kinds need both ends, and the span must not be empty or inverted.
    pub fn validate(&self) -> ScheduleResult<()> {
        if !self.kind.is_timed() {
            return Ok(());
        }

        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if start < end => Ok(()),
            (Some(start), Some(end)) => Err(ScheduleError::Validation(format!(
                "Start time {} must be before end time {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            ))),
            _ => Err(ScheduleError::Validation(format!(
                "Exception type '{}' requires a start and end time",
                self.kind
            ))),
        }
    }
}
