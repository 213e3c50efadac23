use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use uuid::Uuid;

use super::time_format::hhmm;

/// Opacity of exception blocks.
pub const FULL_OPACITY: u8 = 100;
/// Opacity of appointments drawn underneath exception blocks.
pub const SHADOW_OPACITY: u8 = 50;

/// What a click on an event should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EventAction {
    EditException(Uuid),
}

/// A display-ready block produced by the projector. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub title: String,
    pub subtitle: Option<String>,
    pub color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub opacity: u8,
    /// `None` for informational shadow entries.
    pub action: Option<EventAction>,
}

impl CalendarEvent {
    pub fn is_shadow(&self) -> bool {
        self.opacity == SHADOW_OPACITY
    }
}
