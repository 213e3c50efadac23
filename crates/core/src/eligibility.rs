use chrono::{NaiveDate, NaiveTime};

use crate::{
    models::{clock, exception::ExceptionKind},
    template::WeeklyTemplate,
};

const WORKING_DAY_KINDS: &[ExceptionKind] = &[
    ExceptionKind::DayOff,
    ExceptionKind::Modified,
    ExceptionKind::Break,
];

const NON_WORKING_DAY_KINDS: &[ExceptionKind] = &[ExceptionKind::Working];

/// Exception types a date accepts.
///
/// A working weekday takes `day_off`, `modified` or `break`; a non-working
/// weekday only takes `working`.
pub fn allowed_kinds(template: &WeeklyTemplate, date: NaiveDate) -> &'static [ExceptionKind] {
    if template.is_working_date(date) {
        WORKING_DAY_KINDS
    } else {
        NON_WORKING_DAY_KINDS
    }
}

pub fn is_eligible(template: &WeeklyTemplate, date: NaiveDate, kind: ExceptionKind) -> bool {
    allowed_kinds(template, date).contains(&kind)
}

/// Initial field values for a new exception on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionDefaults {
    pub kind: ExceptionKind,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// A lunch break on working days, the template's own hours on the others.
pub fn defaults_for(template: &WeeklyTemplate, date: NaiveDate) -> ExceptionDefaults {
    if template.is_working_date(date) {
        ExceptionDefaults {
            kind: ExceptionKind::Break,
            start_time: clock(12, 0),
            end_time: clock(13, 0),
        }
    } else {
        let (start_time, end_time) = template.hours_for(date);
        ExceptionDefaults {
            kind: ExceptionKind::Working,
            start_time,
            end_time,
        }
    }
}

/// Type a new exception should carry once its date moves to `date`.
///
/// `working` becomes `break` on a working day; anything becomes `working` on a
/// non-working day.
pub fn corrected_kind(template: &WeeklyTemplate, date: NaiveDate, kind: ExceptionKind) -> ExceptionKind {
    if template.is_working_date(date) {
        match kind {
            ExceptionKind::Working => ExceptionKind::Break,
            other => other,
        }
    } else {
        ExceptionKind::Working
    }
}
