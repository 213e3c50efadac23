//! # Calendar projection
//!
//! Turns the weekly template, the exceptions and the appointments of a visible
//! range into one flat list of [`CalendarEvent`]s:
//!
//! 1. every appointment that is not cancelled becomes a shadow event at half
//!    opacity, titled with its service and subtitled with its client;
//! 2. every exception becomes a block styled by its type. A `day_off` block
//!    spans the template's hours for that weekday, every other type spans its
//!    own times. A timed exception missing a time is skipped.
//!
//! Appointments come first, exceptions after, each in input order. The
//! calendar view orders events within a day. Several exceptions on one date
//! keep their input order, so the last one is drawn on top.

use crate::{
    calendar::DateRange,
    models::{
        appointment::Appointment,
        event::{CalendarEvent, EventAction, FULL_OPACITY, SHADOW_OPACITY},
        exception::{ExceptionKind, ScheduleException},
    },
    style::{exception_style, APPOINTMENT_STYLE},
    template::WeeklyTemplate,
};

const UNTITLED_APPOINTMENT: &str = "Appointment";

/// Projects every input, regardless of date.
pub fn project(
    template: &WeeklyTemplate,
    exceptions: &[ScheduleException],
    appointments: &[Appointment],
) -> Vec<CalendarEvent> {
    let shadows = appointments.iter().filter_map(appointment_event);
    let blocks = exceptions
        .iter()
        .filter_map(|exception| exception_event(template, exception));

    shadows.chain(blocks).collect()
}

/// Projects only the inputs dated inside `range`.
pub fn project_range(
    range: DateRange,
    template: &WeeklyTemplate,
    exceptions: &[ScheduleException],
    appointments: &[Appointment],
) -> Vec<CalendarEvent> {
    let shadows = appointments
        .iter()
        .filter(|appointment| range.contains(appointment.date))
        .filter_map(appointment_event);
    let blocks = exceptions
        .iter()
        .filter(|exception| range.contains(exception.date))
        .filter_map(|exception| exception_event(template, exception));

    shadows.chain(blocks).collect()
}

fn appointment_event(appointment: &Appointment) -> Option<CalendarEvent> {
    if appointment.is_cancelled() {
        return None;
    }

    let title = appointment
        .service
        .as_ref()
        .map(|service| service.name.clone())
        .unwrap_or_else(|| UNTITLED_APPOINTMENT.to_string());

    Some(CalendarEvent {
        id: format!("appointment-{}", appointment.id),
        date: appointment.date,
        start_time: appointment.start_time,
        end_time: appointment.end_time,
        title,
        subtitle: appointment.client.as_ref().map(|client| client.name.clone()),
        color: APPOINTMENT_STYLE.color,
        border_color: APPOINTMENT_STYLE.border_color,
        text_color: APPOINTMENT_STYLE.text_color,
        opacity: SHADOW_OPACITY,
        action: None,
    })
}

fn exception_event(template: &WeeklyTemplate, exception: &ScheduleException) -> Option<CalendarEvent> {
    let (start_time, end_time) = match exception.kind {
        ExceptionKind::DayOff => template.hours_for(exception.date),
        _ => (exception.start_time?, exception.end_time?),
    };
    let style = exception_style(exception.kind);

    Some(CalendarEvent {
        id: format!("exception-{}", exception.id),
        date: exception.date,
        start_time,
        end_time,
        title: style.label.to_string(),
        subtitle: exception.reason.clone(),
        color: style.event.color,
        border_color: style.event.border_color,
        text_color: style.event.text_color,
        opacity: FULL_OPACITY,
        action: Some(EventAction::EditException(exception.id)),
    })
}
