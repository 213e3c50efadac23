use chrono::{Duration, NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotkeeper_core::{
    calendar::{DateRange, ViewMode},
    models::{
        appointment::{Appointment, AppointmentStatus, ClientSummary, ServiceSummary},
        event::{EventAction, FULL_OPACITY, SHADOW_OPACITY},
        exception::{ExceptionKind, ScheduleException},
        schedule::ScheduleDay,
    },
    projector::{project, project_range},
    style::{exception_style, APPOINTMENT_STYLE},
    template::WeeklyTemplate,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn exception(
    on: NaiveDate,
    kind: ExceptionKind,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
) -> ScheduleException {
    ScheduleException {
        id: Uuid::new_v4(),
        date: on,
        kind,
        start_time: start,
        end_time: end,
        reason: None,
    }
}

fn appointment(on: NaiveDate, start: NaiveTime, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        date: on,
        start_time: start,
        end_time: start + Duration::hours(1),
        status,
        service: Some(ServiceSummary {
            id: None,
            name: "Massage".to_string(),
        }),
        client: Some(ClientSummary {
            id: None,
            name: "Alex Kim".to_string(),
        }),
    }
}

fn monday_template() -> WeeklyTemplate {
    WeeklyTemplate::from_rows(vec![ScheduleDay {
        day_of_week: 0,
        start_time: time(9, 0),
        end_time: time(18, 0),
        is_working_day: true,
    }])
}

#[test]
fn test_day_off_spans_template_hours() {
    let template = monday_template();
    let monday = date(2024, 1, 1);
    let day_off = exception(monday, ExceptionKind::DayOff, None, None);

    let events = project(&template, &[day_off.clone()], &[]);

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.date, monday);
    assert_eq!((event.start_time, event.end_time), (time(9, 0), time(18, 0)));
    assert_eq!(event.title, "Day off");
    assert_eq!(event.opacity, FULL_OPACITY);
    assert_eq!(event.action, Some(EventAction::EditException(day_off.id)));
}

#[test]
fn test_day_off_uses_custom_hours_of_its_weekday() {
    let template = WeeklyTemplate::from_rows(vec![ScheduleDay {
        day_of_week: 3,
        start_time: time(7, 45),
        end_time: time(15, 15),
        is_working_day: true,
    }]);
    let thursday = date(2024, 1, 4);

    let events = project(&template, &[exception(thursday, ExceptionKind::DayOff, None, None)], &[]);

    assert_eq!((events[0].start_time, events[0].end_time), (time(7, 45), time(15, 15)));
}

#[test]
fn test_day_off_without_template_row_falls_back_to_nine_to_six() {
    let template = WeeklyTemplate::from_rows(Vec::new());
    let friday = date(2024, 1, 5);

    let events = project(&template, &[exception(friday, ExceptionKind::DayOff, None, None)], &[]);

    assert_eq!((events[0].start_time, events[0].end_time), (time(9, 0), time(18, 0)));
}

#[test]
fn test_break_keeps_its_own_times() {
    let template = WeeklyTemplate::from_rows(vec![ScheduleDay {
        day_of_week: 1,
        start_time: time(8, 0),
        end_time: time(20, 0),
        is_working_day: true,
    }]);
    let tuesday = date(2024, 1, 2);
    let lunch = exception(tuesday, ExceptionKind::Break, Some(time(12, 0)), Some(time(13, 0)));

    let events = project(&template, &[lunch], &[]);

    assert_eq!(events.len(), 1);
    assert_eq!((events[0].start_time, events[0].end_time), (time(12, 0), time(13, 0)));
    assert_eq!(events[0].title, "Break");
}

#[rstest]
#[case(ExceptionKind::Modified)]
#[case(ExceptionKind::Working)]
#[case(ExceptionKind::Break)]
fn test_timed_exceptions_pass_through(#[case] kind: ExceptionKind) {
    let template = WeeklyTemplate::initial();
    let on = date(2024, 2, 14);
    let events = project(&template, &[exception(on, kind, Some(time(6, 5)), Some(time(22, 40)))], &[]);

    assert_eq!((events[0].start_time, events[0].end_time), (time(6, 5), time(22, 40)));
    let style = exception_style(kind);
    assert_eq!(events[0].color, style.event.color);
    assert_eq!(events[0].border_color, style.event.border_color);
    assert_eq!(events[0].text_color, style.event.text_color);
}

#[rstest]
#[case(None, None)]
#[case(Some(time(10, 0)), None)]
#[case(None, Some(time(10, 0)))]
fn test_timed_exception_missing_times_is_skipped(
    #[case] start: Option<NaiveTime>,
    #[case] end: Option<NaiveTime>,
) {
    let template = WeeklyTemplate::initial();
    let events = project(
        &template,
        &[exception(date(2024, 1, 2), ExceptionKind::Modified, start, end)],
        &[],
    );

    assert!(events.is_empty());
}

#[test]
fn test_cancelled_appointments_are_excluded() {
    let template = WeeklyTemplate::initial();
    let wednesday = date(2024, 1, 3);
    let appointments = vec![
        appointment(wednesday, time(9, 0), AppointmentStatus::Confirmed),
        appointment(wednesday, time(11, 0), AppointmentStatus::Cancelled),
        appointment(wednesday, time(14, 0), AppointmentStatus::Pending),
    ];

    let events = project(&template, &[], &appointments);

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event.is_shadow()));
    assert!(events.iter().all(|event| event.opacity == SHADOW_OPACITY));
    let ids: Vec<String> = events.iter().map(|event| event.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            format!("appointment-{}", appointments[0].id),
            format!("appointment-{}", appointments[2].id),
        ]
    );
}

#[test]
fn test_shadow_event_fields() {
    let template = WeeklyTemplate::initial();
    let booked = appointment(date(2024, 1, 3), time(15, 30), AppointmentStatus::Completed);

    let events = project(&template, &[], &[booked.clone()]);
    let event = &events[0];

    assert_eq!(event.title, "Massage");
    assert_eq!(event.subtitle.as_deref(), Some("Alex Kim"));
    assert_eq!((event.start_time, event.end_time), (time(15, 30), time(16, 30)));
    assert_eq!(event.color, APPOINTMENT_STYLE.color);
    assert_eq!(event.action, None);
}

#[test]
fn test_appointments_come_before_exceptions() {
    let template = WeeklyTemplate::initial();
    let tuesday = date(2024, 1, 2);
    let exceptions = vec![
        exception(tuesday, ExceptionKind::Break, Some(time(12, 0)), Some(time(13, 0))),
        exception(tuesday, ExceptionKind::DayOff, None, None),
    ];
    let appointments = vec![
        appointment(tuesday, time(16, 0), AppointmentStatus::Confirmed),
        appointment(tuesday, time(8, 0), AppointmentStatus::Confirmed),
    ];

    let events = project(&template, &exceptions, &appointments);

    let ids: Vec<String> = events.iter().map(|event| event.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            format!("appointment-{}", appointments[0].id),
            format!("appointment-{}", appointments[1].id),
            format!("exception-{}", exceptions[0].id),
            format!("exception-{}", exceptions[1].id),
        ]
    );
}

#[test]
fn test_projection_is_idempotent_and_leaves_inputs_alone() {
    let template = WeeklyTemplate::initial();
    let monday = date(2024, 1, 8);
    let exceptions = vec![
        exception(monday, ExceptionKind::DayOff, None, None),
        exception(monday + Duration::days(1), ExceptionKind::Modified, Some(time(10, 0)), Some(time(15, 0))),
    ];
    let appointments = vec![
        appointment(monday, time(9, 0), AppointmentStatus::Confirmed),
        appointment(monday, time(10, 0), AppointmentStatus::Cancelled),
    ];
    let template_before = template.clone();
    let exceptions_before = exceptions.clone();
    let appointments_before = appointments.clone();

    let first = project(&template, &exceptions, &appointments);
    let second = project(&template, &exceptions, &appointments);

    assert_eq!(first, second);
    assert_eq!(template, template_before);
    assert_eq!(exceptions, exceptions_before);
    assert_eq!(appointments, appointments_before);
}

#[test]
fn test_project_range_drops_out_of_range_inputs() {
    let template = WeeklyTemplate::initial();
    let range = DateRange::visible(date(2024, 1, 10), ViewMode::Week);
    let inside = date(2024, 1, 14);
    let outside = date(2024, 1, 15);

    let events = project_range(
        range,
        &template,
        &[
            exception(inside, ExceptionKind::Working, Some(time(10, 0)), Some(time(12, 0))),
            exception(outside, ExceptionKind::DayOff, None, None),
        ],
        &[
            appointment(outside, time(9, 0), AppointmentStatus::Confirmed),
            appointment(inside, time(10, 0), AppointmentStatus::Confirmed),
        ],
    );

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event.date == inside));
}

#[test]
fn test_reason_becomes_subtitle() {
    let template = WeeklyTemplate::initial();
    let mut holiday = exception(date(2024, 12, 25), ExceptionKind::DayOff, None, None);
    holiday.reason = Some("Christmas".to_string());

    let events = project(&template, &[holiday], &[]);

    assert_eq!(events[0].subtitle.as_deref(), Some("Christmas"));
}
