use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use slotkeeper_core::models::{
    appointment::{Appointment, AppointmentStatus},
    exception::{ExceptionKind, ExceptionPayload},
    schedule::ScheduleDay,
};
use slotkeeper_store::{
    create_pool,
    repositories::{appointment, exception, weekly},
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn full_week() -> Vec<ScheduleDay> {
    (0..7)
        .rev()
        .map(|day| ScheduleDay {
            day_of_week: day,
            start_time: time(8, 0),
            end_time: time(16, 0),
            is_working_day: day < 5,
        })
        .collect()
}

fn payload(on: NaiveDate, kind: ExceptionKind) -> ExceptionPayload {
    ExceptionPayload::new(on, kind, Some(time(12, 0)), Some(time(13, 0)), None)
}

fn booking(on: NaiveDate, start: NaiveTime, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        date: on,
        start_time: start,
        end_time: start + chrono::Duration::minutes(45),
        status,
        service: None,
        client: None,
    }
}

#[tokio::test]
async fn test_weekly_schedule_starts_empty() {
    let pool = create_pool();

    let days = weekly::get_weekly_schedule(&pool).await.unwrap();

    assert!(days.is_empty());
}

#[tokio::test]
async fn test_replace_weekly_schedule_stores_weekday_order() {
    let pool = create_pool();

    weekly::replace_weekly_schedule(&pool, &full_week()).await.unwrap();
    let days = weekly::get_weekly_schedule(&pool).await.unwrap();

    let order: Vec<u8> = days.iter().map(|day| day.day_of_week).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(days[0].start_time, time(8, 0));
}

#[tokio::test]
async fn test_invalid_replacement_leaves_previous_rows() {
    let pool = create_pool();
    weekly::replace_weekly_schedule(&pool, &full_week()).await.unwrap();

    let partial: Vec<ScheduleDay> = full_week().into_iter().take(3).collect();
    assert!(weekly::replace_weekly_schedule(&pool, &partial).await.is_err());

    assert_eq!(weekly::get_weekly_schedule(&pool).await.unwrap().len(), 7);
}

#[tokio::test]
async fn test_exception_range_is_inclusive_and_ordered() {
    let pool = create_pool();
    let late = exception::create_exception(&pool, payload(date(2024, 1, 7), ExceptionKind::Working))
        .await
        .unwrap();
    let first = exception::create_exception(&pool, payload(date(2024, 1, 1), ExceptionKind::Break))
        .await
        .unwrap();
    let second = exception::create_exception(&pool, payload(date(2024, 1, 1), ExceptionKind::Modified))
        .await
        .unwrap();
    exception::create_exception(&pool, payload(date(2024, 1, 8), ExceptionKind::Break))
        .await
        .unwrap();

    let listed = exception::list_exceptions_in_range(&pool, date(2024, 1, 1), date(2024, 1, 7))
        .await
        .unwrap();

    let ids: Vec<Uuid> = listed.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![first.id, second.id, late.id]);
}

#[tokio::test]
async fn test_create_day_off_drops_times() {
    let pool = create_pool();

    let created = exception::create_exception(&pool, payload(date(2024, 1, 2), ExceptionKind::DayOff))
        .await
        .unwrap();

    assert_eq!(created.start_time, None);
    assert_eq!(created.end_time, None);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let pool = create_pool();
    let created = exception::create_exception(&pool, payload(date(2024, 1, 2), ExceptionKind::Break))
        .await
        .unwrap();

    let updated = exception::update_exception(
        &pool,
        created.id,
        ExceptionPayload::new(
            date(2024, 1, 3),
            ExceptionKind::DayOff,
            None,
            None,
            Some("Conference".to_string()),
        ),
    )
    .await
    .unwrap()
    .expect("exception should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date, date(2024, 1, 3));
    assert_eq!(updated.kind, ExceptionKind::DayOff);
    assert_eq!(updated.start_time, None);
    assert_eq!(updated.reason.as_deref(), Some("Conference"));
}

#[tokio::test]
async fn test_update_and_delete_unknown_id() {
    let pool = create_pool();
    let missing = Uuid::new_v4();

    let updated = exception::update_exception(&pool, missing, payload(date(2024, 1, 2), ExceptionKind::Break))
        .await
        .unwrap();
    assert!(updated.is_none());
    assert!(!exception::delete_exception(&pool, missing).await.unwrap());
}

#[tokio::test]
async fn test_delete_removes_exception() {
    let pool = create_pool();
    let created = exception::create_exception(&pool, payload(date(2024, 1, 2), ExceptionKind::Break))
        .await
        .unwrap();

    assert!(exception::delete_exception(&pool, created.id).await.unwrap());

    let listed = exception::list_exceptions_in_range(&pool, date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_appointments_filter_by_range_and_status() {
    let pool = create_pool();
    let monday = date(2024, 1, 1);
    let afternoon = appointment::insert_appointment(&pool, booking(monday, time(14, 0), AppointmentStatus::Confirmed))
        .await
        .unwrap();
    let morning = appointment::insert_appointment(&pool, booking(monday, time(9, 0), AppointmentStatus::Pending))
        .await
        .unwrap();
    appointment::insert_appointment(&pool, booking(date(2024, 1, 9), time(9, 0), AppointmentStatus::Confirmed))
        .await
        .unwrap();

    let all = appointment::list_appointments_in_range(&pool, monday, date(2024, 1, 7), None)
        .await
        .unwrap();
    let ids: Vec<Uuid> = all.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![morning.id, afternoon.id]);

    let confirmed = appointment::list_appointments_in_range(
        &pool,
        monday,
        date(2024, 1, 7),
        Some(AppointmentStatus::Confirmed),
    )
    .await
    .unwrap();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, afternoon.id);
}
