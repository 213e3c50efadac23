use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotkeeper_core::{
    calendar::{DateRange, ViewMode},
    fetch::FetchGeneration,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
#[case(date(2024, 1, 10), ViewMode::Day, date(2024, 1, 10), date(2024, 1, 10))]
#[case(date(2024, 1, 10), ViewMode::Week, date(2024, 1, 8), date(2024, 1, 14))]
#[case(date(2024, 1, 8), ViewMode::Week, date(2024, 1, 8), date(2024, 1, 14))]
#[case(date(2024, 1, 14), ViewMode::Week, date(2024, 1, 8), date(2024, 1, 14))]
#[case(date(2024, 12, 31), ViewMode::Week, date(2024, 12, 30), date(2025, 1, 5))]
#[case(date(2024, 2, 15), ViewMode::Month, date(2024, 2, 1), date(2024, 2, 29))]
#[case(date(2023, 2, 1), ViewMode::Month, date(2023, 2, 1), date(2023, 2, 28))]
#[case(date(2024, 12, 31), ViewMode::Month, date(2024, 12, 1), date(2024, 12, 31))]
fn test_visible_range(
    #[case] selected: NaiveDate,
    #[case] mode: ViewMode,
    #[case] from: NaiveDate,
    #[case] to: NaiveDate,
) {
    let range = DateRange::visible(selected, mode);

    assert_eq!(range, DateRange::new(from, to).unwrap());
    assert!(range.contains(selected));
}

#[test]
fn test_range_bounds_are_inclusive() {
    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 3)).unwrap();

    assert!(range.contains(date(2024, 3, 1)));
    assert!(range.contains(date(2024, 3, 3)));
    assert!(!range.contains(date(2024, 2, 29)));
    assert!(!range.contains(date(2024, 3, 4)));
    assert_eq!(range.days().count(), 3);
}

#[test]
fn test_inverted_range_is_rejected() {
    assert!(DateRange::new(date(2024, 3, 2), date(2024, 3, 1)).is_err());
}

#[rstest]
#[case("day", ViewMode::Day)]
#[case("Week", ViewMode::Week)]
#[case("MONTH", ViewMode::Month)]
fn test_view_mode_parsing(#[case] raw: &str, #[case] expected: ViewMode) {
    assert_eq!(raw.parse::<ViewMode>().unwrap(), expected);
}

#[test]
fn test_range_serializes_as_query_pair() {
    let range = DateRange::visible(date(2024, 1, 10), ViewMode::Week);
    let value = serde_json::to_value(range).unwrap();

    assert_eq!(
        value,
        serde_json::json!({"date_from": "2024-01-08", "date_to": "2024-01-14"})
    );
}

#[test]
fn test_only_latest_fetch_token_is_current() {
    let mut generation = FetchGeneration::new();

    let first = generation.next_token();
    assert!(generation.is_current(first));

    let second = generation.next_token();
    assert!(second > first);
    assert!(generation.is_current(second));
    assert!(!generation.is_current(first));
}

#[rstest]
#[case(ViewMode::Day)]
#[case(ViewMode::Week)]
#[case(ViewMode::Month)]
fn test_visible_range_clamps_at_calendar_ends(#[case] mode: ViewMode) {
    let earliest = DateRange::visible(NaiveDate::MIN, mode);
    assert_eq!(earliest.date_from, NaiveDate::MIN);
    assert!(earliest.contains(NaiveDate::MIN));

    let latest = DateRange::visible(NaiveDate::MAX, mode);
    assert_eq!(latest.date_to, NaiveDate::MAX);
    assert!(latest.contains(NaiveDate::MAX));
}
