//! Tests for the pure aggregation functions.

use chrono::{TimeZone, Utc};
use stormlog::core::aggregate::{NO_DATA_LABEL, count_by_city, count_by_month};
use stormlog::models::place::Place;
use stormlog::models::record::LogRecord;

fn visit_at(city: &str, ts: Option<i64>) -> LogRecord {
    let mut record = LogRecord::visit(&Place::new(city, None, None));
    record.timestamp = ts;
    record
}

/// Noon UTC in the middle of the month, so the local-time month bucket is
/// stable in any timezone.
fn mid_month(year: i32, month: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0)
        .unwrap()
        .timestamp_millis()
}

#[test]
fn count_by_city_groups_and_sorts_descending() {
    let ts = mid_month(2024, 3);
    let records = vec![
        visit_at("Manila", Some(ts)),
        visit_at("Cebu", Some(ts)),
        visit_at("Manila", Some(ts)),
        visit_at("Manila", Some(ts)),
    ];

    let counts = count_by_city(&records);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].city, "Manila");
    assert_eq!(counts[0].count, 3);
    assert_eq!(counts[1].city, "Cebu");
    assert_eq!(counts[1].count, 1);
}

#[test]
fn count_by_city_breaks_ties_in_first_encountered_order() {
    let ts = mid_month(2024, 3);
    let records = vec![
        visit_at("Davao", Some(ts)),
        visit_at("Iloilo", Some(ts)),
        visit_at("Baguio", Some(ts)),
        visit_at("Baguio", Some(ts)),
    ];

    let counts = count_by_city(&records);
    let cities: Vec<&str> = counts.iter().map(|c| c.city.as_str()).collect();
    assert_eq!(cities, ["Baguio", "Davao", "Iloilo"]);
}

#[test]
fn count_by_city_caps_output_at_ten_entries() {
    let ts = mid_month(2024, 3);
    let mut records = Vec::new();
    for i in 0..12 {
        // city-0 appears 12 times, city-1 11 times, ... city-11 once
        for _ in i..12 {
            records.push(visit_at(&format!("city-{}", i), Some(ts)));
        }
    }

    let counts = count_by_city(&records);
    assert_eq!(counts.len(), 10);
    assert_eq!(counts[0].city, "city-0");
    assert_eq!(counts[0].count, 12);
    assert!(counts.iter().all(|c| c.city != "city-10" && c.city != "city-11"));
}

#[test]
fn count_by_city_is_case_sensitive_and_keeps_unknown() {
    let ts = mid_month(2024, 3);
    let records = vec![
        visit_at("manila", Some(ts)),
        visit_at("Manila", Some(ts)),
        visit_at("", Some(ts)),
    ];

    let counts = count_by_city(&records);
    assert_eq!(counts.len(), 3);
    assert!(counts.iter().any(|c| c.city == "Unknown" && c.count == 1));
}

#[test]
fn count_by_city_on_empty_input_returns_sentinel() {
    let counts = count_by_city(&[]);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].city, NO_DATA_LABEL);
    assert_eq!(counts[0].count, 0);
}

#[test]
fn count_by_month_sorts_by_date_not_label() {
    // Alphabetically "Apr 2024" < "Dec 2023"; by date it is the other way.
    let records = vec![
        visit_at("Manila", Some(mid_month(2024, 4))),
        visit_at("Manila", Some(mid_month(2023, 12))),
        visit_at("Manila", Some(mid_month(2024, 4))),
        visit_at("Manila", Some(mid_month(2024, 1))),
    ];

    let counts = count_by_month(&records);
    let labels: Vec<&str> = counts.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, ["Dec 2023", "Jan 2024", "Apr 2024"]);
    assert_eq!(counts[2].count, 2);
}

#[test]
fn count_by_month_skips_missing_timestamps() {
    let records = vec![
        visit_at("Manila", Some(mid_month(2024, 1))),
        visit_at("Manila", None),
    ];

    let months = count_by_month(&records);
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].count, 1);

    // The same snapshot still counts both records by city.
    let cities = count_by_city(&records);
    assert_eq!(cities[0].count, 2);
}

#[test]
fn count_by_month_does_not_zero_fill_gaps() {
    let records = vec![
        visit_at("Manila", Some(mid_month(2024, 1))),
        visit_at("Manila", Some(mid_month(2024, 5))),
    ];

    let counts = count_by_month(&records);
    let labels: Vec<&str> = counts.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, ["Jan 2024", "May 2024"]);
}

#[test]
fn count_by_month_on_empty_input_returns_sentinel() {
    let counts = count_by_month(&[]);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].label, NO_DATA_LABEL);
    assert_eq!(counts[0].count, 0);
}

#[test]
fn aggregation_does_not_mutate_input() {
    let ts = mid_month(2024, 3);
    let records = vec![visit_at("Manila", Some(ts)), visit_at("Cebu", None)];
    let before = records.clone();

    let _ = count_by_city(&records);
    let _ = count_by_month(&records);
    assert_eq!(records, before);
}
