//! Pure aggregation over a loaded log snapshot: grouped counts ready for
//! display. No I/O, no input mutation.

use crate::models::place::UNKNOWN_CITY;
use crate::models::record::LogRecord;
use crate::utils::date::{month_key, month_label};
use serde::Serialize;

/// Sentinel entry returned on an empty snapshot, so callers never
/// special-case "empty".
pub const NO_DATA_LABEL: &str = "No data yet";

/// How many cities an activity chart shows at most.
const TOP_CITIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub label: String,
    pub count: u64,
}

/// Occurrences per city label, exact match, descending by count. Ties keep
/// first-encountered order; output is capped at the top 10. A record with an
/// empty city counts under the placeholder label, since every pin counts
/// toward overall activity even when place resolution failed.
pub fn count_by_city(records: &[LogRecord]) -> Vec<CityCount> {
    let mut counts: Vec<CityCount> = Vec::new();

    for record in records {
        let city = match record.city.trim() {
            "" => UNKNOWN_CITY,
            c => c,
        };
        match counts.iter_mut().find(|c| c.city == city) {
            Some(entry) => entry.count += 1,
            None => counts.push(CityCount {
                city: city.to_string(),
                count: 1,
            }),
        }
    }

    if counts.is_empty() {
        return vec![CityCount {
            city: NO_DATA_LABEL.to_string(),
            count: 0,
        }];
    }

    // Stable sort keeps first-encountered order on equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_CITIES);
    counts
}

/// Occurrences per calendar month of `timestamp`, ascending by date. Only
/// months present in the data appear; gaps are not zero-filled. Records
/// without a timestamp are skipped here (they still count by city).
pub fn count_by_month(records: &[LogRecord]) -> Vec<MonthCount> {
    let mut buckets: Vec<((i32, u32), MonthCount)> = Vec::new();

    for record in records {
        let Some(ts) = record.timestamp else { continue };
        let (Some(key), Some(label)) = (month_key(ts), month_label(ts)) else {
            continue;
        };

        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, entry)) => entry.count += 1,
            None => buckets.push((key, MonthCount { label, count: 1 })),
        }
    }

    if buckets.is_empty() {
        return vec![MonthCount {
            label: NO_DATA_LABEL.to_string(),
            count: 0,
        }];
    }

    // Sort on the underlying (year, month), never on the label string.
    buckets.sort_by_key(|(key, _)| *key);
    buckets.into_iter().map(|(_, entry)| entry).collect()
}
