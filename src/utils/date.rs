use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

/// Current instant in milliseconds since epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Month bucket key for a millisecond timestamp, in local time:
/// `(year, month)`. Returns `None` for out-of-range values.
pub fn month_key(ts_millis: i64) -> Option<(i32, u32)> {
    let dt = local_datetime(ts_millis)?;
    Some((dt.year(), dt.month()))
}

/// Chart label for a month bucket, e.g. "Jan 2024".
pub fn month_label(ts_millis: i64) -> Option<String> {
    let dt = local_datetime(ts_millis)?;
    Some(dt.format("%b %Y").to_string())
}

/// Human-readable timestamp for list output, local time.
pub fn fmt_timestamp(ts_millis: Option<i64>) -> String {
    match ts_millis.and_then(local_datetime) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

fn local_datetime(ts_millis: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(ts_millis).single()
}
