use crate::models::category::Category;
use crate::models::record::{LogRecord, RecordKind};
use chrono::{TimeZone, Utc};
use serde::Serialize;

/// Flat export row: one record with its category-specific fields spread out,
/// so CSV and JSON share the same shape.
#[derive(Debug, Serialize)]
pub struct RecordExport {
    pub category: &'static str,
    pub kind: &'static str,
    pub city: String,
    pub full_label: String,
    pub timestamp: String,
    pub event: String,
    pub severity: String,
    pub details: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub user: String,
}

impl RecordExport {
    pub fn from_record(category: Category, record: &LogRecord) -> Self {
        let timestamp = record
            .timestamp
            .and_then(|t| Utc.timestamp_millis_opt(t).single())
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();

        let (event, severity, details, user) = match &record.kind {
            RecordKind::Visit { .. } => (String::new(), String::new(), String::new(), String::new()),
            RecordKind::Emergency {
                event,
                severity,
                details,
                user,
                ..
            } => (
                event.clone(),
                severity.sv_as_str().to_string(),
                details.clone(),
                user.clone().unwrap_or_default(),
            ),
        };

        let (lat, lng) = record.coords();

        Self {
            category: category.storage_key(),
            kind: record.kind_label(),
            city: record.city.clone(),
            full_label: record.full_label.clone().unwrap_or_default(),
            timestamp,
            event,
            severity,
            details,
            lat,
            lng,
            user,
        }
    }
}
