use super::place::{Place, UNKNOWN_CITY};
use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Category-specific payload of a [`LogRecord`]. Serialized with an internal
/// `kind` tag so a category payload stays a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordKind {
    Visit {
        #[serde(default)]
        lat: Option<f64>,
        #[serde(default)]
        lng: Option<f64>,
    },
    Emergency {
        #[serde(default)]
        event: String,
        #[serde(default)]
        severity: Severity,
        #[serde(default)]
        details: String,
        #[serde(default)]
        lat: Option<f64>,
        #[serde(default)]
        lng: Option<f64>,
        #[serde(default)]
        user: Option<String>,
    },
}

/// One persisted activity event.
///
/// `timestamp` is milliseconds since epoch, stamped by the store on append
/// and immutable afterwards. It is optional only on the decode side: legacy
/// or hand-edited payloads may lack it, and such entries are dropped by the
/// retention filter on the next load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_label: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(flatten)]
    pub kind: RecordKind,
}

impl LogRecord {
    /// Build a visited-location record. The timestamp is left unset; the
    /// store stamps it at append time.
    pub fn visit(place: &Place) -> Self {
        Self {
            city: place.city.clone(),
            full_label: place.full_label.clone(),
            timestamp: None,
            kind: RecordKind::Visit {
                lat: place.lat,
                lng: place.lng,
            },
        }
    }

    /// Build an emergency-pin record.
    pub fn emergency(
        place: &Place,
        event: &str,
        severity: Severity,
        details: &str,
        user: Option<String>,
    ) -> Self {
        Self {
            city: place.city.clone(),
            full_label: place.full_label.clone(),
            timestamp: None,
            kind: RecordKind::Emergency {
                event: event.to_string(),
                severity,
                details: details.to_string(),
                lat: place.lat,
                lng: place.lng,
                user,
            },
        }
    }

    /// Defensive normalization applied on append: by the time a record
    /// reaches the store the triggering action has already committed, so
    /// missing fields fall back to placeholders instead of being rejected.
    pub fn normalized(mut self) -> Self {
        if self.city.trim().is_empty() {
            self.city = UNKNOWN_CITY.to_string();
        }
        if let RecordKind::Emergency { event, .. } = &mut self.kind
            && event.trim().is_empty()
        {
            *event = UNKNOWN_CITY.to_string();
        }
        self
    }

    /// Identity match for emergency pins: same `(lat, lng, event)` means the
    /// same pin. Visits carry no identity key and never deduplicate.
    pub fn same_pin(&self, other: &LogRecord) -> bool {
        match (&self.kind, &other.kind) {
            (
                RecordKind::Emergency {
                    event: e1,
                    lat: la1,
                    lng: lo1,
                    ..
                },
                RecordKind::Emergency {
                    event: e2,
                    lat: la2,
                    lng: lo2,
                    ..
                },
            ) => e1 == e2 && la1 == la2 && lo1 == lo2,
            _ => false,
        }
    }

    /// A record survives a load while `now - timestamp < window`. A record
    /// with no timestamp never survives.
    pub fn is_fresh(&self, now_ms: i64, window_ms: i64) -> bool {
        self.timestamp.is_some_and(|t| now_ms - t < window_ms)
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            RecordKind::Visit { .. } => "visit",
            RecordKind::Emergency { .. } => "emergency",
        }
    }

    pub fn coords(&self) -> (Option<f64>, Option<f64>) {
        match self.kind {
            RecordKind::Visit { lat, lng } => (lat, lng),
            RecordKind::Emergency { lat, lng, .. } => (lat, lng),
        }
    }
}
