use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Placeholder label used whenever place resolution failed.
pub const UNKNOWN_CITY: &str = "Unknown";

/// A resolved place: short city label plus optional full description and
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_label: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Place {
    pub fn new(city: &str, lat: Option<f64>, lng: Option<f64>) -> Self {
        let city = if city.trim().is_empty() {
            UNKNOWN_CITY.to_string()
        } else {
            city.trim().to_string()
        };
        Self {
            city,
            full_label: None,
            lat,
            lng,
        }
    }
}

/// The address decomposition returned by a reverse-geocoding service.
/// Only the fields we pick the city label from are kept; everything else in
/// the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Parse a raw geocoder address payload (the `address` object of the
    /// reverse-geocoding response).
    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::InvalidAddress(e.to_string()))
    }

    /// Pick the short place label: first non-empty component in
    /// city > town > village > county > state > country order.
    pub fn resolve_city(&self) -> String {
        [
            &self.city,
            &self.town,
            &self.village,
            &self.county,
            &self.state,
            &self.country,
        ]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_CITY.to_string())
    }

    /// Full place description: all non-empty components joined.
    pub fn full_label(&self) -> Option<String> {
        let parts: Vec<&str> = [
            &self.city,
            &self.town,
            &self.village,
            &self.county,
            &self.state,
            &self.country,
        ]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Convenience: build a [`Place`] from this address and the clicked
    /// coordinates.
    pub fn to_place(&self, lat: Option<f64>, lng: Option<f64>) -> Place {
        Place {
            city: self.resolve_city(),
            full_label: self.full_label(),
            lat,
            lng,
        }
    }
}
