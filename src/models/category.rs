use serde::Serialize;

/// Activity log categories. Each category owns one persisted collection in
/// the `records` table; there is no record sharing across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Visits,      // visited-location
    Emergencies, // emergency-pin
}

impl Category {
    /// Storage key used as the primary key of the `records` table.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Category::Visits => "visited-location",
            Category::Emergencies => "emergency-pin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Visits => "Visited locations",
            Category::Emergencies => "Emergency pins",
        }
    }

    /// Helper: convert input code from CLI (accepts a few aliases).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "visits" | "visit" | "visited-location" => Some(Category::Visits),
            "emergencies" | "emergency" | "emergency-pin" => Some(Category::Emergencies),
            _ => None,
        }
    }

    pub fn all() -> [Category; 2] {
        [Category::Visits, Category::Emergencies]
    }
}
