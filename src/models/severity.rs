use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Moderate
    }
}

impl Severity {
    pub fn sv_as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "low" | "l" => Some(Severity::Low),
            "moderate" | "medium" | "m" => Some(Severity::Moderate),
            "high" | "h" => Some(Severity::High),
            _ => None,
        }
    }
}
