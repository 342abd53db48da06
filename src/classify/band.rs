use std::fmt;

use serde::Serialize;

/// Discrete severity of a value. The label set depends on the metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Excellent,
    Good,
    Moderate,
    Poor,
    Cold,
    Comfort,
    Warm,
    Hot,
    Dry,
    Humid,
    TooHumid,
    /// No usable value.
    Unavailable,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Excellent => "excellent",
            Band::Good => "good",
            Band::Moderate => "moderate",
            Band::Poor => "poor",
            Band::Cold => "cold",
            Band::Comfort => "comfort",
            Band::Warm => "warm",
            Band::Hot => "hot",
            Band::Dry => "dry",
            Band::Humid => "humid",
            Band::TooHumid => "too_humid",
            Band::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
