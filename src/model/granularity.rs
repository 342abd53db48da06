use std::{fmt, str::FromStr};

use anyhow::{Error, bail};
use serde::{Deserialize, Serialize};

/// Time-bucketing level the backend applied to a reading series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Raw, minute-by-minute samples.
    Instant,
    Hourly,
    Daily,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Instant, Granularity::Hourly, Granularity::Daily];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Instant => "instant",
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instant" => Ok(Granularity::Instant),
            "hourly" => Ok(Granularity::Hourly),
            "daily" => Ok(Granularity::Daily),
            _ => bail!("unknown granularity: {}", s),
        }
    }
}
