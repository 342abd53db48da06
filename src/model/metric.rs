use std::{fmt, str::FromStr};

use anyhow::{Error, bail};
use serde::{Deserialize, Serialize};

/// Every measured field a reading can carry, keyed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Co2,
    Hm,
    Pm1,
    Pm10Aqicn,
    Pm10Aqius,
    Pm10Conc,
    Pm25Aqicn,
    Pm25Aqius,
    Pm25Conc,
    Pr,
    Tp,
}

impl Metric {
    /// Wire order, which is also the CSV export column order.
    pub const ALL: [Metric; 11] = [
        Metric::Co2,
        Metric::Hm,
        Metric::Pm1,
        Metric::Pm10Aqicn,
        Metric::Pm10Aqius,
        Metric::Pm10Conc,
        Metric::Pm25Aqicn,
        Metric::Pm25Aqius,
        Metric::Pm25Conc,
        Metric::Pr,
        Metric::Tp,
    ];

    /// Metrics charted on the device detail view.
    pub const CHARTED: [Metric; 6] = [
        Metric::Pm1,
        Metric::Pm10Conc,
        Metric::Pm25Conc,
        Metric::Co2,
        Metric::Tp,
        Metric::Hm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Co2 => "co2",
            Metric::Hm => "hm",
            Metric::Pm1 => "pm1",
            Metric::Pm10Aqicn => "pm10_aqicn",
            Metric::Pm10Aqius => "pm10_aqius",
            Metric::Pm10Conc => "pm10_conc",
            Metric::Pm25Aqicn => "pm25_aqicn",
            Metric::Pm25Aqius => "pm25_aqius",
            Metric::Pm25Conc => "pm25_conc",
            Metric::Pr => "pr",
            Metric::Tp => "tp",
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Metric::Co2 => Some("ppm"),
            Metric::Hm => Some("%"),
            Metric::Pm1 | Metric::Pm10Conc | Metric::Pm25Conc => Some("µg/m³"),
            Metric::Pr => Some("mb"),
            Metric::Tp => Some("°C"),
            Metric::Pm10Aqicn | Metric::Pm10Aqius | Metric::Pm25Aqicn | Metric::Pm25Aqius => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Co2 => "CO₂",
            Metric::Hm => "Humidity",
            Metric::Pm1 => "PM1",
            Metric::Pm10Aqicn => "PM10 AQICN",
            Metric::Pm10Aqius => "PM10 AQIUS",
            Metric::Pm10Conc => "PM10",
            Metric::Pm25Aqicn => "PM25 AQICN",
            Metric::Pm25Aqius => "PM25 AQIUS",
            Metric::Pm25Conc => "PM25",
            Metric::Pr => "Pressure",
            Metric::Tp => "Temperature",
        }
    }

    /// Display name with its unit, e.g. `CO₂ (ppm)`.
    pub fn label(&self) -> String {
        match self.unit() {
            Some(unit) => format!("{} ({})", self.name(), unit),
            None => self.name().to_string(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Metric::ALL.into_iter().find(|m| m.as_str() == s) {
            Some(m) => Ok(m),
            None => bail!("unknown metric: {}", s),
        }
    }
}

/// The metrics that have a severity threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Co2,
    Tp,
    Hm,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Co2, MetricKind::Tp, MetricKind::Hm];

    pub fn as_str(&self) -> &'static str {
        self.metric().as_str()
    }

    pub fn metric(&self) -> Metric {
        match self {
            MetricKind::Co2 => Metric::Co2,
            MetricKind::Tp => Metric::Tp,
            MetricKind::Hm => Metric::Hm,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MetricKind> for Metric {
    fn from(kind: MetricKind) -> Self {
        kind.metric()
    }
}

impl TryFrom<Metric> for MetricKind {
    type Error = Error;

    fn try_from(metric: Metric) -> Result<Self, Self::Error> {
        match metric {
            Metric::Co2 => Ok(MetricKind::Co2),
            Metric::Tp => Ok(MetricKind::Tp),
            Metric::Hm => Ok(MetricKind::Hm),
            _ => bail!("metric has no severity thresholds: {}", metric),
        }
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "co2" => Ok(MetricKind::Co2),
            "tp" => Ok(MetricKind::Tp),
            "hm" => Ok(MetricKind::Hm),
            _ => bail!("unknown metric kind: {}", s),
        }
    }
}
