use std::fmt;

use crate::classify::{Band, ColorToken};

/// Upper edge of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `value < x`
    Below(f64),
    /// `value <= x`
    AtMost(f64),
    Unbounded,
}

impl Bound {
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Bound::Below(x) => value < x,
            Bound::AtMost(x) => value <= x,
            Bound::Unbounded => true,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match *self {
            Bound::Below(x) | Bound::AtMost(x) => Some(x),
            Bound::Unbounded => None,
        }
    }
}

/// One row of a threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub upper: Bound,
    pub band: Band,
    pub color: ColorToken,
}

/// Tables are ordered ascending and end with an `Unbounded` row, so the
/// first-match scan always finds a band for a finite value.
pub type ThresholdTable = &'static [Threshold];

const fn row(upper: Bound, band: Band, color: ColorToken) -> Threshold {
    Threshold { upper, band, color }
}

pub const CO2_PPM: ThresholdTable = &[
    row(Bound::AtMost(400.0), Band::Excellent, ColorToken::Green),
    row(Bound::AtMost(1000.0), Band::Good, ColorToken::Yellow),
    row(Bound::AtMost(2000.0), Band::Moderate, ColorToken::Orange),
    row(Bound::Unbounded, Band::Poor, ColorToken::Red),
];

pub const TEMPERATURE_CELSIUS: ThresholdTable = &[
    row(Bound::Below(18.0), Band::Cold, ColorToken::Blue),
    row(Bound::AtMost(24.0), Band::Comfort, ColorToken::Green),
    row(Bound::AtMost(29.0), Band::Warm, ColorToken::Orange),
    row(Bound::Unbounded, Band::Hot, ColorToken::Red),
];

pub const HUMIDITY_PERCENT: ThresholdTable = &[
    row(Bound::Below(30.0), Band::Dry, ColorToken::Yellow),
    row(Bound::AtMost(60.0), Band::Comfort, ColorToken::Green),
    row(Bound::AtMost(80.0), Band::Humid, ColorToken::Orange),
    row(Bound::Unbounded, Band::TooHumid, ColorToken::Blue),
];

/// Legend entry: a row plus the edge of the row before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub lower: Option<Bound>,
    pub threshold: Threshold,
}

impl fmt::Display for LegendEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.threshold.upper) {
            (_, Bound::Unbounded) => match self.lower {
                Some(Bound::Below(lo)) => write!(f, "≥ {lo}"),
                Some(Bound::AtMost(lo)) => write!(f, "> {lo}"),
                _ => f.write_str("any"),
            },
            (None, Bound::Below(x)) => write!(f, "< {x}"),
            (None, Bound::AtMost(x)) => write!(f, "≤ {x}"),
            (Some(lower), upper) => {
                let lo = lower.value().unwrap_or(f64::NEG_INFINITY);
                let hi = upper.value().unwrap_or(f64::INFINITY);
                write!(f, "{lo} – {hi}")
            }
        }
    }
}

pub fn legend_entries(table: ThresholdTable) -> Vec<LegendEntry> {
    let mut lower = None;
    table
        .iter()
        .map(|threshold| {
            let entry = LegendEntry {
                lower,
                threshold: *threshold,
            };
            lower = Some(threshold.upper);
            entry
        })
        .collect()
}
