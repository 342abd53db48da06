//! Severity bands and colors for CO₂, temperature and humidity values.
//!
//! Each metric kind owns an ordered threshold table; a value takes the first
//! row whose upper bound contains it. Values that are missing or not finite
//! are always [`Band::Unavailable`] / [`ColorToken::Gray`].

mod band;
mod color;
mod table;

pub use band::*;
pub use color::*;
pub use table::*;

use serde::Serialize;

use crate::model::MetricKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub band: Band,
    pub color: ColorToken,
}

impl Classification {
    pub const UNAVAILABLE: Classification = Classification {
        band: Band::Unavailable,
        color: ColorToken::Gray,
    };
}

pub fn table_for(kind: MetricKind) -> ThresholdTable {
    match kind {
        MetricKind::Co2 => CO2_PPM,
        MetricKind::Tp => TEMPERATURE_CELSIUS,
        MetricKind::Hm => HUMIDITY_PERCENT,
    }
}

pub fn classify(kind: MetricKind, value: Option<f64>) -> Classification {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return Classification::UNAVAILABLE;
    };

    table_for(kind)
        .iter()
        .find(|t| t.upper.contains(value))
        .map(|t| Classification {
            band: t.band,
            color: t.color,
        })
        .unwrap_or(Classification::UNAVAILABLE)
}

/// Rows for a legend, in ascending order.
pub fn legend(kind: MetricKind) -> Vec<LegendEntry> {
    legend_entries(table_for(kind))
}
