use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::{
    label::parse_timestamp,
    model::{Device, Metric, Reading},
    summary::round2,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,

    pub value: f64,
}

/// One line of the multi-device comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub device_id: String,

    pub device_name: String,

    pub points: Vec<Point>,
}

/// Builds one series per selected device, in selection order.
///
/// Readings without a value for `metric` are left out of the line.
pub fn build_series(
    devices: &[Device],
    readings: &[Reading],
    selected_ids: &[String],
    metric: Metric,
) -> Vec<Series> {
    let mut by_device: IndexMap<&str, Vec<&Reading>> = IndexMap::new();
    for reading in readings {
        by_device
            .entry(reading.device_id.as_str())
            .or_default()
            .push(reading);
    }

    selected_ids
        .iter()
        .map(|id| {
            let device_name = devices
                .iter()
                .find(|d| &d.id == id)
                .map(|d| d.name.clone())
                .unwrap_or_else(|| format!("Device {id}"));

            let points = by_device
                .get(id.as_str())
                .map(|readings| points(readings, metric))
                .unwrap_or_default();

            Series {
                device_id: id.clone(),
                device_name,
                points,
            }
        })
        .collect()
}

fn points(readings: &[&Reading], metric: Metric) -> Vec<Point> {
    readings
        .iter()
        .filter_map(|reading| {
            let value = reading.value(metric)?;
            // Offset-less timestamps are read as UTC here; only the instant matters.
            let timestamp = match parse_timestamp(&reading.ts, chrono_tz::UTC) {
                Ok(dt) => dt.timestamp_millis(),
                Err(e) => {
                    warn!(device_id = %reading.device_id, "skipping reading: {e:#}");
                    return None;
                }
            };

            Some(Point {
                timestamp,
                value: round2(value),
            })
        })
        .collect()
}

/// Y-axis bounds covering every point, padded by 10% of the span.
pub fn y_axis_range(series: &[Series]) -> Option<(f64, f64)> {
    let mut values = series.iter().flat_map(|s| s.points.iter().map(|p| p.value));
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let padding = (max - min) * 0.1;
    Some((min - padding, max + padding))
}
