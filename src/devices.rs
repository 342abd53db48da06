//! Device listing: one row per device with its latest value for every metric.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::{
    label::{LabelFormat, datetime_label},
    map::MISSING_VALUE,
    model::{Device, Metric, Reading},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRow {
    pub device_id: String,

    pub name: String,

    /// Latest value per metric, in `Metric::ALL` order.
    pub values: Vec<(Metric, Option<f64>)>,

    /// Formatted time of the latest reading, if there is one.
    pub measured_at: Option<String>,
}

impl DeviceRow {
    pub fn header() -> Vec<String> {
        let mut header = vec!["Device".to_string()];
        header.extend(Metric::ALL.iter().map(|m| m.label()));
        header.push("Date and time".to_string());
        header
    }

    /// Display cells matching [`DeviceRow::header`]; missing data reads `N/A`.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.name.clone()];
        cells.extend(self.values.iter().map(|(_, v)| match v {
            Some(v) => v.to_string(),
            None => MISSING_VALUE.to_string(),
        }));
        cells.push(
            self.measured_at
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        );
        cells
    }
}

/// Rows for every device, in device order, whether or not it has a reading.
///
/// A latest reading with an unparseable timestamp keeps the raw string.
pub fn device_rows(
    devices: &[Device],
    latest: &IndexMap<&str, &Reading>,
    format: &LabelFormat,
) -> Vec<DeviceRow> {
    devices
        .iter()
        .map(|device| {
            let reading = latest.get(device.id.as_str()).copied();

            let values = Metric::ALL
                .iter()
                .map(|&m| (m, reading.and_then(|r| r.value(m))))
                .collect();

            let measured_at = reading.map(|r| match datetime_label(&r.ts, format) {
                Ok(label) => label,
                Err(e) => {
                    warn!(device_id = %device.id, "{e:#}");
                    r.ts.clone()
                }
            });

            DeviceRow {
                device_id: device.id.clone(),
                name: device.name.clone(),
                values,
                measured_at,
            }
        })
        .collect()
}
