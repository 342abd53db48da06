use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    classify::{Classification, classify},
    model::{Device, MetricKind, Reading},
};

/// Initial map center (Recife) and zoom level.
pub const DEFAULT_CENTER: (f64, f64) = (-8.0476, -34.877);
pub const DEFAULT_ZOOM: u8 = 12;

pub const MISSING_VALUE: &str = "N/A";

/// Keeps the last reading seen for each device, ordered by first appearance.
pub fn latest_by_device<'a>(
    readings: impl IntoIterator<Item = &'a Reading>,
) -> IndexMap<&'a str, &'a Reading> {
    let mut latest = IndexMap::new();
    for reading in readings {
        latest.insert(reading.device_id.as_str(), reading);
    }
    latest
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub device_id: String,

    pub name: String,

    pub latitude: f64,

    pub longitude: f64,

    pub value: Option<f64>,

    pub classification: Classification,
}

impl MapMarker {
    /// Text drawn inside the marker.
    pub fn value_text(&self) -> String {
        match self.value {
            Some(v) => v.to_string(),
            None => MISSING_VALUE.to_string(),
        }
    }
}

/// One marker per device that has a position, colored by `kind`.
pub fn markers(
    devices: &[Device],
    latest: &IndexMap<&str, &Reading>,
    kind: MetricKind,
) -> Vec<MapMarker> {
    devices
        .iter()
        .filter_map(|device| {
            let (latitude, longitude) = device.position()?;
            let value = latest
                .get(device.id.as_str())
                .and_then(|r| r.value(kind.metric()));

            Some(MapMarker {
                device_id: device.id.clone(),
                name: device.name.clone(),
                latitude,
                longitude,
                value,
                classification: classify(kind, value),
            })
        })
        .collect()
}
