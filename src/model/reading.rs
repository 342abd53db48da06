use serde::{Deserialize, Serialize};

use crate::model::{Granularity, Metric};

/// One timestamped sample for one device. Metric fields are absent when the
/// device lacks the sensor or the backend omitted the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub device_id: String,

    pub ts: String,

    #[serde(rename = "type", alias = "reading_type")]
    pub reading_type: Granularity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm1: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10_aqicn: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10_aqius: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10_conc: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm25_aqicn: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm25_aqius: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm25_conc: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tp: Option<f64>,
}

impl Reading {
    /// A reading with no metric fields set.
    pub fn new(
        device_id: impl Into<String>,
        ts: impl Into<String>,
        reading_type: Granularity,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            ts: ts.into(),
            reading_type,
            co2: None,
            hm: None,
            pm1: None,
            pm10_aqicn: None,
            pm10_aqius: None,
            pm10_conc: None,
            pm25_aqicn: None,
            pm25_aqius: None,
            pm25_conc: None,
            pr: None,
            tp: None,
        }
    }

    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        *self.field_mut(metric) = Some(value);
        self
    }

    /// The raw field as received, which may hold a non-finite value.
    pub fn raw(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Co2 => self.co2,
            Metric::Hm => self.hm,
            Metric::Pm1 => self.pm1,
            Metric::Pm10Aqicn => self.pm10_aqicn,
            Metric::Pm10Aqius => self.pm10_aqius,
            Metric::Pm10Conc => self.pm10_conc,
            Metric::Pm25Aqicn => self.pm25_aqicn,
            Metric::Pm25Aqius => self.pm25_aqius,
            Metric::Pm25Conc => self.pm25_conc,
            Metric::Pr => self.pr,
            Metric::Tp => self.tp,
        }
    }

    /// The field value if it is usable data. Missing and non-finite values
    /// both read as `None`.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.raw(metric).filter(|v| v.is_finite())
    }

    fn field_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::Co2 => &mut self.co2,
            Metric::Hm => &mut self.hm,
            Metric::Pm1 => &mut self.pm1,
            Metric::Pm10Aqicn => &mut self.pm10_aqicn,
            Metric::Pm10Aqius => &mut self.pm10_aqius,
            Metric::Pm10Conc => &mut self.pm10_conc,
            Metric::Pm25Aqicn => &mut self.pm25_aqicn,
            Metric::Pm25Aqius => &mut self.pm25_aqius,
            Metric::Pm25Conc => &mut self.pm25_conc,
            Metric::Pr => &mut self.pr,
            Metric::Tp => &mut self.tp,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "device_id": "dev-1",
            "ts": "2024-01-01T10:00:00Z",
            "type": "hourly",
            "co2": 450,
            "tp": 27.5,
            "pm25_conc": null
        }"#;

        let reading: Reading = serde_json::from_str(json).unwrap();

        assert_eq!(
            reading,
            Reading::new("dev-1", "2024-01-01T10:00:00Z", Granularity::Hourly)
                .with(Metric::Co2, 450.0)
                .with(Metric::Tp, 27.5)
        );
    }

    #[test]
    fn accepts_reading_type_alias() {
        let json = r#"{"device_id":"d","ts":"2024-01-01","reading_type":"daily"}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.reading_type, Granularity::Daily);
    }

    #[test]
    fn missing_and_non_finite_values_are_no_data() {
        let reading = Reading::new("d", "2024-01-01T00:00:00Z", Granularity::Instant)
            .with(Metric::Hm, f64::NAN)
            .with(Metric::Pr, f64::INFINITY)
            .with(Metric::Tp, 0.0);

        assert_eq!(reading.value(Metric::Co2), None);
        assert_eq!(reading.value(Metric::Hm), None);
        assert_eq!(reading.value(Metric::Pr), None);
        assert_eq!(reading.value(Metric::Tp), Some(0.0));
        assert!(reading.raw(Metric::Hm).is_some_and(f64::is_nan));
    }

    #[test]
    fn serializes_without_absent_fields() {
        let reading =
            Reading::new("d", "2024-01-01T00:00:00Z", Granularity::Instant).with(Metric::Co2, 400.0);

        let json = serde_json::to_string(&reading).unwrap();

        assert_eq!(
            json,
            r#"{"device_id":"d","ts":"2024-01-01T00:00:00Z","type":"instant","co2":400.0}"#
        );
    }
}
