use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,

    pub name: String,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,
}

impl Device {
    /// Returns `(latitude, longitude)` when the device can be placed on a map.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(latitude: Option<f64>, longitude: Option<f64>) -> Device {
        Device {
            id: "dev-1".to_string(),
            name: "Boa Viagem".to_string(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn position_requires_both_coordinates() {
        assert_eq!(
            device(Some(-8.05), Some(-34.88)).position(),
            Some((-8.05, -34.88))
        );
        assert_eq!(device(None, Some(-34.88)).position(), None);
        assert_eq!(device(Some(-8.05), None).position(), None);
        assert_eq!(device(None, None).position(), None);
    }

    #[test]
    fn position_accepts_zero_coordinates() {
        assert_eq!(device(Some(0.0), Some(0.0)).position(), Some((0.0, 0.0)));
    }

    #[test]
    fn deserializes_null_coordinates() {
        let d: Device =
            serde_json::from_str(r#"{"id":"a","name":"A","latitude":null,"longitude":null}"#)
                .unwrap();
        assert_eq!(d.position(), None);
    }
}
