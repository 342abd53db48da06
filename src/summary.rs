use std::fmt;

use serde::Serialize;

use crate::model::{Metric, Reading};

/// Min/max/mean caption for a chart, or an explicit "no data".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Summary {
    Values {
        min: f64,
        max: f64,
        /// Arithmetic mean rounded to two decimals.
        mean: f64,
    },
    Empty,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Values { min, max, mean } => {
                write!(f, "min {min}, max {max}, mean {mean:.2}")
            }
            Summary::Empty => f.write_str("no data"),
        }
    }
}

/// Summarizes the finite values of `metric`; readings without one are skipped.
pub fn summarize(readings: &[Reading], metric: Metric) -> Summary {
    summarize_values(readings.iter().filter_map(|r| r.value(metric)))
}

pub fn summarize_values(values: impl IntoIterator<Item = f64>) -> Summary {
    let mut count = 0usize;
    let mut mean = 0f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for v in values.into_iter().filter(|v| v.is_finite()) {
        count += 1;
        // Incremental form stays finite where a running sum would overflow.
        let n = count as f64;
        mean += v / n - mean / n;
        min = min.min(v);
        max = max.max(v);
    }

    if count == 0 {
        return Summary::Empty;
    }

    Summary::Values {
        min,
        max,
        mean: round2(mean),
    }
}

/// Rounds to two decimals, ties away from zero. Values too large to carry
/// hundredths are returned unchanged.
pub fn round2(v: f64) -> f64 {
    let scaled = v * 100.0;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / 100.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Granularity;

    fn reading(metric: Metric, value: Option<f64>) -> Reading {
        let r = Reading::new("dev-1", "2024-01-01T10:00:00Z", Granularity::Instant);
        match value {
            Some(v) => r.with(metric, v),
            None => r,
        }
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(summarize(&[], Metric::Co2), Summary::Empty);
    }

    #[test]
    fn all_missing_is_empty() {
        let readings = [reading(Metric::Co2, None), reading(Metric::Co2, Some(f64::NAN))];
        assert_eq!(summarize(&readings, Metric::Co2), Summary::Empty);
    }

    #[test]
    fn min_max_mean() {
        let readings = [
            reading(Metric::Co2, Some(100.0)),
            reading(Metric::Co2, Some(300.0)),
            reading(Metric::Co2, Some(200.0)),
        ];

        assert_eq!(
            summarize(&readings, Metric::Co2),
            Summary::Values {
                min: 100.0,
                max: 300.0,
                mean: 200.0,
            }
        );
    }

    #[test]
    fn missing_entries_do_not_count_as_zero() {
        let readings = [reading(Metric::Tp, None), reading(Metric::Tp, Some(20.0))];

        assert_eq!(
            summarize(&readings, Metric::Tp),
            Summary::Values {
                min: 20.0,
                max: 20.0,
                mean: 20.0,
            }
        );
    }

    #[test]
    fn mean_is_rounded_to_two_decimals() {
        let summary = summarize_values([1.0, 2.0, 2.0]);
        assert_eq!(
            summary,
            Summary::Values {
                min: 1.0,
                max: 2.0,
                mean: 1.67,
            }
        );
        assert_eq!(summary.to_string(), "min 1, max 2, mean 1.67");
    }

    #[test]
    fn summarize_leaves_input_untouched() {
        let readings = vec![
            reading(Metric::Hm, Some(70.0)),
            reading(Metric::Hm, None),
            reading(Metric::Hm, Some(40.0)),
        ];
        let before = readings.clone();

        let first = summarize(&readings, Metric::Hm);
        let second = summarize(&readings, Metric::Hm);

        assert_eq!(first, second);
        assert_eq!(readings, before);
    }

    #[test]
    fn mean_of_huge_values_stays_finite() {
        assert_eq!(
            summarize_values([f64::MAX, f64::MAX]),
            Summary::Values {
                min: f64::MAX,
                max: f64::MAX,
                mean: f64::MAX,
            }
        );
        assert_eq!(
            summarize_values([f64::MAX, -f64::MAX]),
            Summary::Values {
                min: -f64::MAX,
                max: f64::MAX,
                mean: 0.0,
            }
        );
    }

    #[test]
    fn rounding_ties_go_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1475.0), 1475.0);
    }
}
