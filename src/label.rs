//! Axis, tooltip and table labels for reading timestamps.
//!
//! Locale and time zone are explicit inputs: the same `(ts, granularity,
//! format)` always renders the same label.

use std::{fmt, str::FromStr};

use anyhow::{Context as _, Error, Result, bail};
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use chrono_tz::Tz;

use crate::model::Granularity;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// Day before month, 24-hour clock.
    #[default]
    PtBr,
    /// Month before day, 12-hour clock.
    EnUs,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    fn day_month(&self) -> &'static str {
        match self {
            Locale::PtBr => "%d/%m",
            Locale::EnUs => "%m/%d",
        }
    }

    fn hour_minute(&self) -> &'static str {
        match self {
            Locale::PtBr => "%H:%M",
            Locale::EnUs => "%I:%M %p",
        }
    }

    fn tooltip(&self) -> &'static str {
        match self {
            Locale::PtBr => "%d/%m/%y, %H:%M:%S",
            Locale::EnUs => "%m/%d/%y, %I:%M:%S %p",
        }
    }

    fn datetime(&self) -> &'static str {
        match self {
            Locale::PtBr => "%d/%m/%Y, %H:%M:%S",
            Locale::EnUs => "%-m/%-d/%Y, %-I:%M:%S %p",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt-BR" | "pt_BR" | "pt" => Ok(Locale::PtBr),
            "en-US" | "en_US" | "en" => Ok(Locale::EnUs),
            _ => bail!("unsupported locale: {}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelFormat {
    pub locale: Locale,

    pub timezone: Tz,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            timezone: Tz::UTC,
        }
    }
}

/// Parses a reading timestamp into `timezone`.
///
/// Timestamps with an offset keep their instant. Naive timestamps and bare
/// dates are taken as wall-clock time in `timezone`.
pub fn parse_timestamp(ts: &str, timezone: Tz) -> Result<DateTime<Tz>> {
    let ts = ts.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Ok(dt.with_timezone(&timezone));
    }
    if let Ok(dt) = DateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(dt.with_timezone(&timezone));
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(ts, f).ok())
    {
        return match naive.and_local_timezone(timezone) {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(dt, _) => Ok(dt),
            LocalResult::None => bail!("invalid local timestamp in {timezone}: {ts}"),
        };
    }

    let date = NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .with_context(|| format!("failed to parse timestamp: {ts}"))?;
    start_of_day(date, timezone)
        .with_context(|| format!("no local time on {ts} in {timezone}"))
}

/// First instant of `date` in `timezone`. Midnight may fall in a DST gap,
/// in which case the day starts at the end of the gap.
fn start_of_day(date: NaiveDate, timezone: Tz) -> Option<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=MINUTES_PER_DAY)
        .map(|m| midnight + TimeDelta::minutes(m))
        .take_while(|naive| naive.date() == date)
        .find_map(|naive| naive.and_local_timezone(timezone).earliest())
}

/// Chart axis label: day/month for daily series, hour:minute otherwise.
pub fn label_for(ts: &str, granularity: Granularity, format: &LabelFormat) -> Result<String> {
    let dt = parse_timestamp(ts, format.timezone)?;
    Ok(axis_label(&dt, granularity, format.locale))
}

pub fn axis_label(dt: &DateTime<Tz>, granularity: Granularity, locale: Locale) -> String {
    let pattern = match granularity {
        Granularity::Daily => locale.day_month(),
        Granularity::Instant | Granularity::Hourly => locale.hour_minute(),
    };
    dt.format(pattern).to_string()
}

/// Tooltip label with date, two-digit year and seconds.
pub fn tooltip_label(ts: &str, format: &LabelFormat) -> Result<String> {
    let dt = parse_timestamp(ts, format.timezone)?;
    Ok(dt.format(format.locale.tooltip()).to_string())
}

/// Full date and time, as shown in reading tables.
pub fn datetime_label(ts: &str, format: &LabelFormat) -> Result<String> {
    let dt = parse_timestamp(ts, format.timezone)?;
    Ok(dt.format(format.locale.datetime()).to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const TS: &str = "2024-01-01T10:00:00Z";

    fn format(locale: Locale, timezone: Tz) -> LabelFormat {
        LabelFormat { locale, timezone }
    }

    #[rstest]
    #[case(Granularity::Daily, Locale::PtBr, "01/01")]
    #[case(Granularity::Hourly, Locale::PtBr, "10:00")]
    #[case(Granularity::Instant, Locale::PtBr, "10:00")]
    #[case(Granularity::Daily, Locale::EnUs, "01/01")]
    #[case(Granularity::Instant, Locale::EnUs, "10:00 AM")]
    fn axis_labels(#[case] granularity: Granularity, #[case] locale: Locale, #[case] expected: &str) {
        let label = label_for(TS, granularity, &format(locale, Tz::UTC)).unwrap();
        assert_eq!(label, expected);
    }

    #[test]
    fn daily_is_date_only_and_instant_is_time_only() {
        let f = LabelFormat::default();
        let ts = "2024-03-15T21:45:00Z";

        assert_eq!(label_for(ts, Granularity::Daily, &f).unwrap(), "15/03");
        assert_eq!(label_for(ts, Granularity::Instant, &f).unwrap(), "21:45");
        assert_eq!(
            label_for(ts, Granularity::Daily, &format(Locale::EnUs, Tz::UTC)).unwrap(),
            "03/15"
        );
    }

    #[test]
    fn labels_are_rendered_in_the_configured_timezone() {
        let f = format(Locale::PtBr, chrono_tz::America::Recife);

        assert_eq!(label_for(TS, Granularity::Instant, &f).unwrap(), "07:00");
        assert_eq!(
            label_for("2024-01-01T01:00:00Z", Granularity::Daily, &f).unwrap(),
            "31/12"
        );
    }

    #[test]
    fn naive_timestamps_are_wall_clock_time() {
        let f = format(Locale::PtBr, chrono_tz::America::Recife);

        assert_eq!(
            label_for("2024-01-01T10:00:00", Granularity::Instant, &f).unwrap(),
            "10:00"
        );
        assert_eq!(
            label_for("2024-01-01 10:30", Granularity::Hourly, &f).unwrap(),
            "10:30"
        );
        assert_eq!(
            label_for("2024-02-03", Granularity::Daily, &f).unwrap(),
            "03/02"
        );
    }

    #[test]
    fn bare_date_inside_midnight_dst_gap_starts_after_the_gap() {
        let tz = chrono_tz::America::Sao_Paulo;

        let start = parse_timestamp("2018-11-04", tz).unwrap();

        assert_eq!(start.to_rfc3339(), "2018-11-04T01:00:00-02:00");
        assert_eq!(
            label_for("2018-11-04", Granularity::Daily, &format(Locale::PtBr, tz)).unwrap(),
            "04/11"
        );
    }

    #[test]
    fn naive_time_inside_dst_gap_is_still_an_error() {
        let err = parse_timestamp("2018-11-04T00:30:00", chrono_tz::America::Sao_Paulo).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid local timestamp in America/Sao_Paulo: 2018-11-04T00:30:00"
        );
    }

    #[test]
    fn same_input_same_label() {
        let f = LabelFormat::default();
        let a = label_for(TS, Granularity::Hourly, &f).unwrap();
        let b = label_for(TS, Granularity::Hourly, &f).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tooltip_and_table_labels() {
        let pt = LabelFormat::default();
        let en = format(Locale::EnUs, Tz::UTC);
        let ts = "2024-01-02T15:04:05.250Z";

        assert_eq!(tooltip_label(ts, &pt).unwrap(), "02/01/24, 15:04:05");
        assert_eq!(tooltip_label(ts, &en).unwrap(), "01/02/24, 03:04:05 PM");
        assert_eq!(datetime_label(ts, &pt).unwrap(), "02/01/2024, 15:04:05");
        assert_eq!(datetime_label(ts, &en).unwrap(), "1/2/2024, 3:04:05 PM");
    }

    #[test]
    fn unparseable_timestamp_is_an_error() {
        let err = label_for("yesterday", Granularity::Daily, &LabelFormat::default()).unwrap_err();
        assert_eq!(err.to_string(), "failed to parse timestamp: yesterday");
    }

    #[test]
    fn parses_locale_names() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
