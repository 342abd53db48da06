//! Devices and readings as returned by the air-quality API, loaded from
//! saved JSON payloads.

use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use chrono::{DateTime, Days, NaiveDate};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::{
    label::parse_timestamp,
    model::{Device, ReadingFilter, ReadingPage},
};

pub fn read_devices(path: &Path) -> Result<Vec<Device>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read file: {path:?}"))?;
    let devices: Vec<Device> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse devices: {path:?}"))?;

    debug!(count = devices.len(), path = %path.display(), "loaded devices");

    Ok(devices)
}

/// Accepts both the paged `{readings, total_count}` shape and a bare array.
pub fn read_reading_page(path: &Path) -> Result<ReadingPage> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read file: {path:?}"))?;
    let page: ReadingPage = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse readings: {path:?}"))?;

    debug!(
        count = page.readings.len(),
        total_count = page.total_count,
        path = %path.display(),
        "loaded readings"
    );

    Ok(page)
}

/// Applies `filter` to an already loaded page, the way the `readings`
/// endpoint does: `total_count` is the number of matches before
/// `skip`/`limit` are applied.
///
/// A bare-date `end_ts` includes that whole day. Readings whose timestamp
/// cannot be parsed are dropped when a time range is set.
pub fn apply_filter(page: ReadingPage, filter: &ReadingFilter, timezone: Tz) -> Result<ReadingPage> {
    let start = filter
        .start_ts
        .as_deref()
        .map(|ts| parse_timestamp(ts, timezone))
        .transpose()
        .context("failed to parse start_ts")?;
    let end = filter
        .end_ts
        .as_deref()
        .map(|ts| end_bound(ts, timezone))
        .transpose()
        .context("failed to parse end_ts")?;

    let matched: Vec<_> = page
        .readings
        .into_iter()
        .filter(|r| filter.reading_type.is_none_or(|t| t == r.reading_type))
        .filter(|r| filter.device_ids.is_empty() || filter.device_ids.contains(&r.device_id))
        .filter(|r| {
            if start.is_none() && end.is_none() {
                return true;
            }
            let ts = match parse_timestamp(&r.ts, timezone) {
                Ok(ts) => ts,
                Err(e) => {
                    warn!(device_id = %r.device_id, "dropping reading: {e:#}");
                    return false;
                }
            };
            start.as_ref().is_none_or(|s| &ts >= s) && end.as_ref().is_none_or(|e| e.contains(&ts))
        })
        .collect();

    let total_count = matched.len() as u64;
    let skip = filter.skip.unwrap_or(0) as usize;
    let readings = match filter.limit {
        0 => matched.into_iter().skip(skip).collect(),
        limit => matched.into_iter().skip(skip).take(limit as usize).collect(),
    };

    Ok(ReadingPage {
        readings,
        total_count,
    })
}

#[derive(Debug, Clone, Copy)]
enum EndBound {
    Inclusive(DateTime<Tz>),
    Before(DateTime<Tz>),
}

impl EndBound {
    fn contains(&self, ts: &DateTime<Tz>) -> bool {
        match self {
            EndBound::Inclusive(end) => ts <= end,
            EndBound::Before(end) => ts < end,
        }
    }
}

fn end_bound(ts: &str, timezone: Tz) -> Result<EndBound> {
    match NaiveDate::parse_from_str(ts.trim(), "%Y-%m-%d") {
        Ok(date) => {
            let next = date
                .checked_add_days(Days::new(1))
                .with_context(|| format!("end date out of range: {ts}"))?;
            let next = parse_timestamp(&next.format("%Y-%m-%d").to_string(), timezone)?;
            Ok(EndBound::Before(next))
        }
        Err(_) => Ok(EndBound::Inclusive(parse_timestamp(ts, timezone)?)),
    }
}
