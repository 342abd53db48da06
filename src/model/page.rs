use serde::{Deserialize, Serialize};

use crate::model::{Granularity, Reading};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Query for the `readings` endpoint, serialized as its request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_type: Option<Granularity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ts: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ts: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,

    /// `0` means no limit.
    #[serde(default)]
    pub limit: u64,
}

impl ReadingFilter {
    /// Sets `skip`/`limit` for a 1-based page number. Page `0` is treated as
    /// the first page.
    pub fn page(mut self, page: u64, page_size: u64) -> Self {
        self.skip = Some(page.saturating_sub(1) * page_size);
        self.limit = page_size;
        self
    }
}

/// Number of pages needed to show `total` items.
pub fn page_count(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return if total == 0 { 0 } else { 1 };
    }
    total.div_ceil(page_size)
}

/// A slice of readings plus the number of readings matching the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReadingPageRepr")]
pub struct ReadingPage {
    pub readings: Vec<Reading>,

    pub total_count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReadingPageRepr {
    Paged {
        readings: Vec<Reading>,
        total_count: Option<u64>,
    },
    Bare(Vec<Reading>),
}

impl From<ReadingPageRepr> for ReadingPage {
    fn from(repr: ReadingPageRepr) -> Self {
        match repr {
            ReadingPageRepr::Paged {
                readings,
                total_count,
            } => {
                let total_count = total_count.unwrap_or(readings.len() as u64);
                Self {
                    readings,
                    total_count,
                }
            }
            ReadingPageRepr::Bare(readings) => Self {
                total_count: readings.len() as u64,
                readings,
            },
        }
    }
}
