use std::path::PathBuf;

use air_quality::{
    label::Locale,
    model::{DEFAULT_PAGE_SIZE, Granularity, Metric},
};
use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Readings payload (`{readings, total_count}` or a bare array)
    #[arg(long)]
    pub file: PathBuf,

    /// Axis label granularity; defaults to each reading's own type
    #[arg(long)]
    pub granularity: Option<Granularity>,

    /// Show only this 1-based page of the reading table
    #[arg(long)]
    pub page: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u64,

    /// Also print a per-device comparison of this metric
    #[arg(long)]
    pub compare: Option<Metric>,

    /// Devices payload, used for series names in the comparison
    #[arg(long)]
    pub devices: Option<PathBuf>,

    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,

    #[arg(long, env = "AQ_LOCALE", default_value = "pt-BR")]
    pub locale: Locale,

    #[arg(short, long)]
    pub verbose: bool,
}
