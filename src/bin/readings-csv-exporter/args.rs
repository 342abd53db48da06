use std::path::PathBuf;

use air_quality::{export::DEFAULT_FILE_NAME, model::Granularity};
use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Readings payload (`{readings, total_count}` or a bare array)
    #[arg(long)]
    pub file: PathBuf,

    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub output: PathBuf,

    /// Keep only these devices; repeat for several
    #[arg(long)]
    pub device_id: Vec<String>,

    #[arg(long)]
    pub reading_type: Option<Granularity>,

    #[arg(long)]
    pub start_ts: Option<String>,

    /// A bare date includes the whole day
    #[arg(long)]
    pub end_ts: Option<String>,

    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,

    #[arg(short, long)]
    pub verbose: bool,
}
