use std::path::PathBuf;

use air_quality::model::MetricKind;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Devices payload
    #[arg(long)]
    pub devices: PathBuf,

    /// Latest readings payload
    #[arg(long)]
    pub readings: PathBuf,

    /// Metric used to color the markers: co2, tp or hm
    #[arg(long, default_value = "co2")]
    pub metric: MetricKind,

    #[arg(short, long)]
    pub verbose: bool,
}
