use std::path::PathBuf;

use air_quality::label::Locale;
use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Devices payload
    #[arg(long)]
    pub devices: PathBuf,

    /// Latest readings payload
    #[arg(long)]
    pub readings: PathBuf,

    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,

    #[arg(long, env = "AQ_LOCALE", default_value = "pt-BR")]
    pub locale: Locale,

    #[arg(short, long)]
    pub verbose: bool,
}
