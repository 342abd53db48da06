mod args;

use std::process::ExitCode;

use air_quality::{
    classify::legend,
    logging,
    map::{DEFAULT_CENTER, DEFAULT_ZOOM, latest_by_device, markers},
    source::{read_devices, read_reading_page},
};
use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use tracing::info;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

fn run(args: Args) -> Result<()> {
    let devices = read_devices(&args.devices).context("failed to load devices")?;
    let page = read_reading_page(&args.readings).context("failed to load latest readings")?;

    let latest = latest_by_device(&page.readings);
    let markers = markers(&devices, &latest, args.metric);

    info!(
        devices = devices.len(),
        markers = markers.len(),
        "skipped {} devices without a position",
        devices.len() - markers.len()
    );

    println!(
        "center {}, {} zoom {}",
        DEFAULT_CENTER.0, DEFAULT_CENTER.1, DEFAULT_ZOOM
    );
    for entry in legend(args.metric) {
        println!(
            "  {:<8} {:<12} {}",
            entry.threshold.color, entry.threshold.band, entry
        );
    }

    println!();
    for marker in &markers {
        println!(
            "{}\t{}, {}\t{}: {}\t{} on {}",
            marker.name,
            marker.latitude,
            marker.longitude,
            args.metric.as_str().to_uppercase(),
            marker.value_text(),
            marker.classification.color.text_color(),
            marker.classification.color,
        );
    }

    Ok(())
}
