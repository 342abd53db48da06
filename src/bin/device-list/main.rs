mod args;

use std::process::ExitCode;

use air_quality::{
    devices::{DeviceRow, device_rows},
    label::LabelFormat,
    logging,
    map::latest_by_device,
    source::{read_devices, read_reading_page},
};
use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;

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
    let format = LabelFormat {
        locale: args.locale,
        timezone: args.timezone,
    };

    let latest = latest_by_device(&page.readings);

    println!("{}", DeviceRow::header().join("\t"));
    for row in device_rows(&devices, &latest, &format) {
        println!("{}", row.cells().join("\t"));
    }

    Ok(())
}
