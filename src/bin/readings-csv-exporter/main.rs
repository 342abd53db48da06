mod args;

use std::process::ExitCode;

use air_quality::{
    export::export_to_path,
    logging,
    model::ReadingFilter,
    source::{apply_filter, read_reading_page},
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
    let page = read_reading_page(&args.file).context("failed to load readings")?;

    let filter = ReadingFilter {
        reading_type: args.reading_type,
        device_ids: args.device_id,
        start_ts: args.start_ts,
        end_ts: args.end_ts,
        skip: None,
        limit: 0,
    };
    let page = apply_filter(page, &filter, args.timezone).context("failed to filter readings")?;

    export_to_path(&args.output, &page.readings)
        .with_context(|| format!("failed to export readings to {:?}", args.output))?;

    println!(
        "Exported {} records from {:?} to {:?}",
        page.readings.len(),
        args.file,
        args.output
    );

    Ok(())
}
