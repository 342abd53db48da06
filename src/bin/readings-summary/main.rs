mod args;

use std::process::ExitCode;

use air_quality::{
    classify::classify,
    label::{LabelFormat, datetime_label, label_for, tooltip_label},
    logging,
    model::{Device, Metric, MetricKind, Reading, ReadingFilter, page_count},
    series::{build_series, y_axis_range},
    source::{apply_filter, read_devices, read_reading_page},
    summary::summarize,
};
use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use indexmap::IndexSet;
use tracing::warn;

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
    let format = LabelFormat {
        locale: args.locale,
        timezone: args.timezone,
    };

    println!(
        "{} of {} readings from {:?}",
        page.readings.len(),
        page.total_count,
        args.file
    );

    for metric in Metric::CHARTED {
        println!("{}: {}", metric.label(), summarize(&page.readings, metric));
    }

    let table = match args.page {
        Some(n) => {
            let filter = ReadingFilter::default().page(n, args.page_size);
            let table = apply_filter(page.clone(), &filter, args.timezone)
                .context("failed to page readings")?;
            println!(
                "page {} of {}",
                n.max(1),
                page_count(table.total_count, args.page_size)
            );
            table
        }
        None => page.clone(),
    };

    println!();
    for reading in &table.readings {
        let granularity = args.granularity.unwrap_or(reading.reading_type);
        let labels = datetime_label(&reading.ts, &format)
            .and_then(|dt| label_for(&reading.ts, granularity, &format).map(|l| (dt, l)));
        let (measured_at, label) = match labels {
            Ok(labels) => labels,
            Err(e) => {
                warn!(device_id = %reading.device_id, "{e:#}");
                continue;
            }
        };

        let bands: Vec<String> = MetricKind::ALL
            .iter()
            .map(|&kind| {
                let c = classify(kind, reading.value(kind.metric()));
                format!("{kind}={}", c.band)
            })
            .collect();

        println!(
            "{measured_at}\t{label}\t{}\t{}",
            reading.device_id,
            bands.join(" ")
        );
    }

    if let Some(metric) = args.compare {
        let devices = match &args.devices {
            Some(path) => read_devices(path).context("failed to load devices")?,
            None => Vec::new(),
        };
        compare(&devices, &page.readings, metric, &format);
    }

    Ok(())
}

fn compare(devices: &[Device], readings: &[Reading], metric: Metric, format: &LabelFormat) {
    let ids: IndexSet<String> = readings.iter().map(|r| r.device_id.clone()).collect();
    let ids: Vec<String> = ids.into_iter().collect();
    let series = build_series(devices, readings, &ids, metric);

    println!();
    println!("{}", metric.label());
    for s in &series {
        let latest = readings
            .iter()
            .rev()
            .find(|r| r.device_id == s.device_id && r.value(metric).is_some())
            .and_then(|r| tooltip_label(&r.ts, format).ok());

        match latest {
            Some(at) => println!("  {}: {} points, last {at}", s.device_name, s.points.len()),
            None => println!("  {}: {} points", s.device_name, s.points.len()),
        }
    }
    match y_axis_range(&series) {
        Some((lo, hi)) => println!("  y axis {lo:.2} to {hi:.2}"),
        None => println!("  no data"),
    }
}
