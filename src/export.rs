use std::{fs::File, io::Write, path::Path};

use anyhow::{Context as _, Result};
use csv::Writer;
use tracing::info;

use crate::model::{Metric, Reading};

pub const DEFAULT_FILE_NAME: &str = "exported_data.csv";

const LEADING_COLUMNS: [&str; 3] = ["device_id", "ts", "reading_type"];

pub fn header() -> Vec<&'static str> {
    LEADING_COLUMNS
        .into_iter()
        .chain(Metric::ALL.iter().map(|m| m.as_str()))
        .collect()
}

/// Writes the header and one row per reading. Missing values are empty cells.
pub fn write_csv<W: Write>(writer: W, readings: &[Reading]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    writer
        .write_record(header())
        .context("failed to write CSV header")?;

    for reading in readings {
        let mut record = vec![
            reading.device_id.clone(),
            reading.ts.clone(),
            reading.reading_type.as_str().to_string(),
        ];
        record.extend(
            Metric::ALL
                .iter()
                .map(|&m| reading.value(m).map(|v| v.to_string()).unwrap_or_default()),
        );

        writer.write_record(&record).with_context(|| {
            format!(
                "failed to write CSV row: {} {}",
                reading.device_id, reading.ts
            )
        })?;
    }

    writer.flush().context("failed to flush CSV writer")?;

    Ok(())
}

pub fn export_to_path(path: &Path, readings: &[Reading]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create file: {path:?}"))?;
    write_csv(file, readings)?;

    info!(rows = readings.len(), path = %path.display(), "exported readings");

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Granularity;

    #[test]
    fn writes_header_and_rows() {
        let readings = [
            Reading::new("dev-1", "2024-01-01T10:00:00Z", Granularity::Hourly)
                .with(Metric::Co2, 450.0)
                .with(Metric::Tp, 26.5),
            Reading::new("dev-2", "2024-01-01T11:00:00Z", Granularity::Hourly)
                .with(Metric::Pr, f64::NAN),
        ];
        let mut out = Vec::new();

        write_csv(&mut out, &readings).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "device_id,ts,reading_type,co2,hm,pm1,pm10_aqicn,pm10_aqius,pm10_conc,pm25_aqicn,pm25_aqius,pm25_conc,pr,tp\n\
             dev-1,2024-01-01T10:00:00Z,hourly,450,,,,,,,,,,26.5\n\
             dev-2,2024-01-01T11:00:00Z,hourly,,,,,,,,,,,\n"
        );
    }

    #[test]
    fn empty_export_still_has_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn exports_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let readings =
            [Reading::new("d", "2024-01-01", Granularity::Daily).with(Metric::Hm, 55.0)];

        export_to_path(&path, &readings).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("d,2024-01-01,daily,,55,,,,,,,,,\n"));
    }
}
