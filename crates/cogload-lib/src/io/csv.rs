use crate::io::text::parse_time_arg;
use crate::series::LoadSamples;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Read a sparse load series from a delimited export.
///
/// The time column accepts either plain seconds or `mm:ss` clock labels.
pub fn read_load_csv(
    path: &Path,
    time_col: &str,
    load_col: &str,
    delimiter: u8,
) -> Result<LoadSamples> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(file);
    let headers = reader.headers().context("reading header")?.clone();

    let time_idx = locate_column(&headers, time_col, "time")?;
    let load_idx = locate_column(&headers, load_col, "load")?;

    let mut times = Vec::new();
    let mut values = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading row {}", row + 1))?;
        let time = record
            .get(time_idx)
            .ok_or_else(|| anyhow::anyhow!("row {} is missing the time field", row + 1))?;
        let time = parse_time_arg(time).with_context(|| format!("row {}", row + 1))?;
        let value = record
            .get(load_idx)
            .ok_or_else(|| anyhow::anyhow!("row {} is missing the load field", row + 1))?
            .parse::<f64>()
            .with_context(|| format!("row {}: bad load value", row + 1))?;
        times.push(time);
        values.push(value);
    }
    Ok(LoadSamples { times, values })
}

fn locate_column(headers: &csv::StringRecord, requested: &str, hint: &str) -> Result<usize> {
    headers
        .iter()
        .position(|name| name.eq_ignore_ascii_case(requested))
        .ok_or_else(|| anyhow::anyhow!("missing {} column ({})", hint, requested))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        manifest_dir
            .parent()
            .and_then(|p| p.parent())
            .expect("workspace root")
            .join("test_data")
            .join(name)
    }

    #[test]
    fn reads_clock_labelled_export() {
        let samples = read_load_csv(&fixture("lecture_load.csv"), "time", "load", b',').unwrap();
        assert_eq!(samples.times, vec![0.0, 2.0, 4.0]);
        assert_eq!(samples.values, vec![0.2, 0.8, 0.3]);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = read_load_csv(&fixture("lecture_load.csv"), "time", "nope", b',').unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
