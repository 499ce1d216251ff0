use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cogload_lib::{
    io::{csv as csv_io, payload as payload_io, text as text_io},
    resample::densify,
    series::LoadSamples,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cogload",
    version,
    about = "Cognitive-load series tools: densify, segment, playhead lookup"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SeriesKind {
    Instantaneous,
    Cumulative,
}

#[derive(Subcommand)]
enum Commands {
    /// Resample sparse samples onto a one-second grid with a natural cubic spline
    Densify {
        /// CSV export with time and load columns
        #[arg(long)]
        input: Option<PathBuf>,
        /// Backend analysis payload (JSON)
        #[arg(long)]
        payload: Option<PathBuf>,
        #[arg(long, default_value = "instantaneous")]
        series: SeriesKind,
        #[arg(long, default_value = "time")]
        time_col: String,
        #[arg(long, default_value = "load")]
        load_col: String,
    },
    /// Densify, then cut the sub-series between --start and --end (mm:ss or seconds)
    Segment {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        payload: Option<PathBuf>,
        #[arg(long, default_value = "instantaneous")]
        series: SeriesKind,
        #[arg(long, default_value = "time")]
        time_col: String,
        #[arg(long, default_value = "load")]
        load_col: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
    /// Report the load level in effect at a playback position (mm:ss or seconds)
    LevelAt {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        payload: Option<PathBuf>,
        #[arg(long, default_value = "cumulative")]
        series: SeriesKind,
        #[arg(long, default_value = "time")]
        time_col: String,
        #[arg(long, default_value = "load")]
        load_col: String,
        #[arg(long)]
        at: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Densify {
            input,
            payload,
            series,
            time_col,
            load_col,
        } => cmd_densify(
            input.as_deref(),
            payload.as_deref(),
            series,
            &time_col,
            &load_col,
        )?,
        Commands::Segment {
            input,
            payload,
            series,
            time_col,
            load_col,
            start,
            end,
        } => cmd_segment(
            input.as_deref(),
            payload.as_deref(),
            series,
            &time_col,
            &load_col,
            &start,
            &end,
        )?,
        Commands::LevelAt {
            input,
            payload,
            series,
            time_col,
            load_col,
            at,
        } => cmd_level_at(
            input.as_deref(),
            payload.as_deref(),
            series,
            &time_col,
            &load_col,
            &at,
        )?,
    }
    Ok(())
}

fn load_samples(
    input: Option<&Path>,
    payload: Option<&Path>,
    series: SeriesKind,
    time_col: &str,
    load_col: &str,
) -> Result<LoadSamples> {
    match (input, payload) {
        (Some(path), None) => csv_io::read_load_csv(path, time_col, load_col, b','),
        (None, Some(path)) => {
            let doc = payload_io::read_payload(path)?;
            match series {
                SeriesKind::Instantaneous => doc.instantaneous(),
                SeriesKind::Cumulative => doc.cumulative(),
            }
        }
        _ => bail!("provide exactly one of --input or --payload"),
    }
}

fn cmd_densify(
    input: Option<&Path>,
    payload: Option<&Path>,
    series: SeriesKind,
    time_col: &str,
    load_col: &str,
) -> Result<()> {
    let samples = load_samples(input, payload, series, time_col, load_col)?;
    let dense = densify(&samples)?;
    println!("{}", serde_json::to_string(&dense)?);
    Ok(())
}

fn cmd_segment(
    input: Option<&Path>,
    payload: Option<&Path>,
    series: SeriesKind,
    time_col: &str,
    load_col: &str,
    start: &str,
    end: &str,
) -> Result<()> {
    let start_s = text_io::parse_time_arg(start)?;
    let end_s = text_io::parse_time_arg(end)?;
    let samples = load_samples(input, payload, series, time_col, load_col)?;
    let dense = densify(&samples)?;
    let cut = dense.window(start_s, end_s);
    println!("{}", serde_json::to_string(&cut)?);
    Ok(())
}

#[derive(Serialize)]
struct LevelReport {
    at: f64,
    level: f64,
}

fn cmd_level_at(
    input: Option<&Path>,
    payload: Option<&Path>,
    series: SeriesKind,
    time_col: &str,
    load_col: &str,
    at: &str,
) -> Result<()> {
    let at = text_io::parse_time_arg(at)?;
    let samples = load_samples(input, payload, series, time_col, load_col)?;
    let level = samples
        .level_at(at)
        .ok_or_else(|| anyhow!("series has no samples"))?;
    println!("{}", serde_json::to_string(&LevelReport { at, level })?);
    Ok(())
}
