mod algo;
mod color;
mod feature;
mod input;
mod model;
mod pipeline;
mod record;

use crate::algo::GapThreshold;
use crate::feature::{build_feature_collection, write_geojson};
use crate::input::read_rows;
use crate::pipeline::{process, write_rejects};
use clap::Parser;
use eyre::WrapErr;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// CSV file with a header line and the columns device_id, lat, lon, timestamp
    #[clap(long, default_value = "points.csv")]
    input: PathBuf,

    /// rows which failed validation are written to this file, one per line
    #[clap(long, default_value = "rejects.log")]
    rejects: PathBuf,

    /// GeoJSON output
    #[clap(long, default_value = "trips.geojson")]
    output: PathBuf,
}

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}

/// read the input, then write the reject log and the GeoJSON.
///
/// A missing input fails before any output file is created.
fn run(args: &Args) -> eyre::Result<()> {
    let source = File::open(&args.input)
        .wrap_err_with(|| format!("file {} not found", args.input.display()))?;
    let rows = read_rows(source)
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;

    let processed = process(rows, &GapThreshold::default());

    write_rejects(
        &processed.rejects,
        BufWriter::new(
            File::create(&args.rejects)
                .wrap_err_with(|| format!("failed to create {}", args.rejects.display()))?,
        ),
    )?;

    info!("valid data: {} rows", processed.valid_count);
    info!(
        "invalid data: {} rows (saved to {})",
        processed.rejects.len(),
        args.rejects.display()
    );
    info!("total trips: {}", processed.trips.len());

    let collection = build_feature_collection(&processed.trips, &processed.summaries)?;
    write_geojson(
        collection,
        BufWriter::new(
            File::create(&args.output)
                .wrap_err_with(|| format!("failed to create {}", args.output.display()))?,
        ),
    )?;
    info!("GeoJSON saved to {}", args.output.display());
    Ok(())
}
