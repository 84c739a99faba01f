//! Closest pair of points finder
//!
//! Reads planar point datasets, finds the pair of points with the minimum
//! Euclidean distance in each one using divide and conquer, and prints the pair.

use clap::{Parser, ValueEnum};
use csv::WriterBuilder;
use log::{LevelFilter, debug, info};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

mod closest;
mod input;
mod util;

#[cfg(test)]
mod input_test;

use closest::{Pair, Point, brute_force, closest_pair_with_stats};
use input::{DatasetReader, read_points_csv};
use util::Timed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Point count followed by `x y` pairs, repeated; a count of 0 ends the input
    Text,
    /// Single dataset as `x,y` rows
    Csv,
}

#[derive(Parser)]
#[command(name = "closest_pair")]
#[command(about = "Closest pair of points finder", long_about = None)]
struct Args {
    /// Input file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input and output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Decimal places for coordinates in text output
    #[arg(short, long, default_value_t = 2)]
    precision: usize,

    /// Cross-check every result against a brute force search
    #[arg(long)]
    verify: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Divide and conquer disagrees with the brute force reference
#[derive(Debug, thiserror::Error)]
#[error(
    "closest pair mismatch on {points} points: divide and conquer gave {got}, brute force gave {expected}"
)]
struct VerifyMismatch {
    points: usize,
    got: f64,
    expected: f64,
}

fn main() {
    let args = Args::parse();
    init_logger(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Sets up `env_logger`; `RUST_LOG` takes precedence over the debug flag
fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        Format::Text => {
            let reader: Box<dyn BufRead> = match &args.input {
                Some(path) => Box::new(BufReader::new(File::open(path)?)),
                None => Box::new(io::stdin().lock()),
            };
            let solved = solve_datasets(reader, &mut out, args.precision, args.verify)?;
            info!("Solved {} datasets", solved);
        }
        Format::Csv => {
            let path = args
                .input
                .as_ref()
                .ok_or("CSV format needs an input file")?;
            let points = read_points_csv(path)?;
            debug!("Read {} points from {:?}", points.len(), path);

            let pair = solve_dataset(&points, args.verify)?;
            write_pair_csv(&mut out, &points, &pair)?;
        }
    }

    out.flush()?;
    if let Some(path) = &args.output {
        debug!("Results written to {:?}", path);
    }

    Ok(())
}

/// Solves every dataset of a text stream, writing one line per dataset
///
/// # Returns
///
/// Number of datasets solved
fn solve_datasets<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    precision: usize,
    verify: bool,
) -> Result<usize, Box<dyn Error>> {
    let mut solved = 0;

    for dataset in DatasetReader::new(reader) {
        let points = dataset?;
        let pair = solve_dataset(&points, verify)?;
        writeln!(out, "{}", format_pair(&points, &pair, precision))?;
        solved += 1;
    }

    Ok(solved)
}

/// Finds the closest pair of one dataset, optionally checking it by brute force
fn solve_dataset(points: &[Point], verify: bool) -> Result<Pair, VerifyMismatch> {
    let (pair, stats) = {
        let _t = Timed::debug("Closest pair", points.len());
        closest_pair_with_stats(points)
    };

    debug!(
        "{} points: squared distance {}, distance {:.4}",
        points.len(),
        pair.sq_dist,
        pair.distance()
    );
    debug!(
        "{} merges, {} slab points (max {}), {} comparisons",
        stats.merges, stats.slab_points, stats.max_slab, stats.comparisons
    );

    if verify {
        let expected = brute_force(points);
        if expected.sq_dist != pair.sq_dist {
            return Err(VerifyMismatch {
                points: points.len(),
                got: pair.sq_dist,
                expected: expected.sq_dist,
            });
        }
        if !pair.same_points(&expected) {
            // Equal distance, the brute force scan just met another pair first
            debug!(
                "Brute force picked pair ({}, {}) at the same distance",
                expected.a, expected.b
            );
        }
        debug!("Verified against brute force");
    }

    Ok(pair)
}

/// Formats a pair as `ax ay bx by` with fixed decimals
fn format_pair(points: &[Point], pair: &Pair, precision: usize) -> String {
    let (a, b) = pair.points(points);
    format!(
        "{:.p$} {:.p$} {:.p$} {:.p$}",
        a.x(),
        a.y(),
        b.x(),
        b.y(),
        p = precision
    )
}

/// Writes a pair as a CSV row with an `ax,ay,bx,by,distance` header
fn write_pair_csv<W: Write>(out: W, points: &[Point], pair: &Pair) -> Result<(), Box<dyn Error>> {
    let (a, b) = pair.points(points);
    let mut writer = WriterBuilder::new().from_writer(out);

    writer.write_record(["ax", "ay", "bx", "by", "distance"])?;
    writer.write_record([
        a.x().to_string(),
        a.y().to_string(),
        b.x().to_string(),
        b.y().to_string(),
        pair.distance().to_string(),
    ])?;

    writer.flush()?;
    Ok(())
}
