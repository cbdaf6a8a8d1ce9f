//! CLI for dumping the canonical fixture datasets to Parquet.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;
use vizdata_fixtures::datasets::{long_frame, repeated_frame, wide_frame};
use vizdata_fixtures::parquet::write_frame;
use vizdata_fixtures::rng::{seed_from_label, FIXTURE_RNG_LABEL};

#[derive(Parser, Debug)]
#[command(name = "vizdata-fixtures")]
#[command(about = "Deterministic fixture datasets for chart-library tests")]
struct Args {
    /// Output directory for Parquet files
    #[arg(short, long, default_value = "fixtures")]
    output: PathBuf,

    /// Random seed; defaults to the canonical object-label seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Quiet mode (no summary output)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let seed = args
        .seed
        .unwrap_or_else(|| seed_from_label(FIXTURE_RNG_LABEL));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory: {:?}", args.output))?;

    let wide = wide_frame(&mut rng)?;
    let long = long_frame(&mut rng)?;
    let repeated = repeated_frame(&mut rng)?;

    for (name, frame) in [("wide", &wide), ("long", &long), ("repeated", &repeated)] {
        let path = args.output.join(format!("{}.parquet", name));
        write_frame(&path, frame)?;
        if !args.quiet {
            println!(
                "{}: {} rows x {} columns -> {:?}",
                name,
                frame.num_rows(),
                frame.num_columns(),
                path
            );
        }
    }

    if !args.quiet {
        println!();
        println!("Seed: {}", seed);
    }

    Ok(())
}
