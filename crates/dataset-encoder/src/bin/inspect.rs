use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dataset_encoder::codec::encoded_len;
use dataset_encoder::decode_file;
use env_logger::Env;

/// Quick check over an encoded dataset: decode it, print what it holds.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Inspect an encoded dataset file and print a summary"
)]
struct Cli {
    /// Encoded binary dataset file
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Feature count the file was encoded with (not stored in the file)
    #[arg(long, value_name = "N")]
    features: usize,

    /// Number of leading records to print
    #[arg(long, value_name = "N", default_value_t = 5)]
    rows: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let dataset = decode_file(&cli.input, cli.features)
        .with_context(|| format!("failed to decode {}", cli.input.display()))?;

    println!(
        "{}: {} records, {} features each, {} bytes",
        cli.input.display(),
        dataset.len(),
        dataset.feature_count(),
        encoded_len(dataset.len(), dataset.feature_count())
    );

    let mut histogram = [0usize; 256];
    for record in dataset.records() {
        histogram[record.label as usize] += 1;
    }
    println!("Labels:");
    for (label, count) in histogram.iter().enumerate() {
        if *count > 0 {
            println!("  {label:>3}: {count}");
        }
    }

    for (idx, record) in dataset.records().iter().take(cli.rows).enumerate() {
        let head: Vec<u8> = record.features.iter().copied().take(8).collect();
        let rest = record.features.len() - head.len();
        if rest > 0 {
            println!(
                "record {idx}: label={} features={head:?} (+{rest} more)",
                record.label
            );
        } else {
            println!("record {idx}: label={} features={head:?}", record.label);
        }
    }

    Ok(())
}
