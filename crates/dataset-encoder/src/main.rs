use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dataset_encoder::{EncodeOptions, NarrowingPolicy, encode_dataset};
use env_logger::Env;
use log::info;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Encode a labeled CSV dataset into the trainer's binary format"
)]
struct Cli {
    /// CSV file with a header row; the first column is the label
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Destination for the encoded binary file
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// Encode at most N leading data rows (omit => all rows)
    #[arg(long, value_name = "N")]
    max_rows: Option<usize>,

    /// How to narrow parsed integers to bytes: reject, clamp, or wrap
    #[arg(long, value_name = "POLICY", default_value_t = NarrowingPolicy::Reject)]
    policy: NarrowingPolicy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = EncodeOptions {
        input: cli.input,
        output: cli.output,
        max_rows: cli.max_rows,
        policy: cli.policy,
    };

    let summary = encode_dataset(&options)
        .with_context(|| format!("failed to encode {}", options.input.display()))?;
    info!(
        "Completed encoding: {} records x {} features, {} bytes",
        summary.records, summary.feature_count, summary.bytes
    );
    Ok(())
}
