use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use train_charts::{read_loss_log, render_loss_chart};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Plot the training loss curve from a run's measurement log"
)]
struct Cli {
    /// Headerless epoch,loss CSV written by the training run
    #[arg(long, value_name = "FILE", default_value = "output.csv")]
    input: PathBuf,

    /// Destination SVG
    #[arg(long, value_name = "FILE", default_value = "loss_plot.svg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let samples = read_loss_log(&cli.input)?;
    render_loss_chart(&samples, &cli.output)
        .with_context(|| format!("failed to render {}", cli.output.display()))?;
    info!(
        "Plotted {} epochs to {}",
        samples.len(),
        cli.output.display()
    );
    Ok(())
}
