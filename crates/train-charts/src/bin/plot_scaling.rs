use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use train_charts::{read_timing_log, render_scaling_chart};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Plot runtime against input size on log-log axes"
)]
struct Cli {
    /// Headerless size,seconds CSV of timing measurements
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Destination SVG
    #[arg(long, value_name = "FILE", default_value = "time_vs_size.svg")]
    output: PathBuf,

    /// Factor applied to every reference curve (y = scale * f(n))
    #[arg(long, value_name = "X", default_value_t = 1e-6)]
    scale: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if cli.scale <= 0.0 {
        warn!(
            "scale {} leaves no positive curve points; reference curves will be omitted",
            cli.scale
        );
    }

    let samples = read_timing_log(&cli.input)?;
    render_scaling_chart(&samples, cli.scale, &cli.output)
        .with_context(|| format!("failed to render {}", cli.output.display()))?;
    info!(
        "Plotted {} measurements to {}",
        samples.len(),
        cli.output.display()
    );
    Ok(())
}
