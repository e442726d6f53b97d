//! Readers for the training program's measurement logs.
//!
//! Both logs are headerless two-column CSVs; rows are addressed 1-based in
//! errors.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// One `epoch,loss` row from a training-loss log.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LossSample {
    pub epoch: u32,
    pub loss: f64,
}

/// One `size,seconds` row from a runtime-measurement log.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TimingSample {
    pub size: u64,
    pub seconds: f64,
}

/// Read an `epoch,loss` log. Empty logs and non-finite losses are errors.
pub fn read_loss_log(path: &Path) -> Result<Vec<LossSample>> {
    let mut reader = csv_reader(path)?;
    let mut samples = Vec::new();
    for (idx, row) in reader.deserialize().enumerate() {
        let sample: LossSample = row
            .with_context(|| format!("failed to parse {} at row {}", path.display(), idx + 1))?;
        if !sample.loss.is_finite() {
            bail!("{}: row {}: loss is not finite", path.display(), idx + 1);
        }
        samples.push(sample);
    }
    if samples.is_empty() {
        bail!("no samples in {}", path.display());
    }
    Ok(samples)
}

/// Read a `size,seconds` log, requiring values a log-log chart can place:
/// every size must be at least 1 and every duration positive and finite.
pub fn read_timing_log(path: &Path) -> Result<Vec<TimingSample>> {
    let mut reader = csv_reader(path)?;
    let mut samples = Vec::new();
    for (idx, row) in reader.deserialize().enumerate() {
        let sample: TimingSample = row
            .with_context(|| format!("failed to parse {} at row {}", path.display(), idx + 1))?;
        if sample.size == 0 || sample.seconds <= 0.0 || !sample.seconds.is_finite() {
            bail!(
                "{}: row {}: need size >= 1 and seconds > 0, got {},{}",
                path.display(),
                idx + 1,
                sample.size,
                sample.seconds
            );
        }
        samples.push(sample);
    }
    if samples.is_empty() {
        bail!("no samples in {}", path.display());
    }
    Ok(samples)
}

fn csv_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))
}
