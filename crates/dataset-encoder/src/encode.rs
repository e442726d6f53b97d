//! End-to-end encoding pipeline: load a labeled CSV, write the binary file.

use std::io;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::error::DatasetError;
use crate::loader::load_csv_dataset;
use crate::schema::NarrowingPolicy;
use crate::writer::write_dataset_file;

/// Encoding configuration supplied by the CLI.
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Encode at most this many leading data rows; `None` encodes them all.
    pub max_rows: Option<usize>,
    pub policy: NarrowingPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub records: usize,
    pub feature_count: usize,
    pub bytes: u64,
}

/// Run the pipeline described by `opts` and report what was written.
pub fn encode_dataset(opts: &EncodeOptions) -> Result<EncodeSummary, DatasetError> {
    if !opts.input.is_file() {
        return Err(DatasetError::file(
            &opts.input,
            io::Error::new(io::ErrorKind::NotFound, "input CSV not found"),
        ));
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {pos} rows loaded").unwrap());
    let dataset = load_csv_dataset(&opts.input, opts.max_rows, opts.policy, Some(&pb))?;
    pb.finish_and_clear();

    info!(
        "Loaded {} rows x {} features from {}",
        dataset.len(),
        dataset.feature_count(),
        opts.input.display()
    );
    if let Some(limit) = opts.max_rows {
        if dataset.len() == limit {
            info!("Row cap {limit} reached; later rows were skipped");
        }
    }
    if dataset.is_empty() {
        warn!("No data rows; the output holds only the zero record count");
    }

    let bytes = write_dataset_file(&dataset, &opts.output)?;
    info!("Wrote {} ({} bytes)", opts.output.display(), bytes);

    Ok(EncodeSummary {
        records: dataset.len(),
        feature_count: dataset.feature_count(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;

    fn opts(input: &Path, output: &Path) -> EncodeOptions {
        EncodeOptions {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            max_rows: None,
            policy: NarrowingPolicy::Reject,
        }
    }

    #[test]
    fn pipeline_matches_the_documented_scenario() {
        let td = tempdir().unwrap();
        let input = td.path().join("train.csv");
        let output = td.path().join("train.bin");
        fs::write(&input, "label,f1,f2\n1,10,20\n2,30,40\n3,50,60\n").unwrap();

        let summary = encode_dataset(&EncodeOptions {
            max_rows: Some(1000),
            ..opts(&input, &output)
        })
        .unwrap();

        assert_eq!(
            summary,
            EncodeSummary {
                records: 3,
                feature_count: 2,
                bytes: 13,
            }
        );
        assert_eq!(
            fs::read(&output).unwrap(),
            vec![
                0x00, 0x00, 0x00, 0x03, 0x01, 0x0A, 0x14, 0x02, 0x1E, 0x28, 0x03, 0x32, 0x3C,
            ]
        );
    }

    #[test]
    fn row_cap_truncates_in_order() {
        let td = tempdir().unwrap();
        let input = td.path().join("train.csv");
        let output = td.path().join("train.bin");
        fs::write(&input, "label,f1\n1,10\n2,20\n3,30\n4,40\n5,50\n").unwrap();

        let summary = encode_dataset(&EncodeOptions {
            max_rows: Some(2),
            ..opts(&input, &output)
        })
        .unwrap();

        assert_eq!(summary.records, 2);
        assert_eq!(fs::read(&output).unwrap(), vec![0, 0, 0, 2, 1, 10, 2, 20]);
    }

    #[test]
    fn zero_cap_writes_only_the_header() {
        let td = tempdir().unwrap();
        let input = td.path().join("train.csv");
        let output = td.path().join("train.bin");
        fs::write(&input, "label,f1\n1,10\n").unwrap();

        let summary = encode_dataset(&EncodeOptions {
            max_rows: Some(0),
            ..opts(&input, &output)
        })
        .unwrap();

        assert_eq!(summary.records, 0);
        assert_eq!(summary.bytes, 4);
        assert_eq!(fs::read(&output).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn missing_input_reports_the_path() {
        let td = tempdir().unwrap();
        let input = td.path().join("nope.csv");
        let output = td.path().join("out.bin");

        let err = encode_dataset(&opts(&input, &output)).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn load_failure_leaves_no_output_behind() {
        let td = tempdir().unwrap();
        let input = td.path().join("train.csv");
        let output = td.path().join("train.bin");
        fs::write(&input, "label,f1\n1,300\n").unwrap();

        let err = encode_dataset(&opts(&input, &output)).unwrap_err();
        assert!(err.is_format());
        assert!(!output.exists());
    }
}
