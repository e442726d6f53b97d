//! Load labeled CSV rows into an in-memory [`Dataset`].
//!
//! The first CSV row is a header naming the columns; the first column of
//! every data row is the label, the rest are features. Error positions are
//! 1-based: row 1 is the first data row, column 1 is the label column.

use std::path::Path;

use indicatif::ProgressBar;
use log::debug;

use crate::error::DatasetError;
use crate::schema::{Dataset, NarrowingPolicy, Record};

/// Read at most `max_rows` leading data rows from the CSV at `path`,
/// narrowing every field to a byte per `policy`.
///
/// Rows past the cap are never pulled from the reader, so malformed content
/// after the cap goes unnoticed (matching the truncate-then-parse order of
/// the pipeline this replaces). `progress` is ticked once per kept row.
pub fn load_csv_dataset(
    path: &Path,
    max_rows: Option<usize>,
    policy: NarrowingPolicy,
    progress: Option<&ProgressBar>,
) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let expected = headers.len();
    if expected == 0 {
        // An empty file has no header row and therefore no data rows.
        return Ok(Dataset::new(0));
    }
    let feature_count = expected - 1;
    debug!(
        "{}: {} columns (label + {} features)",
        path.display(),
        expected,
        feature_count
    );

    let limit = max_rows.unwrap_or(usize::MAX);
    let mut dataset = Dataset::new(feature_count);
    let mut rows = reader.into_records();
    let mut row = 0usize;
    while dataset.len() < limit {
        let result = match rows.next() {
            Some(result) => result,
            None => break,
        };
        row += 1;
        let record = result?;
        if record.len() != expected {
            return Err(DatasetError::FieldCountMismatch {
                row,
                expected,
                got: record.len(),
            });
        }

        let mut values = Vec::with_capacity(expected);
        for (idx, field) in record.iter().enumerate() {
            let column = idx + 1;
            let value: i64 = field.parse().map_err(|_| DatasetError::NonNumericField {
                row,
                column,
                value: field.to_string(),
            })?;
            let byte = policy
                .narrow(value)
                .ok_or(DatasetError::ValueOutOfRange { row, column, value })?;
            values.push(byte);
        }

        let features = values.split_off(1);
        dataset.push(Record {
            label: values[0],
            features,
        })?;
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    Ok(dataset)
}
