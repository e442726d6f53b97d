//! Shared error types for dataset encode/decode.
//!
//! Variants fall into the two classes callers care about: I/O failures
//! (source unreadable, destination unwritable) and format violations (the
//! input or the encoded file breaks the layout contract). The split is
//! exposed through [`DatasetError::is_io`] and [`DatasetError::is_format`].

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while loading, encoding, or decoding a labeled dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Stream-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File-level I/O failure with the offending path attached.
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV reader failure; I/O-caused when [`csv::Error::is_io_error`] holds.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row's field count disagrees with the header row.
    #[error("row {row}: expected {expected} fields, got {got}")]
    FieldCountMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A field failed to parse as an integer.
    #[error("row {row}, column {column}: '{value}' is not an integer")]
    NonNumericField {
        row: usize,
        column: usize,
        value: String,
    },

    /// A field parsed but does not fit the single output byte.
    #[error("row {row}, column {column}: value {value} is outside 0..=255")]
    ValueOutOfRange {
        row: usize,
        column: usize,
        value: i64,
    },

    /// More records than the 4-byte big-endian header can count.
    #[error("{0} records exceed the u32 header limit")]
    TooManyRecords(usize),

    /// The encoded file ended inside the record region.
    #[error("file ends after {decoded} of {expected} records")]
    Truncated { expected: usize, decoded: usize },

    /// The encoded file's length disagrees with the size law
    /// `4 + records * (1 + feature_count)`.
    #[error("file is {actual} bytes, expected {expected}")]
    LengthMismatch { expected: u64, actual: u64 },
}

impl DatasetError {
    pub(crate) fn file(path: &Path, source: io::Error) -> Self {
        DatasetError::File {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for failures reading the source or writing the destination.
    pub fn is_io(&self) -> bool {
        match self {
            DatasetError::Io(_) | DatasetError::File { .. } => true,
            DatasetError::Csv(err) => err.is_io_error(),
            _ => false,
        }
    }

    /// True for violations of the CSV or binary layout contract.
    pub fn is_format(&self) -> bool {
        !self.is_io()
    }
}
