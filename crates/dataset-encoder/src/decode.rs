//! File-level decoding with a strict length check.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::codec::{self, HEADER_LEN};
use crate::error::DatasetError;
use crate::schema::Dataset;

/// Decode the dataset at `path`, supplying the out-of-band feature width.
///
/// Beyond reconstructing the records, this checks the size law
/// `4 + count * (1 + feature_count)` against the real file size, so a
/// mis-supplied width fails loudly whenever the two disagree.
pub fn decode_file(path: &Path, feature_count: usize) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::file(path, source))?;
    let actual = file
        .metadata()
        .map_err(|source| DatasetError::file(path, source))?
        .len();
    if actual < HEADER_LEN {
        return Err(DatasetError::LengthMismatch {
            expected: HEADER_LEN,
            actual,
        });
    }

    let mut reader = BufReader::new(file);
    let dataset = codec::read_records(&mut reader, feature_count)?;

    let expected = codec::encoded_len(dataset.len(), feature_count);
    if actual != expected {
        return Err(DatasetError::LengthMismatch { expected, actual });
    }
    Ok(dataset)
}
