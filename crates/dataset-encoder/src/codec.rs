//! Byte layout of encoded dataset files.
//!
//! ```text
//! offset 0 : u32 big-endian  record count
//! offset 4 : count x record
//!   record : u8 label, then feature_count x u8 feature
//! ```
//!
//! The feature count is not stored; readers must know it out of band. The
//! full contract lives in `docs/binary-format.md`.

use std::io::{self, Read, Write};

use crate::error::DatasetError;
use crate::schema::{Dataset, Record};

/// Size of the record-count header in bytes.
pub const HEADER_LEN: u64 = 4;

/// Encoded size of one record.
pub fn record_len(feature_count: usize) -> u64 {
    1 + feature_count as u64
}

/// Encoded size of a whole dataset: `4 + records * (1 + feature_count)`.
pub fn encoded_len(records: usize, feature_count: usize) -> u64 {
    HEADER_LEN + records as u64 * record_len(feature_count)
}

/// Write the count header and every record to `writer` in dataset order.
pub fn write_records<W: Write>(writer: &mut W, dataset: &Dataset) -> Result<(), DatasetError> {
    let count =
        u32::try_from(dataset.len()).map_err(|_| DatasetError::TooManyRecords(dataset.len()))?;
    writer.write_all(&count.to_be_bytes())?;
    for record in dataset.records() {
        writer.write_all(&[record.label])?;
        writer.write_all(&record.features)?;
    }
    Ok(())
}

/// Read the count header, then that many records of `feature_count` features
/// each, preserving order.
///
/// EOF inside the record region surfaces as [`DatasetError::Truncated`].
/// Bytes past the last record are left unread; file-level strictness lives in
/// [`crate::decode::decode_file`].
pub fn read_records<R: Read>(
    reader: &mut R,
    feature_count: usize,
) -> Result<Dataset, DatasetError> {
    let mut header = [0u8; 4];
    reader.read_exact(&mut header)?;
    let expected = u32::from_be_bytes(header) as usize;

    // The header is untrusted; cap the pre-allocation.
    let mut dataset = Dataset::with_capacity(feature_count, expected.min(1 << 20));
    for decoded in 0..expected {
        let mut label = [0u8; 1];
        read_record_bytes(reader, &mut label, expected, decoded)?;
        let mut features = vec![0u8; feature_count];
        read_record_bytes(reader, &mut features, expected, decoded)?;
        dataset.push(Record {
            label: label[0],
            features,
        })?;
    }
    Ok(dataset)
}

fn read_record_bytes<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    expected: usize,
    decoded: usize,
) -> Result<(), DatasetError> {
    reader.read_exact(buf).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            DatasetError::Truncated { expected, decoded }
        } else {
            DatasetError::Io(err)
        }
    })
}
