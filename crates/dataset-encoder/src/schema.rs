//! In-memory dataset model shared by the encoder and decoder.

use std::fmt;
use std::str::FromStr;

use crate::error::DatasetError;

/// One labeled example: a class label plus its feature bytes in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub label: u8,
    pub features: Vec<u8>,
}

/// Ordered records with a uniform feature width.
///
/// The width invariant is enforced at construction: every record carries
/// exactly `feature_count` features, so the encoded size of a dataset is
/// always `4 + len * (1 + feature_count)` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    feature_count: usize,
    records: Vec<Record>,
}

impl Dataset {
    /// Create an empty dataset with the given feature width.
    pub fn new(feature_count: usize) -> Self {
        Self {
            feature_count,
            records: Vec::new(),
        }
    }

    /// Create an empty dataset with room for `capacity` records.
    pub fn with_capacity(feature_count: usize, capacity: usize) -> Self {
        Self {
            feature_count,
            records: Vec::with_capacity(capacity),
        }
    }

    /// Build a dataset from records, validating the width invariant.
    pub fn from_records(
        feature_count: usize,
        records: Vec<Record>,
    ) -> Result<Self, DatasetError> {
        for (idx, record) in records.iter().enumerate() {
            if record.features.len() != feature_count {
                return Err(DatasetError::FieldCountMismatch {
                    row: idx + 1,
                    expected: 1 + feature_count,
                    got: 1 + record.features.len(),
                });
            }
        }
        Ok(Self {
            feature_count,
            records,
        })
    }

    /// Append a record, validating its width against the dataset's.
    pub fn push(&mut self, record: Record) -> Result<(), DatasetError> {
        if record.features.len() != self.feature_count {
            return Err(DatasetError::FieldCountMismatch {
                row: self.records.len() + 1,
                expected: 1 + self.feature_count,
                got: 1 + record.features.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// How a parsed integer field is narrowed into the single output byte.
///
/// The script this replaces narrowed by raw byte reinterpretation, which
/// silently corrupts anything outside `0..=255`; here the rule is explicit
/// and chosen by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NarrowingPolicy {
    /// Refuse values outside `0..=255`.
    #[default]
    Reject,
    /// Clamp into the byte range: negatives become 0, values above 255
    /// become 255.
    Clamp,
    /// Keep the low byte of the two's-complement representation (the legacy
    /// behavior: 256 wraps to 0, -1 to 255).
    Wrap,
}

impl NarrowingPolicy {
    /// Narrow `value` to a byte, or `None` when the policy refuses it.
    ///
    /// `Clamp` and `Wrap` never refuse.
    pub fn narrow(self, value: i64) -> Option<u8> {
        match self {
            NarrowingPolicy::Reject => u8::try_from(value).ok(),
            NarrowingPolicy::Clamp => Some(value.clamp(0, 255) as u8),
            NarrowingPolicy::Wrap => Some(value as u8),
        }
    }
}

impl fmt::Display for NarrowingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NarrowingPolicy::Reject => "reject",
            NarrowingPolicy::Clamp => "clamp",
            NarrowingPolicy::Wrap => "wrap",
        };
        f.write_str(name)
    }
}

impl FromStr for NarrowingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(NarrowingPolicy::Reject),
            "clamp" => Ok(NarrowingPolicy::Clamp),
            "wrap" => Ok(NarrowingPolicy::Wrap),
            other => Err(format!(
                "unknown narrowing policy '{other}' (expected reject, clamp, or wrap)"
            )),
        }
    }
}
