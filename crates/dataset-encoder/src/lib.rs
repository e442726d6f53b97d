//! Pack labeled CSV datasets into the fixed-record binary layout read by the
//! trainer, and decode such files back for verification.
//!
//! The layout is a 4-byte big-endian record count followed by one fixed-size
//! record per row: a label byte, then one byte per feature. The feature width
//! is not stored in the file; readers supply it out of band. See
//! `docs/binary-format.md` for the byte-level contract.

pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod loader;
pub mod schema;
pub mod writer;

pub use decode::decode_file;
pub use encode::{EncodeOptions, EncodeSummary, encode_dataset};
pub use error::DatasetError;
pub use loader::load_csv_dataset;
pub use schema::{Dataset, NarrowingPolicy, Record};
pub use writer::write_dataset_file;
