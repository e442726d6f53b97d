//! Persist a [`Dataset`] to disk in the trainer's binary layout.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::codec;
use crate::error::DatasetError;
use crate::schema::Dataset;

/// Write `dataset` to `path` atomically via a sibling temp file.
///
/// Bytes land in `<name>.tmp` first and are renamed over `path` once fully
/// flushed, so a reader never observes a partially written file. Returns the
/// number of bytes written.
pub fn write_dataset_file(dataset: &Dataset, path: &Path) -> Result<u64, DatasetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| DatasetError::file(parent, source))?;
    }
    let file_name = path.file_name().ok_or_else(|| {
        DatasetError::file(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        )
    })?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let file = File::create(&tmp_path).map_err(|source| DatasetError::file(&tmp_path, source))?;
    let mut writer = BufWriter::new(file);
    codec::write_records(&mut writer, dataset)?;
    writer.flush()?;
    fs::rename(&tmp_path, path).map_err(|source| DatasetError::file(path, source))?;
    Ok(codec::encoded_len(dataset.len(), dataset.feature_count()))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::schema::Record;

    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(
            2,
            vec![
                Record {
                    label: 1,
                    features: vec![10, 20],
                },
                Record {
                    label: 2,
                    features: vec![30, 40],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn writes_the_documented_bytes_and_reports_their_count() {
        let td = tempdir().unwrap();
        let path = td.path().join("out.bin");

        let bytes = write_dataset_file(&sample(), &path).unwrap();
        assert_eq!(bytes, 10);

        let contents = fs::read(&path).unwrap();
        assert_eq!(contents, [0, 0, 0, 2, 1, 10, 20, 2, 30, 40]);
        assert_eq!(fs::metadata(&path).unwrap().len(), bytes);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let td = tempdir().unwrap();
        let path = td.path().join("nested").join("deep").join("out.bin");

        write_dataset_file(&sample(), &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn replaces_an_existing_file_and_leaves_no_temp_behind() {
        let td = tempdir().unwrap();
        let path = td.path().join("out.bin");
        fs::write(&path, b"stale").unwrap();

        write_dataset_file(&sample(), &path).unwrap();

        let contents = fs::read(&path).unwrap();
        assert_eq!(contents[..4], [0, 0, 0, 2]);
        assert!(!td.path().join("out.bin.tmp").exists());
    }

    #[test]
    fn empty_dataset_is_just_the_header() {
        let td = tempdir().unwrap();
        let path = td.path().join("empty.bin");

        let bytes = write_dataset_file(&Dataset::new(784), &path).unwrap();
        assert_eq!(bytes, 4);
        assert_eq!(fs::read(&path).unwrap(), [0, 0, 0, 0]);
    }
}
