//! JSON store shared by both repositories.
//!
//! A store is a single document `{"version": 1, "records": [...]}`. It is
//! written in full on every save and read in full on every load.

use crate::error::{StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Current on-disk format version.
pub const STORE_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoreDocumentRef<'a, T: Serialize> {
    version: u32,
    records: Vec<&'a T>,
}

#[derive(Deserialize)]
struct StoreDocument<T> {
    version: u32,
    records: Vec<T>,
}

/// Write `records` to `path`, replacing any previous content.
///
/// Missing parent directories are created.
pub fn write_records<'a, T, I>(path: &Path, records: I) -> StorageResult<usize>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let document = StoreDocumentRef {
        version: STORE_VERSION,
        records: records.into_iter().collect(),
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document).map_err(|e| StorageError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), records = document.records.len(), "Store written");
    Ok(document.records.len())
}

/// Read every record from the store at `path`.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> StorageResult<Vec<T>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StorageError::NotFound(path.to_path_buf()),
        _ => StorageError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let document: StoreDocument<T> = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        },
    )?;

    if document.version != STORE_VERSION {
        return Err(StorageError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: document.version,
            expected: STORE_VERSION,
        });
    }

    debug!(path = %path.display(), records = document.records.len(), "Store read");
    Ok(document.records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Row {
        value: String,
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        let rows = vec![
            Row {
                value: "a".to_string(),
            },
            Row {
                value: "b".to_string(),
            },
        ];

        assert_eq!(write_records(&path, &rows).unwrap(), 2);
        let back: Vec<Row> = read_records(&path).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/rows.json");
        write_records::<Row, _>(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_records::<Row>(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_read_garbage_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        fs::write(&path, "not json").unwrap();
        let result = read_records::<Row>(&path);
        assert!(matches!(result, Err(StorageError::Malformed { .. })));
    }

    #[test]
    fn test_read_other_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        fs::write(&path, r#"{"version": 7, "records": []}"#).unwrap();
        let result = read_records::<Row>(&path);
        assert!(matches!(
            result,
            Err(StorageError::UnsupportedVersion { found: 7, .. })
        ));
    }

    #[test]
    fn test_write_into_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_records::<Row, _>(dir.path(), &[]);
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
