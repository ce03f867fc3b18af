//! On-disk snapshot of the whole address book.
//!
//! The file is a versioned JSON document:
//!
//! ```json
//! {"version": 1, "records": [{"name": "Alice", "phones": ["1234567890"], "birthday": "15.03.2000"}]}
//! ```
//!
//! Records are stored in book order. Phones and birthdays are re-validated
//! when read back. Saves go through a temporary file that is renamed over the
//! target, so a crash mid-write leaves the previous snapshot intact.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Record};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    records: &'a [Record],
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

#[derive(Deserialize)]
struct SnapshotIn {
    records: Vec<Record>,
}

pub fn encode(book: &AddressBook) -> BookResult<String> {
    let doc = SnapshotOut {
        version: SNAPSHOT_VERSION,
        records: book.records(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn decode(content: &str) -> BookResult<AddressBook> {
    let probe: VersionProbe = serde_json::from_str(content)?;
    if probe.version != SNAPSHOT_VERSION {
        return Err(BookError::UnsupportedSnapshot {
            version: probe.version,
        });
    }
    let doc: SnapshotIn = serde_json::from_str(content)?;
    Ok(AddressBook::from_records(doc.records))
}

/// Reads the snapshot at `path`. A missing file yields an empty book; any
/// other failure is returned.
pub fn load(path: &Path) -> BookResult<AddressBook> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no snapshot found, starting with an empty book");
            return Ok(AddressBook::new());
        }
        Err(e) => return Err(e.into()),
    };

    let book = decode(&content)?;
    info!(path = %path.display(), records = book.len(), "snapshot loaded");
    Ok(book)
}

/// Writes the whole book to `path`, creating parent directories as needed.
pub fn save(path: &Path, book: &AddressBook) -> BookResult<()> {
    let content = encode(book)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "addressbook".to_string());
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    fs::write(&tmp_path, content)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    debug!(path = %path.display(), records = book.len(), "snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_unknown_version() {
        let err = decode(r#"{"version": 99, "records": []}"#).unwrap_err();
        assert!(matches!(err, BookError::UnsupportedSnapshot { version: 99 }));
    }

    #[test]
    fn decode_rejects_invalid_phone() {
        let content = r#"{"version": 1, "records": [{"name": "Alice", "phones": ["12"], "birthday": null}]}"#;
        assert!(decode(content).is_err());
    }

    #[test]
    fn decode_allows_missing_optional_fields() {
        let book = decode(r#"{"version": 1, "records": [{"name": "Alice"}]}"#).unwrap();
        let alice = book.find("Alice").unwrap();
        assert!(alice.phones().is_empty());
        assert!(alice.birthday().is_none());
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode("not json"), Err(BookError::Json(_))));
    }
}
