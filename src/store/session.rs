use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::snapshot;
use crate::error::BookResult;
use crate::model::AddressBook;

/// The running process's address book, bound to its snapshot file.
///
/// Opening loads the snapshot. `close` saves it and reports failures; if a
/// session is dropped without `close` (early return, error, panic unwind)
/// the book is still saved and any failure is logged.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    book: AddressBook,
    closed: bool,
}

impl Session {
    pub fn open(path: impl Into<PathBuf>) -> BookResult<Self> {
        let path = path.into();
        let book = snapshot::load(&path)?;
        info!(path = %path.display(), "session opened");
        Ok(Self {
            path,
            book,
            closed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn save(&self) -> BookResult<()> {
        snapshot::save(&self.path, &self.book)
    }

    pub fn close(mut self) -> BookResult<()> {
        self.closed = true;
        self.save()?;
        info!(path = %self.path.display(), "session closed");
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), error = %e, "failed to save snapshot on drop");
        }
    }
}
