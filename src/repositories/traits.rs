use crate::error::RepositoryResult;
use crate::repositories::store;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Shared persistence shape of the address book and the note book.
///
/// Implementors expose their records for writing and accept a full
/// replacement on load; `save` and `load` are provided on top of the JSON
/// store.
pub trait PersistentRepository {
    /// The record type written to the store.
    type Record: Serialize + DeserializeOwned;

    /// Human-readable repository kind used in log events.
    const KIND: &'static str;

    /// Records in the order they should be written.
    fn records(&self) -> Vec<&Self::Record>;

    /// Replace the whole repository content.
    fn replace_all(&mut self, records: Vec<Self::Record>);

    /// Number of records held.
    fn len(&self) -> usize;

    /// Whether the repository holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write every record to `path`.
    fn save(&self, path: &Path) -> RepositoryResult<usize> {
        let written = store::write_records(path, self.records())?;
        tracing::info!(kind = Self::KIND, path = %path.display(), records = written, "Repository saved");
        Ok(written)
    }

    /// Replace the content with the records stored at `path`.
    ///
    /// On any error the repository is left unchanged.
    fn load(&mut self, path: &Path) -> RepositoryResult<usize> {
        let records = store::read_records::<Self::Record>(path)?;
        self.replace_all(records);
        tracing::info!(kind = Self::KIND, path = %path.display(), records = self.len(), "Repository loaded");
        Ok(self.len())
    }
}
