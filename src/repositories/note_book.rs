use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{Note, NoteEntry, NoteId, NoteSortKey, SearchTarget};
use crate::repositories::traits::PersistentRepository;
use tracing::{debug, info};

/// In-memory ordered note collection.
///
/// Order is insertion order until [`NoteBook::sort_notes`] is called.
#[derive(Debug, Clone, Default)]
pub struct NoteBook {
    entries: Vec<NoteEntry>,
    next_id: u64,
    sort_key: NoteSortKey,
}

impl NoteBook {
    /// Create an empty note book sorted by `sort_key` on request.
    pub fn new(sort_key: NoteSortKey) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            sort_key,
        }
    }

    pub fn sort_key(&self) -> NoteSortKey {
        self.sort_key
    }

    /// Append a note and return its handle.
    pub fn add(&mut self, note: Note) -> NoteId {
        let id = self.issue_id();
        info!(id = %id, tags = note.tags.len(), "Note added");
        self.entries.push(NoteEntry { id, note });
        id
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(NoteEntry::note)
    }

    /// Notes matching `pattern`, in collection order.
    ///
    /// Tags match exactly and text matches as a substring; both ignore case.
    pub fn find(&self, pattern: &str, target: SearchTarget) -> Vec<&NoteEntry> {
        let matches: Vec<&NoteEntry> = self
            .entries
            .iter()
            .filter(|entry| match target {
                SearchTarget::Tags => entry.note.has_tag(pattern),
                SearchTarget::Text => entry.note.text_contains(pattern),
            })
            .collect();
        debug!(pattern = %pattern, ?target, matches = matches.len(), "Note search");
        matches
    }

    /// The first note whose text contains `pattern`.
    pub fn first_match(&self, pattern: &str) -> RepositoryResult<&NoteEntry> {
        self.find(pattern, SearchTarget::Text)
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::NotFound(format!("note matching `{}`", pattern)))
    }

    /// Replace the text of a note.
    pub fn edit_note(&mut self, id: NoteId, text: impl Into<String>) -> RepositoryResult<&Note> {
        let entry = self.entry_mut(id)?;
        entry.note.text = text.into();
        info!(id = %id, "Note edited");
        Ok(&entry.note)
    }

    /// Merge more tags into a note.
    pub fn add_tags<I, S>(&mut self, id: NoteId, tags: I) -> RepositoryResult<&Note>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entry_mut(id)?;
        entry.note.add_tags(tags);
        debug!(id = %id, tags = entry.note.tags.len(), "Note tags updated");
        Ok(&entry.note)
    }

    /// Remove and return a note.
    pub fn delete(&mut self, id: NoteId) -> RepositoryResult<Note> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("note {}", id)))?;
        let removed = self.entries.remove(index);
        info!(id = %id, "Note deleted");
        Ok(removed.note)
    }

    /// Stable sort by the configured key.
    pub fn sort_notes(&mut self) {
        self.sort_notes_by(self.sort_key);
    }

    /// Stable sort by an explicit key.
    pub fn sort_notes_by(&mut self, key: NoteSortKey) {
        self.entries.sort_by(|a, b| key.compare(&a.note, &b.note));
        debug!(?key, notes = self.entries.len(), "Notes sorted");
    }

    /// All notes in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &NoteEntry> {
        self.entries.iter()
    }

    fn entry_mut(&mut self, id: NoteId) -> RepositoryResult<&mut NoteEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("note {}", id)))
    }

    fn issue_id(&mut self) -> NoteId {
        self.next_id += 1;
        NoteId(self.next_id)
    }
}

impl PersistentRepository for NoteBook {
    type Record = Note;
    const KIND: &'static str = "notes";

    fn records(&self) -> Vec<&Note> {
        self.entries.iter().map(NoteEntry::note).collect()
    }

    fn replace_all(&mut self, records: Vec<Note>) {
        let entries: Vec<NoteEntry> = records
            .into_iter()
            .map(|note| NoteEntry {
                id: self.issue_id(),
                note,
            })
            .collect();
        self.entries = entries;
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
