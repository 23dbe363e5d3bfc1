//! Note model: free text plus a set of tags.

use crate::error::RepositoryError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A note in the note book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Note {
    /// The note body
    pub text: String,

    /// Tags associated with the note
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Note {
    /// Create a new note without tags.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Add tags, ignoring ones already present.
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(
            tags.into_iter()
                .map(Into::into)
                .filter(|tag: &String| !tag.is_empty()),
        );
    }

    /// Builder-style variant of [`Note::add_tags`].
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_tags(tags);
        self
    }

    /// Split a raw line of whitespace-separated tags.
    pub fn parse_tags(line: &str) -> BTreeSet<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    /// Whether any tag equals `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Whether the text contains `pattern`, ignoring case.
    pub fn text_contains(&self, pattern: &str) -> bool {
        self.text.to_lowercase().contains(&pattern.to_lowercase())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = self.tags.iter().cloned().collect::<Vec<_>>().join(", ");
        write!(f, "Note: {}\ntags: {}", self.text, tags)
    }
}

/// Handle to a note stored in a [`NoteBook`](crate::repositories::NoteBook).
///
/// Handles are issued by the note book, never reused, and not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(pub(crate) u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A note together with its handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub(crate) id: NoteId,
    pub(crate) note: Note,
}

impl NoteEntry {
    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn note(&self) -> &Note {
        &self.note
    }
}

/// Key used by [`NoteBook::sort_notes`](crate::repositories::NoteBook::sort_notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteSortKey {
    /// Tag set (lexicographic), then text
    #[default]
    Tags,
    /// Text, then tag set
    Text,
}

impl NoteSortKey {
    /// Compare two notes under this key.
    pub fn compare(&self, a: &Note, b: &Note) -> Ordering {
        match self {
            NoteSortKey::Tags => a.tags.cmp(&b.tags).then_with(|| a.text.cmp(&b.text)),
            NoteSortKey::Text => a.text.cmp(&b.text).then_with(|| a.tags.cmp(&b.tags)),
        }
    }
}

impl fmt::Display for NoteSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSortKey::Tags => f.write_str("tags"),
            NoteSortKey::Text => f.write_str("text"),
        }
    }
}

impl FromStr for NoteSortKey {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tags" | "tag" => Ok(NoteSortKey::Tags),
            "text" => Ok(NoteSortKey::Text),
            other => Err(RepositoryError::InvalidArgument(format!(
                "unknown note sort key `{}` (expected tags or text)",
                other
            ))),
        }
    }
}

/// What [`NoteBook::find`](crate::repositories::NoteBook::find) matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    /// Exact, case-insensitive tag match
    Tags,
    /// Case-insensitive substring of the text
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_new() {
        let note = Note::new("Buy milk");
        assert_eq!(note.text, "Buy milk");
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_note_tags_are_a_set() {
        let note = Note::new("x").with_tags(["home", "todo", "home", ""]);
        assert_eq!(note.tags.len(), 2);
    }

    #[test]
    fn test_parse_tags() {
        let tags = Note::parse_tags("  work   urgent ");
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["urgent", "work"]);
        assert!(Note::parse_tags("").is_empty());
    }

    #[test]
    fn test_has_tag_exact_case_insensitive() {
        let note = Note::new("x").with_tags(["Work"]);
        assert!(note.has_tag("work"));
        assert!(!note.has_tag("wor"));
    }

    #[test]
    fn test_text_contains() {
        let note = Note::new("Call the Plumber");
        assert!(note.text_contains("plumber"));
        assert!(!note.text_contains("electrician"));
    }

    #[test]
    fn test_sort_key_compare() {
        let a = Note::new("b").with_tags(["alpha"]);
        let b = Note::new("a").with_tags(["beta"]);
        assert_eq!(NoteSortKey::Tags.compare(&a, &b), Ordering::Less);
        assert_eq!(NoteSortKey::Text.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_untagged_sorts_first_by_tags() {
        let untagged = Note::new("z");
        let tagged = Note::new("a").with_tags(["a"]);
        assert_eq!(NoteSortKey::Tags.compare(&untagged, &tagged), Ordering::Less);
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("TEXT".parse::<NoteSortKey>().unwrap(), NoteSortKey::Text);
        assert_eq!("tags".parse::<NoteSortKey>().unwrap(), NoteSortKey::Tags);
        assert!("date".parse::<NoteSortKey>().is_err());
    }

    #[test]
    fn test_note_missing_tags_deserializes() {
        let note: Note = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert!(note.tags.is_empty());
    }
}
