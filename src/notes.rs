//! In-memory note storage.
//!
//! The store owns every note and the ID counter. IDs are a process-wide
//! monotonically increasing integer rendered as a string; an ID is
//! assigned exactly once and never reused, even after the note it
//! identified is deleted.
//!
//! There is deliberately no update operation: notes are created, read,
//! listed and deleted, nothing else.

use chrono::Local;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by note store operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NoteError {
    /// No note exists with the requested ID.
    #[error("Note with ID {id} not found")]
    NotFound {
        /// The ID that was looked up.
        id: String,
    },

    /// A required field was empty at creation time.
    #[error("Note {field} must not be empty")]
    Empty {
        /// Name of the offending field (`title` or `content`).
        field: &'static str,
    },
}

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Stable identifier, an integer rendered as a string.
    pub id: String,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Insertion-ordered note storage with monotonic ID allocation.
#[derive(Debug)]
pub struct NoteStore {
    /// Notes keyed by ID, in creation order.
    notes: IndexMap<String, Note>,
    /// Next ID to hand out. Starts at 1, incremented on every create.
    counter: u64,
}

impl NoteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            notes: IndexMap::new(),
            counter: 1,
        }
    }

    /// Creates a note and returns it.
    ///
    /// The counter advances on every successful call, so IDs are
    /// strictly increasing across the lifetime of the store.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Empty`] if `title` or `content` is empty.
    pub fn create(&mut self, title: &str, content: &str) -> Result<Note, NoteError> {
        if title.is_empty() {
            return Err(NoteError::Empty { field: "title" });
        }
        if content.is_empty() {
            return Err(NoteError::Empty { field: "content" });
        }

        let id = self.counter.to_string();
        self.counter += 1;

        let note = Note {
            id: id.clone(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: Local::now().to_rfc3339(),
        };
        self.notes.insert(id, note.clone());

        Ok(note)
    }

    /// Fetches a note by ID.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::NotFound`] if no note has that ID.
    pub fn get(&self, id: &str) -> Result<&Note, NoteError> {
        self.notes.get(id).ok_or_else(|| NoteError::NotFound {
            id: id.to_string(),
        })
    }

    /// Returns all notes in creation order.
    pub fn list(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// Removes a note by ID and returns it.
    ///
    /// Deletion is terminal: the ID is never reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::NotFound`] if no note has that ID.
    pub fn delete(&mut self, id: &str) -> Result<Note, NoteError> {
        // shift_remove keeps the remaining notes in creation order.
        self.notes
            .shift_remove(id)
            .ok_or_else(|| NoteError::NotFound {
                id: id.to_string(),
            })
    }

    /// Number of currently stored notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = NoteStore::new();
        let a = store.create("first", "a").unwrap();
        let b = store.create("second", "b").unwrap();
        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
    }

    #[test]
    fn create_rejects_empty_title() {
        let mut store = NoteStore::new();
        let err = store.create("", "body").unwrap_err();
        assert_eq!(err, NoteError::Empty { field: "title" });
    }

    #[test]
    fn create_rejects_empty_content() {
        let mut store = NoteStore::new();
        let err = store.create("title", "").unwrap_err();
        assert_eq!(err, NoteError::Empty { field: "content" });
    }

    #[test]
    fn failed_create_does_not_consume_id() {
        let mut store = NoteStore::new();
        assert!(store.create("", "body").is_err());
        let note = store.create("title", "body").unwrap();
        assert_eq!(note.id, "1");
    }

    #[test]
    fn get_round_trips_title_and_content() {
        let mut store = NoteStore::new();
        let created = store.create("T", "C").unwrap();
        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched.title, "T");
        assert_eq!(fetched.content, "C");
    }

    #[test]
    fn get_unknown_id_fails() {
        let store = NoteStore::new();
        let err = store.get("999").unwrap_err();
        assert_eq!(
            err,
            NoteError::NotFound {
                id: "999".to_string()
            }
        );
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn delete_then_get_fails() {
        let mut store = NoteStore::new();
        let note = store.create("title", "body").unwrap();
        store.delete(&note.id).unwrap();
        assert!(store.get(&note.id).is_err());
    }

    #[test]
    fn delete_unknown_id_fails() {
        let mut store = NoteStore::new();
        assert!(store.delete("42").is_err());
    }

    #[test]
    fn ids_never_reused_after_delete() {
        let mut store = NoteStore::new();
        let first = store.create("one", "1").unwrap();
        store.delete(&first.id).unwrap();
        let second = store.create("two", "2").unwrap();
        assert_eq!(second.id, "2");
    }

    #[test]
    fn list_preserves_creation_order_across_deletes() {
        let mut store = NoteStore::new();
        store.create("a", "1").unwrap();
        let b = store.create("b", "2").unwrap();
        store.create("c", "3").unwrap();
        store.delete(&b.id).unwrap();

        let ids: Vec<&str> = store.list().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn len_tracks_creates_and_deletes() {
        let mut store = NoteStore::new();
        assert!(store.is_empty());
        store.create("a", "1").unwrap();
        store.create("b", "2").unwrap();
        assert_eq!(store.len(), 2);
        store.delete("1").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn created_at_is_rfc3339() {
        let mut store = NoteStore::new();
        let note = store.create("title", "body").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&note.created_at).is_ok());
    }
}
