//! Note/tag repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own every note and assign identifiers.
//! - Provide CRUD, tag mutation and search APIs over the owned notes.
//!
//! # Invariants
//! - Ids start at 1, grow by one per successful add, and are never reused.
//! - A rejected add stores nothing and does not consume an id.
//! - Unknown ids are not errors: reads return `None`, writes return `false`.
//! - Listing order is insertion order.

use crate::model::note::{Note, NoteId, NoteResult, NoteValidationError};
use crate::search::filter::{TagFilter, TextQuery};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Repository interface for notes/tags operations.
pub trait NoteRepository {
    /// Creates one note with the next id and the given tags.
    fn add_note(
        &mut self,
        title: Option<&str>,
        text: Option<&str>,
        tags: Option<Vec<String>>,
    ) -> NoteResult<&Note>;
    /// Gets one note by id.
    fn get_note_by_id(&self, id: NoteId) -> Option<&Note>;
    /// Lists every note in insertion order.
    fn get_all_notes(&self) -> Vec<&Note>;
    /// Replaces title and text. Returns `Ok(false)` for an unknown id.
    fn update_note_text(
        &mut self,
        id: NoteId,
        new_title: Option<&str>,
        new_text: Option<&str>,
    ) -> NoteResult<bool>;
    /// Adds one tag. Returns `Ok(false)` for an unknown id or an existing tag.
    fn add_tag_to_note(&mut self, id: NoteId, tag: &str) -> NoteResult<bool>;
    /// Removes one tag. Returns `Ok(false)` for an unknown id or a missing tag,
    /// including the empty string, which is never stored.
    fn remove_tag_from_note(&mut self, id: NoteId, tag: &str) -> NoteResult<bool>;
    /// Deletes one note and reports whether it existed.
    fn delete_note(&mut self, id: NoteId) -> bool;
    /// Case-insensitive substring search over note text.
    fn find_notes_by_text(&self, query: &str) -> Vec<&Note>;
    /// Notes carrying all search tags; `Some(vec![])` selects untagged notes.
    fn find_notes_by_tags(&self, search_tags: Option<Vec<String>>) -> Vec<&Note>;
    /// Union of every note's tags.
    fn get_all_tags(&self) -> BTreeSet<String>;
}

/// Process-local note repository. Nothing survives the owning value.
#[derive(Debug)]
pub struct InMemoryNoteRepository {
    // BTreeMap keyed by monotonically increasing ids iterates in insertion order.
    notes: BTreeMap<NoteId, Note>,
    next_id: NoteId,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for InMemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn add_note(
        &mut self,
        title: Option<&str>,
        text: Option<&str>,
        tags: Option<Vec<String>>,
    ) -> NoteResult<&Note> {
        let id = self.next_id;
        let mut note = Note::new(id, title, text).map_err(|err| rejected("note_add", err))?;
        for tag in tags.unwrap_or_default() {
            note.add_tag(&tag).map_err(|err| rejected("note_add", err))?;
        }

        self.next_id += 1;
        debug!(
            "event=note_add module=repo status=ok note_id={} tag_count={}",
            id,
            note.tags().len()
        );
        Ok(self.notes.entry(id).or_insert(note))
    }

    fn get_note_by_id(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    fn get_all_notes(&self) -> Vec<&Note> {
        self.notes.values().collect()
    }

    fn update_note_text(
        &mut self,
        id: NoteId,
        new_title: Option<&str>,
        new_text: Option<&str>,
    ) -> NoteResult<bool> {
        let Some(note) = self.notes.get_mut(&id) else {
            debug!("event=note_update module=repo status=not_found note_id={id}");
            return Ok(false);
        };

        note.set_title(new_title).map_err(|err| rejected("note_update", err))?;
        note.set_text(new_text);
        debug!("event=note_update module=repo status=ok note_id={id}");
        Ok(true)
    }

    fn add_tag_to_note(&mut self, id: NoteId, tag: &str) -> NoteResult<bool> {
        let Some(note) = self.notes.get_mut(&id) else {
            debug!("event=note_tag_add module=repo status=not_found note_id={id}");
            return Ok(false);
        };

        let added = note
            .add_tag(tag)
            .map_err(|err| rejected("note_tag_add", err))?;
        debug!("event=note_tag_add module=repo status=ok note_id={id} changed={added}");
        Ok(added)
    }

    fn remove_tag_from_note(&mut self, id: NoteId, tag: &str) -> NoteResult<bool> {
        let Some(note) = self.notes.get_mut(&id) else {
            debug!("event=note_tag_remove module=repo status=not_found note_id={id}");
            return Ok(false);
        };
        if !note.has_tag(tag) {
            debug!("event=note_tag_remove module=repo status=ok note_id={id} changed=false");
            return Ok(false);
        }

        let removed = note
            .remove_tag(tag)
            .map_err(|err| rejected("note_tag_remove", err))?;
        debug!("event=note_tag_remove module=repo status=ok note_id={id} changed={removed}");
        Ok(removed)
    }

    fn delete_note(&mut self, id: NoteId) -> bool {
        let existed = self.notes.remove(&id).is_some();
        debug!("event=note_delete module=repo note_id={id} existed={existed}");
        existed
    }

    fn find_notes_by_text(&self, query: &str) -> Vec<&Note> {
        let query = TextQuery::new(query);
        self.notes
            .values()
            .filter(|note| query.matches(note))
            .collect()
    }

    fn find_notes_by_tags(&self, search_tags: Option<Vec<String>>) -> Vec<&Note> {
        let Some(search_tags) = search_tags else {
            return Vec::new();
        };

        let filter = TagFilter::from_search_tags(search_tags);
        self.notes
            .values()
            .filter(|note| filter.matches(note))
            .collect()
    }

    fn get_all_tags(&self) -> BTreeSet<String> {
        self.notes
            .values()
            .flat_map(|note| note.tags().iter().cloned())
            .collect()
    }
}

fn rejected(event: &str, err: NoteValidationError) -> NoteValidationError {
    warn!("event={event} module=repo status=rejected reason={err:?}");
    err
}
