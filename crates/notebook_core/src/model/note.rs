//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record owned by the repository.
//! - Validate title/tag input and normalize tags to lowercase.
//!
//! # Invariants
//! - `title` is always present; absent titles are rejected.
//! - Every stored tag is non-empty, lowercase and unique.
//! - `id` and `creation_date` never change after construction.
//! - Equality and hashing depend on `id` only.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Repository-assigned note identifier. Always greater than zero.
pub type NoteId = u64;

/// Result type for note validation paths.
pub type NoteResult<T> = Result<T, NoteValidationError>;

/// Invalid-argument failures raised by note construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title was absent on construction or update.
    MissingTitle,
    /// Tag value was an empty string.
    EmptyTag,
    /// Identifier `0` is reserved and never assigned.
    ZeroId,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title cannot be absent"),
            Self::EmptyTag => write!(f, "tag cannot be empty"),
            Self::ZeroId => write!(f, "note id must be greater than zero"),
        }
    }
}

impl Error for NoteValidationError {}

/// Single user-authored record with title, text, tags and creation date.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    id: NoteId,
    title: String,
    text: String,
    /// Serialized as ISO `YYYY-MM-DD`.
    creation_date: NaiveDate,
    tags: BTreeSet<String>,
}

impl Note {
    /// Creates a note dated today (local time zone) with an empty tag set.
    ///
    /// Absent `text` is stored as an empty string.
    ///
    /// # Errors
    /// - `MissingTitle` when `title` is `None`.
    /// - `ZeroId` when `id == 0`.
    pub fn new(id: NoteId, title: Option<&str>, text: Option<&str>) -> NoteResult<Self> {
        Self::with_creation_date(id, title, text, Local::now().date_naive())
    }

    /// Same as [`Note::new`] with a fixed creation date instead of today.
    #[doc(hidden)]
    pub fn with_creation_date(
        id: NoteId,
        title: Option<&str>,
        text: Option<&str>,
        creation_date: NaiveDate,
    ) -> NoteResult<Self> {
        if id == 0 {
            return Err(NoteValidationError::ZeroId);
        }
        let title = title.ok_or(NoteValidationError::MissingTitle)?;

        Ok(Self {
            id,
            title: title.to_string(),
            text: text.unwrap_or_default().to_string(),
            creation_date,
            tags: BTreeSet::new(),
        })
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Read-only view of the lowercase tag set.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Case-insensitive tag membership check.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }

    /// Replaces the title. Rejects `None` and leaves the note untouched.
    pub fn set_title(&mut self, title: Option<&str>) -> NoteResult<()> {
        let title = title.ok_or(NoteValidationError::MissingTitle)?;
        self.title = title.to_string();
        Ok(())
    }

    /// Replaces the text. `None` clears it to an empty string.
    pub fn set_text(&mut self, text: Option<&str>) {
        self.text = text.unwrap_or_default().to_string();
    }

    /// Adds one tag in lowercase form.
    ///
    /// Returns `Ok(false)` when the tag was already present.
    pub fn add_tag(&mut self, tag: &str) -> NoteResult<bool> {
        let normalized = normalize_tag(tag)?;
        Ok(self.tags.insert(normalized))
    }

    /// Removes one tag, ignoring case.
    ///
    /// Returns `Ok(false)` when the tag was not present.
    pub fn remove_tag(&mut self, tag: &str) -> NoteResult<bool> {
        let normalized = normalize_tag(tag)?;
        Ok(self.tags.remove(&normalized))
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Note {{")?;
        writeln!(f, "   id={}", self.id)?;
        writeln!(f, "   creation_date={}", self.creation_date)?;
        writeln!(f, "   title='{}'", self.title)?;
        writeln!(f, "   text='{}'", self.text)?;
        let tags = self.tags.iter().map(String::as_str).collect::<Vec<_>>();
        writeln!(f, "   tags=[{}]", tags.join(", "))?;
        write!(f, "}}")
    }
}

/// Normalizes one tag value: rejects empty input, lowercases the rest.
///
/// Whitespace is kept as-is, so `" "` is a valid (if odd) tag.
pub fn normalize_tag(tag: &str) -> NoteResult<String> {
    if tag.is_empty() {
        return Err(NoteValidationError::EmptyTag);
    }
    Ok(tag.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{normalize_tag, Note, NoteValidationError};
    use chrono::NaiveDate;

    #[test]
    fn normalize_tag_lowercases_unicode() {
        assert_eq!(normalize_tag("ТЕСТ").unwrap(), "тест");
        assert_eq!(normalize_tag("Java").unwrap(), "java");
    }

    #[test]
    fn normalize_tag_rejects_empty_value() {
        assert_eq!(normalize_tag(""), Err(NoteValidationError::EmptyTag));
    }

    #[test]
    fn display_lists_every_field() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 13).unwrap();
        let mut note = Note::with_creation_date(7, Some("Home"), Some("go home"), date).unwrap();
        note.add_tag("Trip").unwrap();
        note.add_tag("errand").unwrap();

        let rendered = note.to_string();
        assert!(rendered.starts_with("Note {\n"));
        assert!(rendered.contains("   id=7\n"));
        assert!(rendered.contains("   creation_date=2026-02-13\n"));
        assert!(rendered.contains("   title='Home'\n"));
        assert!(rendered.contains("   text='go home'\n"));
        assert!(rendered.contains("   tags=[errand, trip]\n"));
        assert!(rendered.ends_with('}'));
    }
}
