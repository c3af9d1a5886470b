//! In-memory note filters for text and tag search.
//!
//! # Responsibility
//! - Normalize search input once per query.
//! - Decide whether a single note matches.
//!
//! # Invariants
//! - Text matching is a case-insensitive substring test on note text.
//! - Tag matching is a superset test against lowercase search tags.
//! - An empty tag search matches untagged notes only, not every note.

use crate::model::note::Note;
use std::collections::BTreeSet;

/// Case-insensitive substring query over note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        note.text().to_lowercase().contains(self.needle.as_str())
    }
}

/// Tag filter built from a caller-provided search set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    /// Matches notes without any tags.
    Untagged,
    /// Matches notes carrying every listed tag (logical AND).
    AllOf(BTreeSet<String>),
}

impl TagFilter {
    /// Builds a filter from raw search tags, lowercasing and deduplicating them.
    pub fn from_search_tags(search_tags: Vec<String>) -> Self {
        if search_tags.is_empty() {
            return Self::Untagged;
        }
        Self::AllOf(search_tags.iter().map(|tag| tag.to_lowercase()).collect())
    }

    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Self::Untagged => note.tags().is_empty(),
            Self::AllOf(required) => required.is_subset(note.tags()),
        }
    }
}
