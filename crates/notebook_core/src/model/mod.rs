//! Domain model for the notebook.
//!
//! # Responsibility
//! - Define the note record and its validation rules.
//!
//! # Invariants
//! - Every note is identified by a repository-assigned `NoteId` greater than zero.
//! - Tags are stored lowercase; lookups are case-insensitive.

pub mod note;
