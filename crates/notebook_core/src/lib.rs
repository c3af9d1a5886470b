//! Core domain logic for the in-memory notebook.
//! This crate owns every note invariant; callers only go through the repository.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;

pub use logging::{
    default_log_level, init_logging, logging_status, start_logging, LogConfig, LogLevel,
};
pub use model::note::{normalize_tag, Note, NoteId, NoteResult, NoteValidationError};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository};
pub use search::filter::{TagFilter, TextQuery};

/// Minimal health-check API for smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
