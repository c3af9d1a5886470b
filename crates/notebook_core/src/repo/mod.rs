//! Repository layer for notes.
//!
//! # Responsibility
//! - Define the use-case oriented note access contract.
//! - Hold the in-memory store behind that contract.
//!
//! # Invariants
//! - Repository writes go through `Note` validation before storing.
//! - Missing ids are reported as `None`/`false`, never as errors.

pub mod note_repo;
