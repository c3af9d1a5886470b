//! Search entry points.
//!
//! # Responsibility
//! - Keep query normalization and match rules out of the repository.

pub mod filter;
