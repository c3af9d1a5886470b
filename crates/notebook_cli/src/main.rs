//! Notebook demo entry point.
//!
//! # Responsibility
//! - Verify `notebook_core` linkage with deterministic probe output.
//! - Start file logging when `NOTEBOOK_LOG_DIR` is set.
//! - Add two demo notes and print them.

use log::info;
use notebook_core::{start_logging, InMemoryNoteRepository, LogConfig, NoteRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(config) = LogConfig::from_env() {
        if let Err(err) = config.and_then(start_logging) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("notebook_core ping={}", notebook_core::ping());
    println!("notebook_core version={}", notebook_core::core_version());

    let mut repo = InMemoryNoteRepository::new();
    for (title, text) in [("Home", "I wanna go Home "), ("Home2", "I am at Home!!!")] {
        if let Err(err) = repo.add_note(Some(title), Some(text), None) {
            eprintln!("failed to add demo note: {err}");
            return ExitCode::FAILURE;
        }
    }

    for note in repo.get_all_notes() {
        info!("event=demo_note_printed module=cli note_id={}", note.id());
        println!("{note}");
    }
    ExitCode::SUCCESS
}
