//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `voxnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::cell::RefCell;
use std::rc::Rc;
use voxnote_core::{
    default_log_level, init_logging, LogNotifier, NoteComposer, UnsupportedEngine,
};

fn main() {
    let log_dir = std::env::temp_dir().join("voxnote-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("logging init failed: {err}");
        }
    }

    let created = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&created);

    // Headless probe: type a note, save it, confirm the callback fired.
    let mut composer =
        NoteComposer::new(UnsupportedEngine, LogNotifier, move |content: String| {
            sink.borrow_mut().push(content)
        });
    composer.content_changed("voxnote smoke note");
    if composer.save().is_err() {
        eprintln!("smoke note failed to save");
    }

    println!("voxnote_core version={}", voxnote_core::core_version());
    println!("notes_created={}", created.borrow().len());
}
