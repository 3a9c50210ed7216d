//! Core domain logic for voxnote, a voice-assisted note composer.
//! This crate is the single source of truth for composer invariants.

pub mod dictation;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;

pub use dictation::engine::{
    validate_locale, DictationConfig, EngineError, LocaleError, SpeechEngine, UnsupportedEngine,
    DEFAULT_LOCALE,
};
pub use dictation::session::{DictationSession, SessionId};
pub use dictation::session_slot::{global_session_slot, SessionSlot};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{ComposerMode, DraftNote};
pub use model::transcript::{assemble_transcript, DictationEvent, TranscriptSegment};
pub use notify::{LogNotifier, Notifier};
pub use service::composer_service::{
    ComposerError, NoteComposer, DICTATION_UNAVAILABLE_ALERT, EMPTY_DRAFT_TOAST,
    NOTE_CREATED_TOAST,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
