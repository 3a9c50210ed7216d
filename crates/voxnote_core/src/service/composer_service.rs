//! Note composer use-case service.
//!
//! # Responsibility
//! - Drive the onboarding/editing/recording mode machine.
//! - Own the live dictation session and route its streamed events into the
//!   draft.
//! - Hand finished notes to the parent through the save callback.
//!
//! # Invariants
//! - The save callback fires exactly once per successful save, never for an
//!   empty draft.
//! - `Recording` is entered only after the engine probe succeeds and the
//!   session slot has been claimed.
//! - Events from a displaced or stopped session never reach the draft.

use crate::dictation::engine::{
    validate_locale, DictationConfig, EngineError, LocaleError, SpeechEngine,
};
use crate::dictation::session::DictationSession;
use crate::dictation::session_slot::{global_session_slot, SessionSlot};
use crate::model::draft::{ComposerMode, DraftNote};
use crate::model::transcript::DictationEvent;
use crate::notify::Notifier;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};

/// Warning shown when saving an empty draft.
pub const EMPTY_DRAFT_TOAST: &str = "Note was not created, because it had no content.";
/// Confirmation shown after a successful save.
pub const NOTE_CREATED_TOAST: &str = "Note created successfully";
/// Alert shown when the host has no speech capability.
pub const DICTATION_UNAVAILABLE_ALERT: &str =
    "Unfortunately, this device does not support speech recognition.";

/// Composer operation errors.
#[derive(Debug)]
pub enum ComposerError {
    /// Save was attempted with no content.
    EmptyDraft,
    /// The host reported no speech capability.
    DictationUnavailable { engine_id: String },
    /// The configured locale tag is rejected before any stream is opened.
    InvalidLocale(LocaleError),
    /// The engine accepted the probe but failed to open a stream.
    Engine(EngineError),
}

impl Display for ComposerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDraft => write!(f, "draft note has no content"),
            Self::DictationUnavailable { engine_id } => {
                write!(f, "speech recognition is unavailable for engine `{engine_id}`")
            }
            Self::InvalidLocale(err) => write!(f, "dictation config rejected: {err}"),
            Self::Engine(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ComposerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLocale(err) => Some(err),
            Self::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EngineError> for ComposerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<LocaleError> for ComposerError {
    fn from(value: LocaleError) -> Self {
        Self::InvalidLocale(value)
    }
}

/// Callback invoked once per successfully saved note.
pub type NoteCreatedCallback = Box<dyn FnMut(String)>;

/// Note composer facade over the draft, the engine seam, and the host
/// notifier.
pub struct NoteComposer<E: SpeechEngine, N: Notifier> {
    draft: DraftNote,
    engine: E,
    notifier: N,
    on_note_created: NoteCreatedCallback,
    config: DictationConfig,
    session: Option<DictationSession>,
    slot: Arc<Mutex<SessionSlot>>,
}

impl<E: SpeechEngine, N: Notifier> NoteComposer<E, N> {
    /// Creates a composer bound to the process-global session slot.
    pub fn new(engine: E, notifier: N, on_note_created: impl FnMut(String) + 'static) -> Self {
        Self::with_session_slot(engine, notifier, on_note_created, global_session_slot())
    }

    /// Creates a composer using a caller-provided session slot.
    ///
    /// Used by hosts that scope dictation narrower than the process, and by
    /// tests that need isolation from the global slot.
    pub fn with_session_slot(
        engine: E,
        notifier: N,
        on_note_created: impl FnMut(String) + 'static,
        slot: Arc<Mutex<SessionSlot>>,
    ) -> Self {
        Self {
            draft: DraftNote::new(),
            engine,
            notifier,
            on_note_created: Box::new(on_note_created),
            config: DictationConfig::default(),
            session: None,
            slot,
        }
    }

    /// Replaces the stream parameters used for future sessions.
    ///
    /// The locale tag is validated when recording starts, not here, so
    /// hosts can stage config before probing the capability.
    pub fn with_dictation_config(mut self, config: DictationConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active composer mode.
    pub fn mode(&self) -> ComposerMode {
        self.draft.mode()
    }

    /// Returns the current draft content.
    pub fn content(&self) -> &str {
        self.draft.content()
    }

    /// "Use text" action from the onboarding prompt.
    pub fn begin_text_entry(&mut self) {
        self.draft.begin_editing();
    }

    /// Applies one manual replacement of the draft content.
    ///
    /// Emptying the content returns the composer to `Onboarding`.
    pub fn content_changed(&mut self, text: impl Into<String>) {
        self.draft.apply_manual_edit(text);
    }

    /// Hands the draft to the parent.
    ///
    /// Empty drafts produce a warning toast and leave everything untouched.
    /// On success the callback fires exactly once, the draft resets, and
    /// the composer returns to `Onboarding`.
    pub fn save(&mut self) -> Result<(), ComposerError> {
        if self.draft.is_empty() {
            warn!("event=note_save_rejected module=composer status=warn reason=empty_draft");
            self.notifier.toast_warning(EMPTY_DRAFT_TOAST);
            return Err(ComposerError::EmptyDraft);
        }

        let content = self.draft.take_content();
        info!(
            "event=note_created module=composer status=ok chars={}",
            content.chars().count()
        );
        (self.on_note_created)(content);
        self.notifier.toast_success(NOTE_CREATED_TOAST);
        Ok(())
    }

    /// "Record" action: probes the capability and opens a stream.
    ///
    /// Without a capability the host gets a blocking alert and the mode
    /// stays out of `Recording`. The configured locale is validated before
    /// any stream is requested. Claiming the slot displaces any session
    /// another composer still holds.
    pub fn start_recording(&mut self) -> Result<(), ComposerError> {
        if !self.engine.is_available() {
            warn!(
                "event=dictation_unavailable module=composer status=warn engine={}",
                self.engine.engine_id()
            );
            self.notifier.blocking_alert(DICTATION_UNAVAILABLE_ALERT);
            return Err(ComposerError::DictationUnavailable {
                engine_id: self.engine.engine_id().to_string(),
            });
        }

        if let Err(err) = validate_locale(&self.config.locale) {
            warn!(
                "event=dictation_config_rejected module=composer status=warn reason={err}"
            );
            return Err(ComposerError::InvalidLocale(err));
        }

        let session = DictationSession::new(self.config.clone());
        let session_id = session.id();
        self.lock_slot().activate(session_id);

        if let Err(err) = self.engine.start(&self.config) {
            // Claiming the slot precedes the stream open, so roll it back.
            self.lock_slot().release(session_id);
            error!(
                "event=dictation_start_failed module=composer status=error engine={} details={err}",
                self.engine.engine_id()
            );
            return Err(ComposerError::Engine(err));
        }

        info!(
            "event=dictation_started module=composer status=ok session={session_id} engine={} locale={}",
            self.engine.engine_id(),
            self.config.locale
        );
        self.session = Some(session);
        self.draft.begin_recording();
        Ok(())
    }

    /// Stops the live stream, keeping whatever text was dictated.
    pub fn stop_recording(&mut self) {
        self.engine.stop();
        if let Some(mut session) = self.session.take() {
            session.stop();
            self.lock_slot().release(session.id());
            info!(
                "event=dictation_stopped module=composer status=ok session={}",
                session.id()
            );
        }
        self.draft.finish_recording();
    }

    /// Routes one streamed engine event into the live session.
    ///
    /// Events are dropped when no session is live or when the slot has
    /// moved on to a newer session.
    pub fn handle_dictation_event(&mut self, event: DictationEvent) {
        let Some(session_id) = self.session.as_ref().map(DictationSession::id) else {
            return;
        };

        if !self.lock_slot().owns(session_id) {
            // Displaced by a newer session; drop the stale stream. The host
            // still drives stop_recording to leave Recording mode.
            debug!(
                "event=dictation_event_dropped module=composer status=ok reason=displaced session={session_id}"
            );
            self.session = None;
            return;
        }

        let mut stream_stopped = false;
        if let Some(session) = self.session.as_mut() {
            if let Some(text) = session.handle_event(event) {
                self.draft.apply_transcript(text);
            }
            stream_stopped = session.is_stopped();
        }

        if stream_stopped {
            // Engine ended the stream on its own.
            self.session = None;
            self.lock_slot().release(session_id);
            self.draft.finish_recording();
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, SessionSlot> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
