//! Live dictation session state.
//!
//! # Responsibility
//! - Track one recognition stream: stable id, running segment list,
//!   stopped flag.
//! - Apply streamed events and report the text the draft should show.
//!
//! # Invariants
//! - Events arriving after `stop` never change the transcript.
//! - Stream errors are logged as metadata only and swallowed.

use crate::dictation::engine::DictationConfig;
use crate::model::transcript::{assemble_transcript, DictationEvent, TranscriptSegment};
use log::{debug, error, info};
use uuid::Uuid;

/// Stable identifier for one dictation session.
pub type SessionId = Uuid;

/// One live speech-recognition stream.
#[derive(Debug, Clone)]
pub struct DictationSession {
    id: SessionId,
    config: DictationConfig,
    segments: Vec<TranscriptSegment>,
    stopped: bool,
}

impl DictationSession {
    /// Creates a fresh session with a generated id and empty transcript.
    pub fn new(config: DictationConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            segments: Vec::new(),
            stopped: false,
        }
    }

    /// Returns the stable session id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the stream parameters this session was opened with.
    pub fn config(&self) -> &DictationConfig {
        &self.config
    }

    /// Returns the currently assembled transcript.
    pub fn transcript(&self) -> String {
        assemble_transcript(&self.segments)
    }

    /// Returns whether the stream has been terminated.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Applies one streamed event.
    ///
    /// Returns the new draft text when the event changed the transcript,
    /// `None` otherwise. Events on a stopped session are dropped.
    pub fn handle_event(&mut self, event: DictationEvent) -> Option<String> {
        if self.stopped {
            debug!(
                "event=dictation_event_dropped module=dictation status=ok reason=stopped session={}",
                self.id
            );
            return None;
        }

        match event {
            DictationEvent::Result { segments } => {
                self.segments = segments;
                Some(self.transcript())
            }
            DictationEvent::Error { code, message } => {
                // Stream errors are not user-visible failures; the session
                // keeps whatever transcript it already has.
                error!(
                    "event=dictation_error module=dictation status=error session={} code={} message_chars={}",
                    self.id,
                    code,
                    message.chars().count()
                );
                None
            }
            DictationEvent::Ended => {
                self.stopped = true;
                info!(
                    "event=dictation_ended module=dictation status=ok session={}",
                    self.id
                );
                None
            }
        }
    }

    /// Terminates the stream. Further events are ignored.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
