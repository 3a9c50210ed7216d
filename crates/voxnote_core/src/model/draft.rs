//! Draft note domain model.
//!
//! # Responsibility
//! - Hold the in-memory note body being composed and its active UI mode.
//! - Enforce mode transitions driven by edits, dictation, and save.
//!
//! # Invariants
//! - A manual edit that empties the content always lands in `Onboarding`.
//! - `Recording` is entered and left only through the dedicated helpers;
//!   transcript updates never change the mode on their own.
//! - `clear` and `take_content` leave the draft empty in `Onboarding`.

use serde::{Deserialize, Serialize};

/// Which affordance of the composer is currently active.
///
/// Serialized snake_case so host UIs can render mode directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposerMode {
    /// Initial prompt offering "record" or "use text".
    #[default]
    Onboarding,
    /// Manual text entry is active.
    Editing,
    /// A dictation session is live and streaming transcript updates.
    Recording,
}

/// In-memory, unsaved note text and its UI mode.
///
/// The draft does not outlive the composer interaction; it is handed off
/// through the save callback and reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftNote {
    content: String,
    mode: ComposerMode,
}

impl DraftNote {
    /// Creates an empty draft in `Onboarding`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current note body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the active composer mode.
    pub fn mode(&self) -> ComposerMode {
        self.mode
    }

    /// Returns whether the draft has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Switches from the onboarding prompt to manual text entry.
    ///
    /// No-op while recording; the live session owns the mode until stopped.
    pub fn begin_editing(&mut self) {
        if self.mode != ComposerMode::Recording {
            self.mode = ComposerMode::Editing;
        }
    }

    /// Applies one full replacement of the content from a manual edit.
    ///
    /// Emptying the content returns the draft to `Onboarding`.
    pub fn apply_manual_edit(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.mode = if self.content.is_empty() {
            ComposerMode::Onboarding
        } else {
            ComposerMode::Editing
        };
    }

    /// Replaces the content with an assembled transcript.
    ///
    /// Mode is left untouched: dictation updates arrive while `Recording`
    /// and must not flip the draft out of it.
    pub fn apply_transcript(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    /// Enters `Recording`.
    pub fn begin_recording(&mut self) {
        self.mode = ComposerMode::Recording;
    }

    /// Leaves `Recording`, keeping whatever text was dictated.
    ///
    /// Lands in `Editing` when text survived the session, `Onboarding`
    /// otherwise.
    pub fn finish_recording(&mut self) {
        self.mode = if self.content.is_empty() {
            ComposerMode::Onboarding
        } else {
            ComposerMode::Editing
        };
    }

    /// Resets to the initial onboarding state with no content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.mode = ComposerMode::Onboarding;
    }

    /// Consumes the content for hand-off and resets the draft.
    pub fn take_content(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.mode = ComposerMode::Onboarding;
        content
    }
}
