//! Speech engine seam and stream configuration.
//!
//! # Responsibility
//! - Abstract the host speech-to-text capability behind a trait: start,
//!   stop, availability probe. Streamed results come back to the composer
//!   through `NoteComposer::handle_dictation_event`.
//! - Validate locale tags before a stream is requested.
//!
//! # Invariants
//! - `start` is only called after `is_available` returned true.
//! - Config defaults request a continuous, interim-results stream with a
//!   single alternative per result.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Locale requested when the host does not pick one.
pub const DEFAULT_LOCALE: &str = "pt-BR";

// Language subtag plus optional alphanumeric subtags, the shape actually
// accepted by speech engines. Full BCP-47 grammar is out of scope.
static LOCALE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("valid locale regex"));

/// Stream parameters for one dictation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictationConfig {
    /// Recognition locale tag, e.g. `pt-BR`.
    pub locale: String,
    /// Keep recognizing across pauses instead of stopping at the first
    /// final result.
    pub continuous: bool,
    /// Stream interim (not yet finalized) results.
    pub interim_results: bool,
    /// Alternatives requested per result; the composer only reads the
    /// first.
    pub max_alternatives: u8,
}

impl Default for DictationConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

impl DictationConfig {
    /// Creates a default-shaped config for a validated locale.
    pub fn with_locale(locale: impl Into<String>) -> Result<Self, LocaleError> {
        let locale = locale.into();
        validate_locale(&locale)?;
        Ok(Self {
            locale,
            ..Self::default()
        })
    }
}

/// Validates one locale tag against the supported shape.
pub fn validate_locale(value: &str) -> Result<(), LocaleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LocaleError::EmptyLocale);
    }
    if !LOCALE_TAG_RE.is_match(trimmed) {
        return Err(LocaleError::MalformedLocale(value.to_string()));
    }
    Ok(())
}

/// Locale tag validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    EmptyLocale,
    MalformedLocale(String),
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLocale => write!(f, "locale tag must not be empty"),
            Self::MalformedLocale(value) => write!(f, "locale tag is malformed: `{value}`"),
        }
    }
}

impl Error for LocaleError {}

/// Speech engine failures reported by `SpeechEngine::start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    StartFailed { engine_id: String, details: String },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartFailed { engine_id, details } => {
                write!(f, "speech engine `{engine_id}` failed to start: {details}")
            }
        }
    }
}

impl Error for EngineError {}

/// Opaque host speech-to-text capability.
///
/// Implementations bridge a real recognizer (platform API, on-device
/// model). The engine delivers its streamed results back to the owning
/// composer by calling `handle_dictation_event` from its host glue.
pub trait SpeechEngine {
    /// Stable id used in logs and errors.
    fn engine_id(&self) -> &str;

    /// Whether the capability exists on this host at all.
    fn is_available(&self) -> bool;

    /// Opens a continuous recognition stream with the given parameters.
    fn start(&mut self, config: &DictationConfig) -> Result<(), EngineError>;

    /// Terminates the stream. Idempotent.
    fn stop(&mut self);
}

/// Engine for hosts without any speech capability.
///
/// `is_available` is always false, so the composer never reaches `start`;
/// the error path exists for callers that bypass the probe.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedEngine;

impl SpeechEngine for UnsupportedEngine {
    fn engine_id(&self) -> &str {
        "unsupported"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self, _config: &DictationConfig) -> Result<(), EngineError> {
        Err(EngineError::StartFailed {
            engine_id: self.engine_id().to_string(),
            details: "no speech capability on this host".to_string(),
        })
    }

    fn stop(&mut self) {}
}
