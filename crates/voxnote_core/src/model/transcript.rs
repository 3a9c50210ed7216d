//! Transcript segments and streamed dictation event shapes.
//!
//! # Responsibility
//! - Model the recognizer's result stream: each event carries the full
//!   segment list seen so far, interim and finalized alike.
//! - Provide the canonical transcript assembly rule.
//!
//! # Invariants
//! - Assembly is the in-order concatenation of segment texts; interim and
//!   finalized segments contribute equally.
//! - Event shapes are serialization-stable (snake_case, `kind` tag) for
//!   host bridges.

use serde::{Deserialize, Serialize};

/// One recognized alternative from the stream (the first alternative of a
/// result).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Recognized text for this segment.
    pub text: String,
    /// Whether the recognizer has finalized this segment.
    pub is_final: bool,
}

impl TranscriptSegment {
    /// Creates a not-yet-finalized segment.
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// Creates a finalized segment.
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// One streamed event from the speech capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DictationEvent {
    /// Full replacement of the running segment list.
    Result { segments: Vec<TranscriptSegment> },
    /// Recognizer-reported failure. Logged, never surfaced as a structured
    /// error to the user.
    Error { code: String, message: String },
    /// The engine closed the stream on its own.
    Ended,
}

/// Assembles the draft text from the running segment list.
pub fn assemble_transcript(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{assemble_transcript, DictationEvent, TranscriptSegment};

    #[test]
    fn assembly_concatenates_in_order() {
        let segments = vec![
            TranscriptSegment::finalized("hello "),
            TranscriptSegment::finalized("from "),
            TranscriptSegment::interim("dictation"),
        ];
        assert_eq!(assemble_transcript(&segments), "hello from dictation");
    }

    #[test]
    fn assembly_of_empty_list_is_empty() {
        assert_eq!(assemble_transcript(&[]), "");
    }

    #[test]
    fn interim_segments_count_toward_assembly() {
        let segments = vec![TranscriptSegment::interim("partial")];
        assert_eq!(assemble_transcript(&segments), "partial");
    }

    #[test]
    fn events_serialize_with_snake_case_kind_tag() {
        let event = DictationEvent::Result {
            segments: vec![TranscriptSegment::interim("hi")],
        };
        let json = serde_json::to_value(&event).expect("event serializes");
        assert_eq!(json["kind"], "result");
        assert_eq!(json["segments"][0]["text"], "hi");
        assert_eq!(json["segments"][0]["is_final"], false);

        let ended = serde_json::to_value(DictationEvent::Ended).expect("ended serializes");
        assert_eq!(ended["kind"], "ended");
    }

    #[test]
    fn error_event_roundtrips() {
        let event = DictationEvent::Error {
            code: "no-speech".to_string(),
            message: "no speech detected".to_string(),
        };
        let json = serde_json::to_string(&event).expect("error serializes");
        let back: DictationEvent = serde_json::from_str(&json).expect("error deserializes");
        assert_eq!(back, event);
    }
}
