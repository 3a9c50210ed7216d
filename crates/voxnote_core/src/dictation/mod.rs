//! Dictation capability wrapper.
//!
//! # Responsibility
//! - Define the `SpeechEngine` seam over the host speech capability.
//! - Track one live recognition stream per process via the session slot.

pub mod engine;
pub mod session;
pub mod session_slot;
