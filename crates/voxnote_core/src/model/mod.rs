//! Domain models shared by the composer and dictation layers.
//!
//! # Responsibility
//! - Define the draft note and its mode machine.
//! - Define transcript segments and the streamed event shapes.

pub mod draft;
pub mod transcript;
