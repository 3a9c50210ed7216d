//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate draft, dictation, and notification seams into the
//!   composer API the host drives.
//! - Keep host/UI layers decoupled from session bookkeeping.

pub mod composer_service;
