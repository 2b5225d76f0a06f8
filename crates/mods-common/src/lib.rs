//! Shared utilities for the MODS crosswalk crates.
//!
//! This crate provides the diagnostic sink used by the writers and
//! normalizers, and the `tracing` subscriber setup used by applications
//! embedding them.

pub mod logging;
pub mod notifier;

pub use notifier::{Diagnostic, Notifier, RecordingNotifier, Severity, TracingNotifier};
