//! Utility modules.

/// Log helpers that keep response bodies from flooding the log file.
pub mod log_sanitizer;
