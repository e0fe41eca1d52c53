//! Shared utilities.

pub mod sanitize;

pub use sanitize::truncate_for_log;
