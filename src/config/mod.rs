//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, response markers, defaults)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ColorMode, Config, LogFormat, LogLevel};
