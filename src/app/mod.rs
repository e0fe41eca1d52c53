//! Main application modules.
//!
//! End-of-run statistics printing used by the library entry point.

pub mod statistics;

// Re-export public API
pub use statistics::print_race_statistics;
