//! Error handling and attempt statistics.
//!
//! This module provides:
//! - Error type definitions for every remote collaborator and for the race itself
//! - Per-run attempt statistics
//!
//! Calibration misses are not errors. They are counted as [`AttemptOutcome`]s and
//! drive the next attempt; only [`RaceError`] ends a run.

mod stats;
mod types;

// Re-export public API
pub use stats::{AttemptOutcome, RaceStats};
pub use types::{DnsControlError, InitializationError, RaceError, VictimError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_race_stats_initialization() {
        let stats = RaceStats::new();
        for outcome in AttemptOutcome::iter() {
            assert_eq!(stats.count(outcome), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_race_stats_record() {
        let mut stats = RaceStats::new();
        stats.record(AttemptOutcome::TooEarly);
        stats.record(AttemptOutcome::TooEarly);
        stats.record(AttemptOutcome::TooLate);
        stats.record(AttemptOutcome::Success);

        assert_eq!(stats.count(AttemptOutcome::TooEarly), 2);
        assert_eq!(stats.count(AttemptOutcome::TooLate), 1);
        assert_eq!(stats.count(AttemptOutcome::Success), 1);
        assert_eq!(stats.misses(), 3);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_all_outcomes_have_string_representation() {
        for outcome in AttemptOutcome::iter() {
            assert!(
                !outcome.as_str().is_empty(),
                "{:?} should have non-empty string",
                outcome
            );
        }
    }
}
