//! Query-log classification of a missed attempt.

use crate::dns_control::{latest_entry, QueryLogEntry};
use crate::error_handling::{AttemptOutcome, RaceError};

/// Which side of the window a rejected attempt landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceMiss {
    /// The freshest query failed: time of check still saw the cached negative
    /// answer, and time of use failed to connect. Sleep longer.
    TooEarly,
    /// The freshest query was answered: time of check already saw the rebound
    /// address and the address policy rejected it. Sleep less.
    TooLate,
}

impl From<RaceMiss> for AttemptOutcome {
    fn from(miss: RaceMiss) -> Self {
        match miss {
            RaceMiss::TooEarly => AttemptOutcome::TooEarly,
            RaceMiss::TooLate => AttemptOutcome::TooLate,
        }
    }
}

/// Classifies a validation-rejected attempt from the label's query log.
///
/// # Errors
///
/// Returns [`RaceError::EmptyQueryLog`] when nothing was logged; an empty log
/// carries no timing signal and is never defaulted to either side.
pub fn classify_miss(label: &str, entries: &[QueryLogEntry]) -> Result<RaceMiss, RaceError> {
    let latest = latest_entry(entries).ok_or_else(|| RaceError::EmptyQueryLog {
        label: label.to_string(),
    })?;
    if latest.is_answered() {
        Ok(RaceMiss::TooLate)
    } else {
        Ok(RaceMiss::TooEarly)
    }
}
