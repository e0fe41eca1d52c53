//! Attempt statistics tracking.
//!
//! Counts how each race attempt ended. The controller owns the counters for the
//! whole run and hands a copy back in the run report.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

/// How a single race attempt ended, fatal endings excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum AttemptOutcome {
    /// The weaponized fetch went through
    Success,
    /// The resolver still served the cached negative answer at time of use
    TooEarly,
    /// The resolver already served the rebound address at time of check
    TooLate,
}

impl AttemptOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptOutcome::Success => "Success",
            AttemptOutcome::TooEarly => "Too early",
            AttemptOutcome::TooLate => "Too late",
        }
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-run attempt counters.
///
/// All outcome kinds are initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct RaceStats {
    outcomes: HashMap<AttemptOutcome, usize>,
}

impl RaceStats {
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in AttemptOutcome::iter() {
            outcomes.insert(outcome, 0);
        }
        RaceStats { outcomes }
    }

    pub fn record(&mut self, outcome: AttemptOutcome) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;
    }

    pub fn count(&self, outcome: AttemptOutcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Total attempts that reached classification or success.
    pub fn total(&self) -> usize {
        self.outcomes.values().sum()
    }

    /// Attempts that missed the window in either direction.
    pub fn misses(&self) -> usize {
        self.count(AttemptOutcome::TooEarly) + self.count(AttemptOutcome::TooLate)
    }
}

impl Default for RaceStats {
    fn default() -> Self {
        Self::new()
    }
}
