//! Sleep calibration between the DNS flip and the weaponized trigger.

use std::time::Duration;

use log::warn;

use super::classify::RaceMiss;

/// Attempt-to-attempt sleep state.
///
/// Passed by value into each attempt and replaced with the adjusted value
/// after a miss. `TooEarly` adds `step`, `TooLate` subtracts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepCalibration {
    current: Duration,
    step: Duration,
}

impl SleepCalibration {
    pub fn new(initial: Duration, step: Duration) -> Self {
        Self {
            current: initial,
            step,
        }
    }

    /// Delay wanted between priming and the weaponized trigger.
    pub fn current(&self) -> Duration {
        self.current
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Calibration for the next attempt after `miss`.
    ///
    /// A `TooLate` larger than the remaining sleep saturates at zero. Callers are
    /// expected to pick a start value and step that never get there.
    pub fn adjusted(self, miss: RaceMiss) -> Self {
        let current = match miss {
            RaceMiss::TooEarly => self.current.saturating_add(self.step),
            RaceMiss::TooLate => {
                if self.step > self.current {
                    warn!(
                        "Sleep {:?} cannot be reduced by {:?}, clamping to zero",
                        self.current, self.step
                    );
                }
                self.current.saturating_sub(self.step)
            }
        };
        Self { current, ..self }
    }

    /// Sleep still owed once `elapsed` has passed since priming.
    pub fn remaining_after(&self, elapsed: Duration) -> Duration {
        self.current.saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_too_early_increases_by_step() {
        let calibration = SleepCalibration::new(ms(6200), ms(200));
        assert_eq!(calibration.adjusted(RaceMiss::TooEarly).current(), ms(6400));
    }

    #[test]
    fn test_too_late_decreases_by_step() {
        let calibration = SleepCalibration::new(ms(6200), ms(200));
        assert_eq!(calibration.adjusted(RaceMiss::TooLate).current(), ms(6000));
    }

    #[test]
    fn test_repeated_misses_accumulate_linearly() {
        let mut calibration = SleepCalibration::new(ms(6200), ms(200));
        for _ in 0..3 {
            calibration = calibration.adjusted(RaceMiss::TooEarly);
        }
        assert_eq!(calibration.current(), ms(6800));

        for _ in 0..5 {
            calibration = calibration.adjusted(RaceMiss::TooLate);
        }
        assert_eq!(calibration.current(), ms(5800));
        assert_eq!(calibration.step(), ms(200));
    }

    #[test]
    fn test_too_late_clamps_at_zero() {
        let calibration = SleepCalibration::new(ms(100), ms(200));
        assert_eq!(calibration.adjusted(RaceMiss::TooLate).current(), Duration::ZERO);
    }

    #[test]
    fn test_remaining_after() {
        let calibration = SleepCalibration::new(ms(6200), ms(200));
        assert_eq!(calibration.remaining_after(ms(1200)), ms(5000));
        assert_eq!(calibration.remaining_after(ms(7000)), Duration::ZERO);
    }
}
