//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{AttemptOutcome, RaceStats};
use crate::race::RaceReport;

/// Logs per-outcome attempt counts.
pub fn print_attempt_statistics(stats: &RaceStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }
    info!("Attempt Counts ({} total):", total);
    for outcome in AttemptOutcome::iter() {
        let count = stats.count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }
}

/// Logs the calibration result and attempt counts of a finished run.
///
/// The win itself is logged by the controller when it happens.
pub fn print_race_statistics(report: &RaceReport) {
    info!("{}", calibration_summary(report));
    print_attempt_statistics(&report.stats);
}

fn calibration_summary(report: &RaceReport) -> String {
    format!(
        "Calibration: {} attempt{} ({} missed) in {:.1}s, final sleep {:?}",
        report.attempts,
        if report.attempts == 1 { "" } else { "s" },
        report.stats.misses(),
        report.elapsed.as_secs_f64(),
        report.final_sleep
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::victim::FetchResult;
    use std::time::Duration;

    #[test]
    fn test_race_statistics_summary() {
        let mut stats = RaceStats::new();
        print_attempt_statistics(&stats);

        stats.record(AttemptOutcome::TooEarly);
        stats.record(AttemptOutcome::Success);
        let report = RaceReport {
            result: FetchResult {
                file_name: "image1.png".to_string(),
                file_id: "987".to_string(),
            },
            host: "abc123def456.dns.example".to_string(),
            attempts: 2,
            final_sleep: Duration::from_millis(6400),
            stats,
            elapsed: Duration::from_secs(14),
        };
        print_race_statistics(&report);

        assert_eq!(
            calibration_summary(&report),
            "Calibration: 2 attempts (1 missed) in 14.0s, final sleep 6.4s"
        );
    }
}
