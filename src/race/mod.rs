//! Adaptive DNS-rebinding race.
//!
//! Each attempt primes the victim resolver's negative cache, flips the record,
//! waits a calibrated delay and triggers the victim fetch. A validation
//! rejection is classified from the authoritative query log:
//! - latest query answered: the check already saw the rebound address, sleep less
//! - latest query failed: the cached failure outlived the use, sleep more
//!
//! The sleep moves by a fixed step per miss until an attempt lands.

mod calibration;
mod classify;
mod controller;
mod ports;
mod target;
mod url;

pub use calibration::SleepCalibration;
pub use classify::{classify_miss, RaceMiss};
pub use controller::{AttemptResult, RaceController, RaceLimits, RaceReport, RaceSettings};
pub use ports::{DnsControl, RemoteFetch};
pub use target::RebindTarget;
pub use url::TargetEndpoint;
