//! Error type definitions.
//!
//! This module defines the error taxonomy shared by the DNS control client, the
//! victim client and the race controller.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::VALIDATION_ERROR_CODE;
use crate::utils::truncate_for_log;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by the DNS control plane client.
#[derive(Error, Debug)]
pub enum DnsControlError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("DNS control {operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: ReqwestError,
    },

    /// The control plane answered with a non-success status.
    #[error("DNS control {operation} returned {status}: {}", truncate_for_log(.body))]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The query log body was not the expected JSON.
    #[error("cannot decode DNS query log: {0}")]
    Decode(#[from] serde_json::Error),

    /// A query log entry carried a timestamp that is not an integer epoch.
    #[error("cannot decode query log timestamp {raw:?}")]
    Timestamp { raw: String },
}

/// Errors returned by the victim API client.
#[derive(Error, Debug)]
pub enum VictimError {
    /// Network or HTTP-layer failure talking to the victim.
    #[error("victim request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// A response that should have been JSON could not be decoded.
    #[error("cannot decode victim response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No session has been stored yet.
    #[error("no victim session held, login first")]
    NoSession,

    /// The server reported the session as expired.
    #[error("victim session invalid/expired")]
    SessionExpired,

    /// Login returned a non-200 status or no session token.
    #[error("login failed, status {status}: {}", truncate_for_log(.body))]
    LoginFailed { status: u16, body: String },

    /// The server validated the fetch URL and refused it.
    #[error("fetch rejected by validation ({}): {}", VALIDATION_ERROR_CODE, truncate_for_log(.body))]
    ValidationRejected { body: String },

    /// Any other failure, carrying the raw body.
    #[error("addfile request failed, status {status}: {}", truncate_for_log(.body))]
    Rejected { status: u16, body: String },
}

impl VictimError {
    /// Whether this is the address-policy rejection the race depends on.
    pub fn is_validation_rejected(&self) -> bool {
        matches!(self, VictimError::ValidationRejected { .. })
    }
}

/// Conditions that end a race run.
///
/// Every variant is fatal: none of them is ever reinterpreted as a timing signal.
#[derive(Error, Debug)]
pub enum RaceError {
    /// Initial login failed.
    #[error("cannot log in to victim: {0}")]
    Login(#[source] VictimError),

    /// The priming request fetched successfully, so the host already resolved.
    #[error("priming fetch of {url} unexpectedly succeeded")]
    PrimingSucceeded { url: String },

    /// The priming request failed with something other than a validation rejection.
    #[error("priming fetch failed unexpectedly, check target path and port: {0}")]
    PrimingFailed(#[source] VictimError),

    /// The DNS record could not be assigned.
    #[error("cannot assign DNS record for {label}: {source}")]
    DnsFlip {
        label: String,
        #[source]
        source: DnsControlError,
    },

    /// The query log could not be fetched.
    #[error("cannot fetch DNS query log for {label}: {source}")]
    QueryLog {
        label: String,
        #[source]
        source: DnsControlError,
    },

    /// The query log was empty, so the miss cannot be classified.
    #[error("DNS query log for {label} is empty, cannot classify the miss")]
    EmptyQueryLog { label: String },

    /// The weaponized request failed with something other than a validation rejection.
    #[error("unexpected error, make sure target path and port point to a valid image file: {0}")]
    Trigger(#[source] VictimError),

    /// The configured attempt bound was reached.
    #[error("gave up after {attempts} attempts (last sleep {last_sleep:?})")]
    AttemptsExhausted { attempts: u32, last_sleep: Duration },

    /// The configured wall-clock bound was reached.
    #[error("gave up after {elapsed:?} and {attempts} attempts (last sleep {last_sleep:?})")]
    DeadlineExceeded {
        elapsed: Duration,
        attempts: u32,
        last_sleep: Duration,
    },
}
