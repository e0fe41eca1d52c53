//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `rebind_race` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use rebind_race::initialization::init_logger_with;
use rebind_race::{run_race, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may come from REBIND_USERNAME / REBIND_PASSWORD in a .env file
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format, config.color)
        .context("Failed to initialize logger")?;

    match run_race(config).await {
        Ok(report) => {
            println!(
                "✅ SSRF succeeded after {} attempt{} (sleep {:?}): added {} (id {})",
                report.attempts,
                if report.attempts == 1 { "" } else { "s" },
                report.final_sleep,
                report.result.file_name,
                report.result.file_id
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("rebind_race error: {:#}", e);
            process::exit(1);
        }
    }
}
