//! Logger setup: `env_logger` backend writing plain or JSON lines to stderr.

use std::cmp::min;
use std::io::{IsTerminal, Write};

use colored::{Color, Colorize};
use log::{Level, LevelFilter, Record};

use crate::config::{ColorMode, LogFormat};
use crate::error_handling::InitializationError;

/// HTTP stack modules whose debug output drowns the attempt log.
const QUIET_MODULES: &[&str] = &["reqwest", "hyper", "hyper_util"];

/// Installs the global logger.
///
/// `RUST_LOG` directives are read first and `level` is applied on top, so the
/// CLI flag decides the crate's own verbosity. The HTTP stack never logs below
/// `info`. JSON lines are never coloured; plain lines follow `color`, where
/// `ColorMode::Auto` colours only an interactive stderr without `NO_COLOR`.
///
/// # Errors
///
/// Returns [`InitializationError::LoggerError`] if a logger is already installed.
///
/// ```bash
/// RUST_LOG=rebind_race::race=debug rebind_race --target-path logo.png
/// rebind_race --target-path logo.png --log-format json 2>attempts.jsonl
/// ```
pub fn init_logger_with(
    level: LevelFilter,
    format: LogFormat,
    color: ColorMode,
) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for module in QUIET_MODULES {
        builder.filter_module(module, min(level, LevelFilter::Info));
    }
    builder.filter_module("rebind_race", level);

    let colorize = match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(buf, "{}", json_line(chrono::Utc::now().timestamp_millis(), record))
            });
            false
        }
        LogFormat::Plain => {
            builder.format(|buf, record| writeln!(buf, "{}", plain_line(record)));
            use_color(color, no_color_requested(), std::io::stderr().is_terminal())
        }
    };

    builder.try_init()?;
    colored::control::set_override(colorize);
    Ok(())
}

fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

fn use_color(mode: ColorMode, no_color: bool, stderr_is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stderr_is_terminal && !no_color,
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Magenta,
    }
}

/// `[LEVEL] target: message`, coloured when `colored` is enabled.
fn plain_line(record: &Record) -> String {
    let level = record.level();
    format!(
        "[{}] {}: {}",
        format!("{:<5}", level.as_str()).as_str().color(level_color(level)),
        record.target().dimmed(),
        record.args()
    )
}

/// One JSON object per record; the message is escaped by `serde_json`.
fn json_line(ts_millis: i64, record: &Record) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}
