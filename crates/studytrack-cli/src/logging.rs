//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so that stdout carries only JSON.
//!
//! - `warn`: default
//! - `info`: timer and status transitions (`-v`)
//! - `debug`: ticks, config lookup, tab changes (`-vv`)
//! - `trace`: discarded stale ticks (`-vvv`)
//!
//! `RUST_LOG`, when set, overrides the verbosity flag.

use std::io;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,studytrack_core={level},studytrack_cli={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}

pub fn init_logging(verbosity: u8) {
    let filter = build_env_filter(level_for(verbosity));
    let layer = fmt::layer().compact().without_time().with_writer(io::stderr);
    tracing_subscriber::registry().with(filter).with(layer).init();
}
