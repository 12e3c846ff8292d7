use std::sync::Once;

use env_logger::fmt::TimestampPrecision;
use log::LevelFilter;
use serde::Deserialize;

/// Logger settings, usually read from a host config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter, e.g. `"info"` or `"gridhud_overlay=trace,warn"`.
    /// `None` falls back to `RUST_LOG`, then `info`.
    pub filter: Option<String>,
    /// Timestamp on every record. Off by default: a frame loop logs a lot.
    pub timestamps: Option<Timestamps>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timestamps {
    Seconds,
    Millis,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { filter: Some(filter.into()), ..Self::default() }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on the first call; later calls do nothing.
///
/// Returns `true` only for the call that installed it.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.filter.clone().or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(LevelFilter::Info);
            }
        }
        builder.format_timestamp(config.timestamps.map(|t| match t {
            Timestamps::Seconds => TimestampPrecision::Seconds,
            Timestamps::Millis => TimestampPrecision::Millis,
        }));

        installed = builder.try_init().is_ok();
        log::debug!("logging ready (filter {:?})", config.filter);
    });
    installed
}
