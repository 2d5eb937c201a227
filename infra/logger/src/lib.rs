//! # Logger
//!
//! Tracing bootstrap and diagnostics routing for the workspace.
//!
//! * [`Logger::builder`] installs the global subscriber: a compact console layer, an optional
//!   rolling file layer (plain or JSON) behind a non-blocking writer, and an `EnvFilter`.
//! * [`Logger::from_config`] does the same from a [`LoggingConfig`] section.
//! * [`DiagnosticSink`] is the swappable destination for user-facing diagnostics (advisory
//!   pattern notices and the like). The active sink is resolved from a
//!   [`ServiceRegistry`](wodi_registry::ServiceRegistry), see [`install_default_sink`].
//!
//! ## Example
//!
//! ```rust
//! use wodi_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("map-tool")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;
mod sink;

pub use crate::builder::{ConsoleOnly, LoggerBuilder, Named, Rolling, Unnamed};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::sink::{
    DiagnosticRecord, DiagnosticSink, MemorySink, NullSink, Severity, TracingSink, diagnostics,
    install_default_sink, install_default_sink_at, try_diagnostics,
};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use wodi_domain::config::LoggingConfig;

/// Handle to the installed logging system. Holds the file writer's worker guard.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new, unnamed [`LoggerBuilder`].
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) const fn with_guard(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    /// Installs the global subscriber described by a [`LoggingConfig`] section.
    ///
    /// `max_files` and `json` only apply when `directory` is set.
    ///
    /// # Errors
    /// * [`LoggerError::Level`] for an unknown `level`.
    /// * Otherwise as [`LoggerBuilder::init`].
    pub fn from_config(config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = LevelFilter::from_str(config.level.trim())
            .context(format!("logging.level = {:?}", config.level))?;

        let mut builder =
            Self::builder().name(config.name.as_str()).console(config.console).level(level);
        if let Some(filter) = &config.env_filter {
            builder = builder.env_filter(filter.as_str());
        }

        let Some(directory) = &config.directory else {
            return builder.init();
        };
        let builder = builder.path(directory).max_files(config.max_files);
        if config.json { builder.json().init() } else { builder.init() }
    }

    /// `true` when records are also written to rolling files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logger dropped, flushing file writer");
        }
    }
}
