use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the library runtime.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WodiConfigInner {
    pub logging: LoggingConfig,
    pub registry: RegistryConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct WodiConfig {
    #[serde(flatten, default)]
    inner: Arc<WodiConfigInner>,
}

impl Deref for WodiConfig {
    type Target = WodiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for WodiConfig {
    fn deref_mut(&mut self) -> &mut WodiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logger name, also the prefix of rolling log files.
    pub name: String,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    pub console: bool,
    /// Rolling file output is enabled when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
    /// Directive string such as `wodi_registry=trace`. `RUST_LOG` is used when absent.
    pub env_filter: Option<String>,
}

/// Service registry settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Container made the target at startup. `None` keeps the default container.
    pub target_key: Option<String>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "wodi".to_owned(),
            level: "info".to_owned(),
            console: true,
            directory: None,
            json: false,
            max_files: 10,
            env_filter: None,
        }
    }
}
