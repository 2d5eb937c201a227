use config::builder::DefaultState;
use config::{Case, Config, ConfigBuilder, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_CONFIG_PATH: &str = "wodi";
const LOCAL_OVERLAY_MARKER: &str = "local";
const ENV_PREFIX: &str = "WODI";
const ENV_SEPARATOR: &str = "__";

#[wodi_derive::wodi_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays local and environment overrides.
///
/// Layers, later wins:
/// 1. **File**: `path`, or `wodi` (any supported extension) in the working directory. Required.
/// 2. **Local overlay**: the same name with `.local` before the extension (`wodi.local.toml`
///    next to `wodi.toml`). Optional; meant for per-machine settings kept out of version control.
/// 3. **Environment**: variables prefixed with `WODI__`, nesting with `__`
///    (`WODI__LOGGING__LEVEL=debug` sets `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the base file is missing or unreadable, or when the
/// merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use wodi_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ToolConfig {
///     verbose: bool,
/// }
///
/// let cfg: ToolConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let base = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());
    info!(path = %base.display(), "Loading config");

    layered(&base)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

fn layered(base: &Path) -> ConfigBuilder<DefaultState> {
    let overlay = local_overlay_path(base);
    debug!(overlay = %overlay.display(), "Checking for local config overlay");

    Config::builder()
        .add_source(File::from(base).required(true))
        .add_source(File::from(overlay.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .convert_case(Case::Snake),
        )
}

/// `dir/wodi.toml` becomes `dir/wodi.local.toml`; `wodi` becomes `wodi.local`.
fn local_overlay_path(base: &Path) -> PathBuf {
    let mut name: OsString = base.file_stem().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(LOCAL_OVERLAY_MARKER);
    if let Some(extension) = base.extension() {
        name.push(".");
        name.push(extension);
    }
    base.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_overlay_keeps_the_extension() {
        assert_eq!(
            local_overlay_path(Path::new("conf/wodi.toml")),
            PathBuf::from("conf/wodi.local.toml")
        );
        assert_eq!(local_overlay_path(Path::new("wodi")), PathBuf::from("wodi.local"));
    }
}
