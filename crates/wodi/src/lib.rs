//! Facade crate for the wodi editor foundations.
//! Re-exports the foundation crates and the domain/kernel layers.
//! Keep this crate thin: it should compose other crates, not implement editor logic.
//!
//! ## Usage
//! ```rust
//! use wodi::domain::config::WodiConfig;
//! use wodi::domain::value::MapId;
//!
//! let kernel = wodi::init(WodiConfig::default()).unwrap();
//! let map = MapId::new(12).unwrap();
//!
//! assert_eq!(map.get(), 12);
//! assert!(kernel.registry.target_key().is_default());
//! ```

pub use wodi_collection as collection;
pub use wodi_domain as domain;
pub use wodi_kernel as kernel;
pub use wodi_logger as logger;
pub use wodi_registry as registry;
pub use wodi_value as value;

use tracing::debug;
use wodi_domain::config::WodiConfig;
use wodi_kernel::{Kernel, KernelError};

/// Builds a [`Kernel`] over a fresh service registry.
///
/// Logging is not installed here; call [`logger::Logger::from_config`] with
/// `config.logging` and keep the handle alive for the life of the process.
///
/// # Errors
/// Returns [`KernelError::Registry`] if `registry.target_key` is not a valid container key.
pub fn init(config: WodiConfig) -> Result<Kernel, KernelError> {
    debug!("Initializing wodi kernel");
    Kernel::builder().config(config).build()
}
