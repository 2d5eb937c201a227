//! Kernel utilities shared by tools built on the workspace.
//! Keep this crate lightweight: configuration loading and the runtime context, nothing else.
//!
//! ## Runtime context
//! ```rust
//! use wodi_kernel::Kernel;
//! use wodi_kernel::domain::config::WodiConfig;
//!
//! let kernel = Kernel::builder().config(WodiConfig::default()).build().unwrap();
//! assert!(kernel.registry.target_key().is_default());
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use wodi_kernel::config::load_config;
//! use wodi_kernel::domain::config::WodiConfig;
//!
//! let cfg: WodiConfig = load_config(Some("wodi.toml")).unwrap();
//! ```
pub mod config;
mod context;
mod error;

pub use context::{Kernel, KernelBuilder, KernelInner};
pub use error::{KernelError, KernelErrorExt};

pub use wodi_domain as domain;
