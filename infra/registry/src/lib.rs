//! # Service Registry
//!
//! A keyed registry of service creation methods, used to swap implementations (diagnostic
//! sinks, encoders, project services) without touching their consumers.
//!
//! ## Overview
//!
//! A [`ServiceRegistry`] owns named containers. Each container maps a capability type `C`
//! (optionally paired with a parameter type `P`) to a factory and a [`Lifetime`]:
//!
//! * **Transient**: every resolve builds a fresh instance.
//! * **`PerContainer`**: the first resolve builds the instance, later resolves from the same
//!   container share it.
//!
//! The `Default` container always exists. Switching the target with
//! [`ServiceRegistry::change_target_key`] to a new key seeds that container with a snapshot of
//! the `Default` creation methods.
//!
//! ## Features
//!
//! * **Trait objects**: `C` may be `dyn Trait`; instances are handed out as `Arc<C>`.
//! * **Re-entrant factories**: factories run outside the registry lock and may resolve
//!   other services.
//! * **Explicit handle**: no global state; clones share one registry.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wodi_registry::{ContainerKey, Lifetime, RegistryError, ServiceRegistry};
//!
//! # fn main() -> Result<(), RegistryError> {
//! let registry = ServiceRegistry::new();
//! registry.register::<String>(|| Arc::new("shared".to_owned()), Lifetime::PerContainer);
//!
//! let a = registry.resolve::<String>()?;
//! let b = registry.resolve::<String>()?;
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! let project = ContainerKey::try_from("Project")?;
//! registry.change_target_key(project.clone());
//! let c = registry.resolve::<String>()?;
//! assert!(!Arc::ptr_eq(&a, &c));
//!
//! assert!(registry.scope(project).has_create_method::<String>());
//! # Ok(())
//! # }
//! ```

mod entry;
mod error;
mod key;
mod registry;
mod scope;

pub use entry::Lifetime;
pub use error::{RegistryError, RegistryErrorExt};
pub use key::ContainerKey;
pub use registry::ServiceRegistry;
pub use scope::ScopedRegistry;
