use crate::entry::{EntryId, Lifetime};
use crate::error::RegistryError;
use crate::key::ContainerKey;
use crate::registry::{ServiceRegistry, erase, erase_with};
use std::sync::Arc;

/// A view of a [`ServiceRegistry`] pinned to one container key.
///
/// Registration through a scope creates the container when it is missing. The scope does
/// not follow target changes; it always addresses its own key.
#[derive(Debug, Clone)]
pub struct ScopedRegistry {
    registry: ServiceRegistry,
    key: ContainerKey,
}

impl ScopedRegistry {
    pub(crate) const fn new(registry: ServiceRegistry, key: ContainerKey) -> Self {
        Self { registry, key }
    }

    #[must_use]
    pub const fn key(&self) -> &ContainerKey {
        &self.key
    }

    #[must_use]
    pub const fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    pub fn register<C>(&self, factory: impl Fn() -> Arc<C> + Send + Sync + 'static, lifetime: Lifetime)
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.registry.install::<C>(Some(&self.key), EntryId::of::<C>(), erase(factory), lifetime, true);
    }

    pub fn register_with<C, P>(
        &self,
        factory: impl Fn(P) -> Arc<C> + Send + Sync + 'static,
        lifetime: Lifetime,
    ) where
        C: ?Sized + Send + Sync + 'static,
        P: 'static,
    {
        self.registry.install::<C>(
            Some(&self.key),
            EntryId::with_param::<C, P>(),
            erase_with(factory),
            lifetime,
            true,
        );
    }

    pub fn register_if_not_has<C>(
        &self,
        factory: impl Fn() -> Arc<C> + Send + Sync + 'static,
        lifetime: Lifetime,
    ) -> bool
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.registry.install::<C>(Some(&self.key), EntryId::of::<C>(), erase(factory), lifetime, false)
    }

    pub fn register_if_not_has_with<C, P>(
        &self,
        factory: impl Fn(P) -> Arc<C> + Send + Sync + 'static,
        lifetime: Lifetime,
    ) -> bool
    where
        C: ?Sized + Send + Sync + 'static,
        P: 'static,
    {
        self.registry.install::<C>(
            Some(&self.key),
            EntryId::with_param::<C, P>(),
            erase_with(factory),
            lifetime,
            false,
        )
    }

    pub fn unregister<C: ?Sized + 'static>(&self) -> bool {
        self.registry.uninstall(Some(&self.key), EntryId::of::<C>())
    }

    pub fn unregister_with<C: ?Sized + 'static, P: 'static>(&self) -> bool {
        self.registry.uninstall(Some(&self.key), EntryId::with_param::<C, P>())
    }

    #[must_use]
    pub fn has_create_method<C: ?Sized + 'static>(&self) -> bool {
        self.registry.contains(Some(&self.key), EntryId::of::<C>())
    }

    #[must_use]
    pub fn has_create_method_with<C: ?Sized + 'static, P: 'static>(&self) -> bool {
        self.registry.contains(Some(&self.key), EntryId::with_param::<C, P>())
    }

    /// # Errors
    /// Returns [`RegistryError::NotRegistered`] if this container has no entry for `C`.
    pub fn resolve<C>(&self) -> Result<Arc<C>, RegistryError>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.registry.resolve_at(Some(&self.key))
    }

    /// # Errors
    /// Returns [`RegistryError::NotRegistered`] if this container has no entry for `(C, P)`.
    pub fn resolve_with<C, P>(&self, param: P) -> Result<Arc<C>, RegistryError>
    where
        C: ?Sized + Send + Sync + 'static,
        P: 'static,
    {
        self.registry.resolve_with_at(Some(&self.key), param)
    }
}
