use crate::entry::{Entry, EntryId, Erased, Factory, Lifetime, ParamFactory};
use crate::error::RegistryError;
use crate::key::ContainerKey;
use crate::scope::ScopedRegistry;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, type_name};
use std::collections::hash_map;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Default)]
struct Container {
    entries: FxHashMap<EntryId, Entry>,
}

#[derive(Debug)]
struct RegistryState {
    containers: FxHashMap<ContainerKey, Container>,
    target: ContainerKey,
    generation: u64,
}

impl RegistryState {
    fn new() -> Self {
        let mut containers = FxHashMap::default();
        containers.insert(ContainerKey::DEFAULT, Container::default());
        Self { containers, target: ContainerKey::DEFAULT, generation: 0 }
    }

    fn key_or_target(&self, key: Option<&ContainerKey>) -> ContainerKey {
        key.unwrap_or(&self.target).clone()
    }

    fn entry(&self, key: &ContainerKey, id: EntryId) -> Option<&Entry> {
        self.containers.get(key)?.entries.get(&id)
    }

    fn entry_mut(&mut self, key: &ContainerKey, id: EntryId) -> Option<&mut Entry> {
        self.containers.get_mut(key)?.entries.get_mut(&id)
    }

    const fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

/// Keyed registry of service creation methods.
///
/// The registry holds named containers, each mapping a capability type (optionally paired
/// with a parameter type) to a factory and a [`Lifetime`]. Operations without an explicit
/// key act on the current *target* container; [`ServiceRegistry::scope`] pins a key.
///
/// Cloning is cheap and every clone shares the same state.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use wodi_registry::{ContainerKey, Lifetime, ServiceRegistry};
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "Hello".to_owned()
///     }
/// }
///
/// # fn main() -> Result<(), wodi_registry::RegistryError> {
/// let registry = ServiceRegistry::new();
/// registry.register::<dyn Greeter>(|| Arc::new(English), Lifetime::PerContainer);
///
/// let greeter = registry.resolve::<dyn Greeter>()?;
/// assert_eq!(greeter.greet(), "Hello");
///
/// registry.change_target_key(ContainerKey::try_from("Project")?);
/// assert!(registry.has_create_method::<dyn Greeter>());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    inner: Arc<RwLock<RegistryState>>,
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRegistry {
    /// Creates a registry holding only the empty `Default` container, which is also the target.
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(RegistryState::new())) }
    }

    /// Returns a view whose operations act on `key` instead of the target container.
    #[must_use]
    pub fn scope(&self, key: ContainerKey) -> ScopedRegistry {
        ScopedRegistry::new(self.clone(), key)
    }

    #[must_use]
    pub fn target_key(&self) -> ContainerKey {
        self.inner.read().target.clone()
    }

    #[must_use]
    pub fn has_container(&self, key: &ContainerKey) -> bool {
        self.inner.read().containers.contains_key(key)
    }

    /// Returns `true` if the container was created by this call.
    pub fn add_container_if_not_has(&self, key: &ContainerKey) -> bool {
        let mut state = self.inner.write();
        if state.containers.contains_key(key) {
            return false;
        }
        state.containers.insert(key.clone(), Container::default());
        debug!(container = %key, "Container added");
        true
    }

    /// Removes a container with its entries and cached instances.
    ///
    /// The `Default` container is emptied but never removed. If the removed container was
    /// the target, the target falls back to `Default`. Returns `true` if anything was removed.
    pub fn remove_container_if_has(&self, key: &ContainerKey) -> bool {
        // Dropped after the lock is released: instance destructors may use the registry.
        let removed = {
            let mut state = self.inner.write();
            if key.is_default() {
                state
                    .containers
                    .get_mut(key)
                    .map(std::mem::take)
                    .filter(|taken| !taken.entries.is_empty())
            } else {
                let removed = state.containers.remove(key);
                if removed.is_some() && state.target == *key {
                    state.target = ContainerKey::DEFAULT;
                    debug!(container = %key, "Target container removed, falling back to default");
                }
                removed
            }
        };

        if removed.is_some() {
            debug!(container = %key, "Container removed");
        }
        removed.is_some()
    }

    /// Makes `key` the target container.
    ///
    /// When `key` does not exist yet it is created and seeded with a snapshot of the
    /// `Default` container's creation methods (never its cached instances). Later changes to
    /// `Default` are not propagated. An existing container is left as it is.
    pub fn change_target_key(&self, key: ContainerKey) {
        let mut state = self.inner.write();
        let state = &mut *state;

        if !state.containers.contains_key(&key) {
            let mut generation = state.generation;
            let entries: FxHashMap<EntryId, Entry> = state
                .containers
                .get(&ContainerKey::DEFAULT)
                .map(|default| {
                    default
                        .entries
                        .iter()
                        .map(|(id, entry)| {
                            generation += 1;
                            (*id, entry.snapshot(generation))
                        })
                        .collect()
                })
                .unwrap_or_default();
            state.generation = generation;

            debug!(container = %key, copied = entries.len(), "Container seeded from default");
            state.containers.insert(key.clone(), Container { entries });
        }

        debug!(from = %state.target, to = %key, "Target container changed");
        state.target = key;
    }

    /// Keys of all containers, sorted.
    #[must_use]
    pub fn container_keys(&self) -> Vec<ContainerKey> {
        let mut keys: Vec<ContainerKey> = self.inner.read().containers.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of creation entries in `key`, or `0` when the container does not exist.
    #[must_use]
    pub fn entry_count(&self, key: &ContainerKey) -> usize {
        self.inner.read().containers.get(key).map_or(0, |container| container.entries.len())
    }

    /// Installs a factory for `C` in the target container, replacing any existing entry and
    /// discarding its cached instance.
    pub fn register<C>(&self, factory: impl Fn() -> Arc<C> + Send + Sync + 'static, lifetime: Lifetime)
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.install::<C>(None, EntryId::of::<C>(), erase(factory), lifetime, true);
    }

    /// Like [`ServiceRegistry::register`] for a factory that takes a `P` argument at resolve time.
    pub fn register_with<C, P>(
        &self,
        factory: impl Fn(P) -> Arc<C> + Send + Sync + 'static,
        lifetime: Lifetime,
    ) where
        C: ?Sized + Send + Sync + 'static,
        P: 'static,
    {
        self.install::<C>(None, EntryId::with_param::<C, P>(), erase_with(factory), lifetime, true);
    }

    /// Installs the factory only when no entry for `C` exists. Returns `true` if installed.
    pub fn register_if_not_has<C>(
        &self,
        factory: impl Fn() -> Arc<C> + Send + Sync + 'static,
        lifetime: Lifetime,
    ) -> bool
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.install::<C>(None, EntryId::of::<C>(), erase(factory), lifetime, false)
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
        self.install::<C>(None, EntryId::with_param::<C, P>(), erase_with(factory), lifetime, false)
    }

    /// Removes the entry for `C`. Returns `false` when there was none.
    pub fn unregister<C: ?Sized + 'static>(&self) -> bool {
        self.uninstall(None, EntryId::of::<C>())
    }

    pub fn unregister_with<C: ?Sized + 'static, P: 'static>(&self) -> bool {
        self.uninstall(None, EntryId::with_param::<C, P>())
    }

    /// Whether `C` can be resolved from the target container. Never instantiates.
    #[must_use]
    pub fn has_create_method<C: ?Sized + 'static>(&self) -> bool {
        self.contains(None, EntryId::of::<C>())
    }

    #[must_use]
    pub fn has_create_method_with<C: ?Sized + 'static, P: 'static>(&self) -> bool {
        self.contains(None, EntryId::with_param::<C, P>())
    }

    /// Obtains a `C` from the target container.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotRegistered`] if no entry exists for `C`.
    pub fn resolve<C>(&self) -> Result<Arc<C>, RegistryError>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.resolve_at(None)
    }

    /// Obtains a `C` built from `param`. A per-container instance is built from the first
    /// parameter supplied and reused afterwards.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotRegistered`] if no entry exists for `(C, P)`.
    pub fn resolve_with<C, P>(&self, param: P) -> Result<Arc<C>, RegistryError>
    where
        C: ?Sized + Send + Sync + 'static,
        P: 'static,
    {
        self.resolve_with_at(None, param)
    }

    pub(crate) fn install<C: ?Sized + 'static>(
        &self,
        key: Option<&ContainerKey>,
        id: EntryId,
        factory: Erased,
        lifetime: Lifetime,
        overwrite: bool,
    ) -> bool {
        let capability = type_name::<C>();
        let mut replaced = None;

        let installed = {
            let mut state = self.inner.write();
            let key = state.key_or_target(key);
            let generation = state.next_generation();
            let entry = Entry { capability, factory, lifetime, instance: None, generation };

            let container = state.containers.entry(key.clone()).or_default();
            let installed = match container.entries.entry(id) {
                hash_map::Entry::Occupied(mut slot) if overwrite => {
                    replaced = Some(slot.insert(entry));
                    true
                },
                hash_map::Entry::Occupied(_) => false,
                hash_map::Entry::Vacant(slot) => {
                    slot.insert(entry);
                    true
                },
            };

            if installed {
                trace!(container = %key, capability, ?lifetime, "Creation method registered");
            }
            installed
        };

        drop(replaced);
        installed
    }

    pub(crate) fn uninstall(&self, key: Option<&ContainerKey>, id: EntryId) -> bool {
        let removed = {
            let mut state = self.inner.write();
            let key = state.key_or_target(key);
            let removed = state.containers.get_mut(&key).and_then(|container| container.entries.remove(&id));
            if let Some(entry) = &removed {
                trace!(container = %key, capability = entry.capability, "Creation method unregistered");
            }
            removed
        };
        removed.is_some()
    }

    pub(crate) fn contains(&self, key: Option<&ContainerKey>, id: EntryId) -> bool {
        let state = self.inner.read();
        let key = key.unwrap_or(&state.target);
        state.entry(key, id).is_some()
    }

    pub(crate) fn resolve_at<C>(&self, key: Option<&ContainerKey>) -> Result<Arc<C>, RegistryError>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.resolve_entry(key, EntryId::of::<C>(), |factory| {
            let factory = downcast::<Factory<C>>(factory)?;
            Ok(factory())
        })
    }

    pub(crate) fn resolve_with_at<C, P>(&self, key: Option<&ContainerKey>, param: P) -> Result<Arc<C>, RegistryError>
    where
        C: ?Sized + Send + Sync + 'static,
        P: 'static,
    {
        self.resolve_entry(key, EntryId::with_param::<C, P>(), |factory| {
            let factory = downcast::<ParamFactory<C, P>>(factory)?;
            Ok(factory(param))
        })
    }

    /// Shared resolve path. The factory runs without holding the lock, so it may resolve
    /// other services; a per-container result is cached only if the entry was not replaced
    /// meanwhile, and a concurrently cached instance wins over this one.
    fn resolve_entry<C>(
        &self,
        key: Option<&ContainerKey>,
        id: EntryId,
        create: impl FnOnce(&Erased) -> Result<Arc<C>, RegistryError>,
    ) -> Result<Arc<C>, RegistryError>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let (key, factory, lifetime, generation) = {
            let state = self.inner.read();
            let key = state.key_or_target(key);
            let entry = state.entry(&key, id).ok_or_else(|| RegistryError::NotRegistered {
                message: type_name::<C>().into(),
                context: Some(key.to_string().into()),
            })?;

            if let Some(instance) = &entry.instance {
                trace!(container = %key, capability = entry.capability, "Resolved cached instance");
                return downcast::<Arc<C>>(instance).cloned();
            }
            (key, Arc::clone(&entry.factory), entry.lifetime, entry.generation)
        };

        let instance = create(&factory)?;
        if lifetime == Lifetime::Transient {
            trace!(container = %key, capability = type_name::<C>(), "Resolved transient instance");
            return Ok(instance);
        }

        let mut state = self.inner.write();
        match state.entry_mut(&key, id) {
            Some(entry) if entry.generation == generation => {
                if let Some(existing) = &entry.instance {
                    return downcast::<Arc<C>>(existing).cloned();
                }
                let cached: Erased = Arc::new(Arc::clone(&instance));
                entry.instance = Some(cached);
                debug!(container = %key, capability = entry.capability, "Per-container instance created");
                Ok(instance)
            },
            _ => Ok(instance),
        }
    }
}

pub(crate) fn erase<C: ?Sized + 'static>(factory: impl Fn() -> Arc<C> + Send + Sync + 'static) -> Erased {
    let factory: Factory<C> = Box::new(factory);
    Arc::new(factory)
}

pub(crate) fn erase_with<C: ?Sized + 'static, P: 'static>(
    factory: impl Fn(P) -> Arc<C> + Send + Sync + 'static,
) -> Erased {
    let factory: ParamFactory<C, P> = Box::new(factory);
    Arc::new(factory)
}

fn downcast<T: Any>(value: &Erased) -> Result<&T, RegistryError> {
    let value: &(dyn Any + Send + Sync) = &**value;
    value.downcast_ref::<T>().ok_or_else(|| RegistryError::TypeMismatch {
        message: type_name::<T>().into(),
        context: Some("Stored value has an unexpected type".into()),
    })
}
