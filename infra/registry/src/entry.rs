use std::any::{Any, TypeId};
use std::sync::Arc;

/// How long a resolved instance lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// Every resolve invokes the factory.
    Transient,
    /// The first resolve invokes the factory; the instance is cached in the container
    /// until the entry is unregistered, overwritten, or the container is removed.
    PerContainer,
}

pub(crate) type Factory<C> = Box<dyn Fn() -> Arc<C> + Send + Sync>;
pub(crate) type ParamFactory<C, P> = Box<dyn Fn(P) -> Arc<C> + Send + Sync>;

pub(crate) type Erased = Arc<dyn Any + Send + Sync>;

/// Identity of an entry within one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryId {
    capability: TypeId,
    param: Option<TypeId>,
}

impl EntryId {
    pub(crate) fn of<C: ?Sized + 'static>() -> Self {
        Self { capability: TypeId::of::<C>(), param: None }
    }

    pub(crate) fn with_param<C: ?Sized + 'static, P: 'static>() -> Self {
        Self { capability: TypeId::of::<C>(), param: Some(TypeId::of::<P>()) }
    }
}

/// A creation entry. `factory` holds a [`Factory`] or [`ParamFactory`], `instance` an `Arc<C>`.
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) capability: &'static str,
    pub(crate) factory: Erased,
    pub(crate) lifetime: Lifetime,
    pub(crate) instance: Option<Erased>,
    pub(crate) generation: u64,
}

impl Entry {
    /// Copies the creation method only. Cached instances stay with their container.
    pub(crate) fn snapshot(&self, generation: u64) -> Self {
        Self {
            capability: self.capability,
            factory: Arc::clone(&self.factory),
            lifetime: self.lifetime,
            instance: None,
            generation,
        }
    }
}
