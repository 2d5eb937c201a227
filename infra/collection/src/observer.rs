use std::fmt;

/// Handle returned by every `on_*` registration; pass it to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type ReplacedFn<T> = Box<dyn Fn(usize, &T) + Send + Sync>;
type ClearedFn = Box<dyn Fn() + Send + Sync>;
type SpliceFn<T> = Box<dyn Fn(usize, &[T]) + Send + Sync>;

/// Callbacks attached to one collection instance. Never cloned and never serialised.
pub(crate) struct Observers<T> {
    next_id: u64,
    replaced: Vec<(ObserverId, ReplacedFn<T>)>,
    cleared: Vec<(ObserverId, ClearedFn)>,
    inserted: Vec<(ObserverId, SpliceFn<T>)>,
    removed: Vec<(ObserverId, SpliceFn<T>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            replaced: Vec::new(),
            cleared: Vec::new(),
            inserted: Vec::new(),
            removed: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("replaced", &self.replaced.len())
            .field("cleared", &self.cleared.len())
            .field("inserted", &self.inserted.len())
            .field("removed", &self.removed.len())
            .finish()
    }
}

impl<T> Observers<T> {
    const fn next(&mut self) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn add_replaced(&mut self, f: ReplacedFn<T>) -> ObserverId {
        let id = self.next();
        self.replaced.push((id, f));
        id
    }

    pub(crate) fn add_cleared(&mut self, f: ClearedFn) -> ObserverId {
        let id = self.next();
        self.cleared.push((id, f));
        id
    }

    pub(crate) fn add_inserted(&mut self, f: SpliceFn<T>) -> ObserverId {
        let id = self.next();
        self.inserted.push((id, f));
        id
    }

    pub(crate) fn add_removed(&mut self, f: SpliceFn<T>) -> ObserverId {
        let id = self.next();
        self.removed.push((id, f));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.len();
        self.replaced.retain(|(entry, _)| *entry != id);
        self.cleared.retain(|(entry, _)| *entry != id);
        self.inserted.retain(|(entry, _)| *entry != id);
        self.removed.retain(|(entry, _)| *entry != id);
        self.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.replaced.len() + self.cleared.len() + self.inserted.len() + self.removed.len()
    }

    pub(crate) fn notify_replaced(&self, index: usize, item: &T) {
        for (_, f) in &self.replaced {
            f(index, item);
        }
    }

    pub(crate) fn notify_cleared(&self) {
        for (_, f) in &self.cleared {
            f();
        }
    }

    pub(crate) fn notify_inserted(&self, index: usize, items: &[T]) {
        for (_, f) in &self.inserted {
            f(index, items);
        }
    }

    pub(crate) fn notify_removed(&self, index: usize, items: &[T]) {
        for (_, f) in &self.removed {
            f(index, items);
        }
    }
}
