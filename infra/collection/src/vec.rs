use crate::error::CollectionError;
use crate::kind::{Capacity, CollectionKind};
use crate::observer::{ObserverId, Observers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, Range};
use tracing::trace;

/// Ordered sequence whose length always lies within `K::SPEC.capacity`.
///
/// Observers are attached per instance. They are not part of the value: [`Clone`] yields a
/// collection with no observers, and equality compares items only.
pub struct ConstrainedVec<K: CollectionKind> {
    items: Vec<K::Item>,
    observers: Observers<K::Item>,
}

impl<K: CollectionKind> ConstrainedVec<K> {
    /// Creates a collection at its minimum length, every slot holding the kind's default.
    ///
    /// # Errors
    /// Returns [`CollectionError::InvariantViolation`] when the kind is defective.
    pub fn new() -> Result<Self, CollectionError> {
        Self::probe()?;
        let items = Self::defaults(0..K::SPEC.capacity.min())?;
        Ok(Self::from_vec_unchecked(items))
    }

    /// Creates a collection holding exactly `items`.
    ///
    /// # Errors
    /// * [`CollectionError::LengthMismatch`] if the count is outside the capacity.
    /// * [`CollectionError::InvariantViolation`] when the kind is defective.
    pub fn try_from_items<I>(items: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = K::Item>,
    {
        Self::probe()?;
        let items: Vec<K::Item> = items.into_iter().collect();
        let capacity = K::SPEC.capacity;
        if !capacity.contains(items.len()) {
            return Err(CollectionError::LengthMismatch {
                message: format!("got {} items, capacity is {capacity}", items.len()).into(),
                context: Some(K::SPEC.name.into()),
            });
        }
        Ok(Self::from_vec_unchecked(items))
    }

    /// Like [`ConstrainedVec::try_from_items`] for sources where the sequence or any of its
    /// elements may be missing.
    ///
    /// # Errors
    /// * [`CollectionError::NullCollection`] for a missing sequence.
    /// * [`CollectionError::NullElement`] for the first missing element.
    /// * Otherwise as [`ConstrainedVec::try_from_items`].
    pub fn try_from_options<I>(items: Option<I>) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Option<K::Item>>,
    {
        let Some(items) = items else {
            return Err(CollectionError::NullCollection {
                message: "no item sequence supplied".into(),
                context: Some(K::SPEC.name.into()),
            });
        };

        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                item.ok_or_else(|| CollectionError::NullElement {
                    message: format!("item at index {index} is missing").into(),
                    context: Some(K::SPEC.name.into()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from_items(items)
    }

    fn from_vec_unchecked(items: Vec<K::Item>) -> Self {
        Self { items, observers: Observers::default() }
    }

    fn probe() -> Result<(), CollectionError> {
        K::SPEC.validate()?;
        if K::default_item(0).is_none() {
            return Err(Self::defective(0));
        }
        Ok(())
    }

    pub(crate) fn defaults(range: Range<usize>) -> Result<Vec<K::Item>, CollectionError> {
        range.map(|index| K::default_item(index).ok_or_else(|| Self::defective(index))).collect()
    }

    fn defective(index: usize) -> CollectionError {
        CollectionError::InvariantViolation {
            message: format!("default item factory returned nothing for index {index}").into(),
            context: Some(K::SPEC.name.into()),
        }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            message: format!("index {index} is outside 0..{len}").into(),
            context: Some(K::SPEC.name.into()),
        }
    }

    #[must_use]
    pub const fn capacity() -> Capacity {
        K::SPEC.capacity
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&K::Item> {
        self.items.get(index)
    }

    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&K::Item, CollectionError> {
        self.items.get(index).ok_or_else(|| Self::out_of_range(index, self.len()))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[K::Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K::Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<K::Item> {
        self.items
    }

    /// Replaces the item at `index` and notifies replace observers.
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len`; the collection is untouched.
    pub fn set(&mut self, index: usize, item: K::Item) -> Result<(), CollectionError> {
        let len = self.len();
        let slot = self.items.get_mut(index).ok_or_else(|| Self::out_of_range(index, len))?;
        *slot = item;
        trace!(collection = K::SPEC.name, index, "Item replaced");
        self.observers.notify_replaced(index, &self.items[index]);
        Ok(())
    }

    /// # Errors
    /// [`CollectionError::NullElement`] for `None`, otherwise as [`ConstrainedVec::set`].
    pub fn set_option(&mut self, index: usize, item: Option<K::Item>) -> Result<(), CollectionError> {
        let item = item.ok_or_else(|| CollectionError::NullElement {
            message: format!("cannot store a missing item at index {index}").into(),
            context: Some(K::SPEC.name.into()),
        })?;
        self.set(index, item)
    }

    /// Resets to the minimum length with default items and notifies clear observers.
    ///
    /// # Errors
    /// Returns [`CollectionError::InvariantViolation`] when the kind is defective.
    pub fn clear(&mut self) -> Result<(), CollectionError> {
        self.items = Self::defaults(0..K::SPEC.capacity.min())?;
        trace!(collection = K::SPEC.name, "Collection cleared");
        self.observers.notify_cleared();
        Ok(())
    }

    /// Copies `count` items starting at `index`.
    ///
    /// # Errors
    /// * [`CollectionError::IndexOutOfRange`] if `index > len`.
    /// * [`CollectionError::CountOutOfRange`] if `count > len`.
    /// * [`CollectionError::InvalidRange`] if `index + count > len`.
    pub fn get_range(&self, index: usize, count: usize) -> Result<Vec<K::Item>, CollectionError> {
        let range = self.checked_range(index, count)?;
        Ok(self.items[range].to_vec())
    }

    pub(crate) fn checked_range(&self, index: usize, count: usize) -> Result<Range<usize>, CollectionError> {
        let len = self.len();
        if index > len {
            return Err(Self::out_of_range(index, len));
        }
        if count > len {
            return Err(CollectionError::CountOutOfRange {
                message: format!("count {count} exceeds length {len}").into(),
                context: Some(K::SPEC.name.into()),
            });
        }
        match index.checked_add(count) {
            Some(end) if end <= len => Ok(index..end),
            _ => Err(CollectionError::InvalidRange {
                message: format!("range {index}+{count} runs past length {len}").into(),
                context: Some(K::SPEC.name.into()),
            }),
        }
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<K::Item> {
        &mut self.items
    }

    pub(crate) const fn observers(&self) -> &Observers<K::Item> {
        &self.observers
    }

    pub fn on_replaced<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(usize, &K::Item) + Send + Sync + 'static,
    {
        self.observers.add_replaced(Box::new(f))
    }

    pub fn on_cleared<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.observers.add_cleared(Box::new(f))
    }

    /// Observes insertions: receives the first index and the inserted items.
    pub fn on_inserted<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(usize, &[K::Item]) + Send + Sync + 'static,
    {
        self.observers.add_inserted(Box::new(f))
    }

    /// Observes removals: receives the first index and the removed items.
    pub fn on_removed<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(usize, &[K::Item]) + Send + Sync + 'static,
    {
        self.observers.add_removed(Box::new(f))
    }

    /// Detaches an observer. Returns `false` if it was not attached to this instance.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<K: CollectionKind> Clone for ConstrainedVec<K> {
    fn clone(&self) -> Self {
        Self::from_vec_unchecked(self.items.clone())
    }
}

impl<K: CollectionKind> PartialEq for ConstrainedVec<K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<K: CollectionKind> Eq for ConstrainedVec<K> where K::Item: Eq {}

impl<K: CollectionKind> fmt::Debug for ConstrainedVec<K>
where
    K::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::SPEC.name)
            .field("items", &self.items)
            .field("observers", &self.observers)
            .finish()
    }
}

impl<K: CollectionKind> Index<usize> for ConstrainedVec<K> {
    type Output = K::Item;

    fn index(&self, index: usize) -> &K::Item {
        &self.items[index]
    }
}

impl<'a, K: CollectionKind> IntoIterator for &'a ConstrainedVec<K> {
    type Item = &'a K::Item;
    type IntoIter = std::slice::Iter<'a, K::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K: CollectionKind> AsRef<[K::Item]> for ConstrainedVec<K> {
    fn as_ref(&self) -> &[K::Item] {
        &self.items
    }
}

impl<K: CollectionKind> TryFrom<Vec<K::Item>> for ConstrainedVec<K> {
    type Error = CollectionError;

    fn try_from(items: Vec<K::Item>) -> Result<Self, CollectionError> {
        Self::try_from_items(items)
    }
}

impl<K: CollectionKind> Serialize for ConstrainedVec<K>
where
    K::Item: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de, K: CollectionKind> Deserialize<'de> for ConstrainedVec<K>
where
    K::Item: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Option::<Vec<Option<K::Item>>>::deserialize(deserializer)?;
        Self::try_from_options(items).map_err(serde::de::Error::custom)
    }
}
