use crate::error::CollectionError;
use crate::kind::CollectionKind;
use crate::vec::ConstrainedVec;
use tracing::trace;

/// Length-changing operations. On a fixed-capacity kind these always fail with a capacity
/// error, since any change of length leaves the capacity.
impl<K: CollectionKind> ConstrainedVec<K> {
    /// # Errors
    /// * [`CollectionError::IndexOutOfRange`] if `index > len`.
    /// * [`CollectionError::CapacityExceeded`] if the collection is full.
    pub fn insert(&mut self, index: usize, item: K::Item) -> Result<(), CollectionError> {
        self.insert_range(index, [item])
    }

    /// Inserts `items` at `index`, shifting later items towards the end.
    ///
    /// # Errors
    /// * [`CollectionError::IndexOutOfRange`] if `index > len`.
    /// * [`CollectionError::CapacityExceeded`] if the result would exceed the maximum length.
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = K::Item>,
    {
        let len = self.len();
        if index > len {
            return Err(Self::out_of_range(index, len));
        }

        let items: Vec<K::Item> = items.into_iter().collect();
        if items.is_empty() {
            return Ok(());
        }
        self.ensure_grow(items.len())?;

        let count = items.len();
        self.items_mut().splice(index..index, items);
        trace!(collection = K::SPEC.name, index, count, "Items inserted");
        self.observers().notify_inserted(index, &self.as_slice()[index..index + count]);
        Ok(())
    }

    /// # Errors
    /// Returns [`CollectionError::CapacityExceeded`] if the collection is full.
    pub fn push(&mut self, item: K::Item) -> Result<(), CollectionError> {
        let len = self.len();
        self.insert(len, item)
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Errors
    /// * [`CollectionError::IndexOutOfRange`] if `index >= len`.
    /// * [`CollectionError::CapacityUnderflow`] if the collection is at its minimum length.
    pub fn remove(&mut self, index: usize) -> Result<K::Item, CollectionError> {
        let len = self.len();
        if index >= len {
            return Err(Self::out_of_range(index, len));
        }
        let mut removed = self.remove_range(index, 1)?;
        removed.pop().ok_or_else(|| Self::out_of_range(index, len))
    }

    /// Removes `count` items starting at `index` and returns them in order.
    ///
    /// # Errors
    /// * Range errors as [`ConstrainedVec::get_range`].
    /// * [`CollectionError::CapacityUnderflow`] if the result would drop below the minimum length.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<Vec<K::Item>, CollectionError> {
        let range = self.checked_range(index, count)?;
        if count == 0 {
            return Ok(Vec::new());
        }
        self.ensure_shrink(count)?;

        let removed: Vec<K::Item> = self.items_mut().drain(range).collect();
        trace!(collection = K::SPEC.name, index, count, "Items removed");
        self.observers().notify_removed(index, &removed);
        Ok(removed)
    }

    /// Removes and returns the last item.
    ///
    /// # Errors
    /// * [`CollectionError::IndexOutOfRange`] if the collection is empty.
    /// * [`CollectionError::CapacityUnderflow`] if the collection is at its minimum length.
    pub fn pop(&mut self) -> Result<K::Item, CollectionError> {
        match self.len().checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(Self::out_of_range(0, 0)),
        }
    }

    /// Grows with default items or truncates from the end until the length is `len`.
    ///
    /// # Errors
    /// * [`CollectionError::LengthMismatch`] if `len` is outside the capacity.
    /// * [`CollectionError::InvariantViolation`] when the kind is defective.
    pub fn adjust_length(&mut self, len: usize) -> Result<(), CollectionError> {
        let capacity = K::SPEC.capacity;
        if !capacity.contains(len) {
            return Err(CollectionError::LengthMismatch {
                message: format!("length {len} is outside capacity {capacity}").into(),
                context: Some(K::SPEC.name.into()),
            });
        }

        let current = self.len();
        if len > current {
            let defaults = Self::defaults(current..len)?;
            self.insert_range(current, defaults)
        } else {
            self.remove_range(len, current - len).map(drop)
        }
    }

    fn ensure_grow(&self, count: usize) -> Result<(), CollectionError> {
        let max = K::SPEC.capacity.max();
        match self.len().checked_add(count) {
            Some(next) if next <= max => Ok(()),
            _ => Err(CollectionError::CapacityExceeded {
                message: format!("adding {count} to length {} exceeds maximum {max}", self.len()).into(),
                context: Some(K::SPEC.name.into()),
            }),
        }
    }

    fn ensure_shrink(&self, count: usize) -> Result<(), CollectionError> {
        let min = K::SPEC.capacity.min();
        match self.len().checked_sub(count) {
            Some(next) if next >= min => Ok(()),
            _ => Err(CollectionError::CapacityUnderflow {
                message: format!("removing {count} from length {} goes below minimum {min}", self.len())
                    .into(),
                context: Some(K::SPEC.name.into()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::CollectionSpec;

    #[derive(Debug)]
    enum Slots {}

    impl CollectionKind for Slots {
        type Item = u8;
        const SPEC: CollectionSpec = CollectionSpec::bounded("Slots", 1, 3);

        fn default_item(index: usize) -> Option<u8> {
            u8::try_from(index).ok()
        }
    }

    #[test]
    fn test_capacity_guards() {
        let mut slots = ConstrainedVec::<Slots>::new().unwrap();
        assert_eq!(slots.as_slice(), &[0]);

        slots.push(7).unwrap();
        slots.push(8).unwrap();
        assert!(matches!(slots.push(9), Err(CollectionError::CapacityExceeded { .. })));

        slots.remove_range(1, 2).unwrap();
        assert!(matches!(slots.pop(), Err(CollectionError::CapacityUnderflow { .. })));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_adjust_length_uses_positional_defaults() {
        let mut slots = ConstrainedVec::<Slots>::new().unwrap();
        slots.set(0, 42).unwrap();

        slots.adjust_length(3).unwrap();
        assert_eq!(slots.as_slice(), &[42, 1, 2]);

        slots.adjust_length(1).unwrap();
        assert_eq!(slots.as_slice(), &[42]);

        assert!(matches!(slots.adjust_length(4), Err(CollectionError::LengthMismatch { .. })));
        assert!(matches!(slots.adjust_length(0), Err(CollectionError::LengthMismatch { .. })));
    }

    #[test]
    fn test_insert_past_end_fails() {
        let mut slots = ConstrainedVec::<Slots>::new().unwrap();
        assert!(matches!(slots.insert(2, 1), Err(CollectionError::IndexOutOfRange { .. })));
        slots.insert(0, 5).unwrap();
        assert_eq!(slots.as_slice(), &[5, 0]);
    }
}
