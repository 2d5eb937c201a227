use crate::error::CollectionError;
use std::fmt;

/// Allowed element count: exactly `min` when `min == max`, otherwise the inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacity {
    min: usize,
    max: usize,
}

impl Capacity {
    #[must_use]
    pub const fn fixed(len: usize) -> Self {
        Self { min: len, max: len }
    }

    #[must_use]
    pub const fn bounded(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub const fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() { write!(f, "{}", self.min) } else { write!(f, "{}..={}", self.min, self.max) }
    }
}

/// Static description of a collection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub capacity: Capacity,
}

impl CollectionSpec {
    #[must_use]
    pub const fn fixed(name: &'static str, len: usize) -> Self {
        Self { name, capacity: Capacity::fixed(len) }
    }

    #[must_use]
    pub const fn bounded(name: &'static str, min: usize, max: usize) -> Self {
        Self { name, capacity: Capacity::bounded(min, max) }
    }

    pub(crate) fn validate(&self) -> Result<(), CollectionError> {
        if self.capacity.min > self.capacity.max {
            return Err(CollectionError::InvariantViolation {
                message: format!("capacity min {} exceeds max {}", self.capacity.min, self.capacity.max)
                    .into(),
                context: Some(self.name.into()),
            });
        }
        Ok(())
    }
}

/// Declares a constrained collection: its element type, capacity, and per-slot defaults.
///
/// ```rust
/// use wodi_collection::{CollectionKind, CollectionSpec, ConstrainedVec};
///
/// #[derive(Debug)]
/// enum Scores {}
///
/// impl CollectionKind for Scores {
///     type Item = u32;
///     const SPEC: CollectionSpec = CollectionSpec::fixed("Scores", 3);
///
///     fn default_item(_index: usize) -> Option<u32> {
///         Some(0)
///     }
/// }
///
/// let scores = ConstrainedVec::<Scores>::new().unwrap();
/// assert_eq!(scores.as_slice(), &[0, 0, 0]);
/// ```
pub trait CollectionKind: 'static {
    type Item: Clone + PartialEq;

    const SPEC: CollectionSpec;

    /// Value a slot takes when the collection is created, reset, or grown.
    ///
    /// Returning `None` marks the kind itself as defective: construction fails with
    /// [`CollectionError::InvariantViolation`].
    fn default_item(index: usize) -> Option<Self::Item>;
}
