use crate::error::ValueError;
use crate::spec::IntSpec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Declares the bounds of an integer record. Implemented by uninhabited marker types.
pub trait IntKind: 'static {
    const SPEC: IntSpec;
}

/// Immutable `i32` that satisfied its kind's bounds at construction.
///
/// Two records are equal only if they share both the kind and the value; records of
/// different kinds are different types.
pub struct IntRecord<K: IntKind> {
    value: i32,
    _kind: PhantomData<fn() -> K>,
}

impl<K: IntKind> IntRecord<K> {
    pub const MIN: i32 = K::SPEC.min;
    pub const MAX: i32 = K::SPEC.max;

    /// # Errors
    /// Returns [`ValueError::OutOfRange`] if `value` is outside `[MIN, MAX]`.
    pub fn new(value: i32) -> Result<Self, ValueError> {
        K::SPEC.check(value)?;
        Ok(Self { value, _kind: PhantomData })
    }

    #[must_use]
    pub const fn get(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub const fn spec() -> IntSpec {
        K::SPEC
    }
}

impl<K: IntKind> Clone for IntRecord<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: IntKind> Copy for IntRecord<K> {}

impl<K: IntKind> PartialEq for IntRecord<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: IntKind> Eq for IntRecord<K> {}

impl<K: IntKind> PartialOrd for IntRecord<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: IntKind> Ord for IntRecord<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: IntKind> Hash for IntRecord<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TypeId::of::<K>().hash(state);
        self.value.hash(state);
    }
}

impl<K: IntKind> fmt::Debug for IntRecord<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::SPEC.name, self.value)
    }
}

impl<K: IntKind> fmt::Display for IntRecord<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<K: IntKind> TryFrom<i32> for IntRecord<K> {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, ValueError> {
        Self::new(value)
    }
}

impl<K: IntKind> From<IntRecord<K>> for i32 {
    fn from(record: IntRecord<K>) -> Self {
        record.value
    }
}

impl<K: IntKind> Serialize for IntRecord<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, K: IntKind> Deserialize<'de> for IntRecord<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
