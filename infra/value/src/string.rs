use crate::error::ValueError;
use crate::spec::{AdvisoryMismatch, StrSpec};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use tracing::debug;

/// Declares the constraints of a string record. Implemented by uninhabited marker types.
pub trait StrKind: 'static {
    const SPEC: StrSpec;
}

/// Immutable string that satisfied every required constraint of its kind at construction.
///
/// The value is stored verbatim. Ordering is ordinal (byte-wise).
pub struct StrRecord<K: StrKind> {
    value: String,
    advisory_ok: bool,
    _kind: PhantomData<fn() -> K>,
}

impl<K: StrKind> StrRecord<K> {
    /// # Errors
    /// Returns the first failing constraint, see [`StrSpec::check`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        Self::from_nullable(Some(value))
    }

    /// Constructor for sources where the string may be missing altogether.
    ///
    /// # Errors
    /// Returns [`ValueError::RequiredValue`] for `None`, otherwise as [`StrRecord::new`].
    pub fn from_nullable(value: Option<impl Into<String>>) -> Result<Self, ValueError> {
        let value = value.map(Into::into);
        K::SPEC.check(value.as_deref())?;

        // `check` rejected `None` above.
        let value = value.unwrap_or_default();
        let advisory = K::SPEC.advise(&value)?;
        if let Some(mismatch) = advisory {
            debug!(kind = mismatch.kind, pattern = mismatch.pattern, "Advisory pattern mismatch");
        }

        Ok(Self { value, advisory_ok: advisory.is_none(), _kind: PhantomData })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Returns the advisory-pattern notice for this value, if it does not follow it.
    #[must_use]
    pub fn advisory_mismatch(&self) -> Option<AdvisoryMismatch> {
        match (self.advisory_ok, K::SPEC.advisory_pattern) {
            (false, Some(pattern)) => Some(AdvisoryMismatch { kind: K::SPEC.name, pattern }),
            _ => None,
        }
    }

    #[must_use]
    pub const fn spec() -> StrSpec {
        K::SPEC
    }
}

impl<K: StrKind> Clone for StrRecord<K> {
    fn clone(&self) -> Self {
        Self { value: self.value.clone(), advisory_ok: self.advisory_ok, _kind: PhantomData }
    }
}

impl<K: StrKind> PartialEq for StrRecord<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: StrKind> Eq for StrRecord<K> {}

impl<K: StrKind> PartialOrd for StrRecord<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: StrKind> Ord for StrRecord<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.as_bytes().cmp(other.value.as_bytes())
    }
}

impl<K: StrKind> Hash for StrRecord<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TypeId::of::<K>().hash(state);
        self.value.hash(state);
    }
}

impl<K: StrKind> fmt::Debug for StrRecord<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::SPEC.name, self.value)
    }
}

impl<K: StrKind> fmt::Display for StrRecord<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K: StrKind> AsRef<str> for StrRecord<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<K: StrKind> TryFrom<&str> for StrRecord<K> {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, ValueError> {
        Self::new(value)
    }
}

impl<K: StrKind> TryFrom<String> for StrRecord<K> {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, ValueError> {
        Self::new(value)
    }
}

impl<K: StrKind> From<StrRecord<K>> for String {
    fn from(record: StrRecord<K>) -> Self {
        record.value
    }
}

impl<K: StrKind> Serialize for StrRecord<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, K: StrKind> Deserialize<'de> for StrRecord<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `null` must surface as `RequiredValue`, not as a serde type error.
        let value = Option::<String>::deserialize(deserializer)?;
        Self::from_nullable(value).map_err(serde::de::Error::custom)
    }
}
