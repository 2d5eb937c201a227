use crate::int::{IntKind, IntRecord};
use crate::string::{StrKind, StrRecord};
use std::any::Any;
use std::fmt::Debug;

/// Type-erased view over any value record, for heterogeneous storage and comparison.
///
/// [`DynRecord::dyn_eq`] is `true` only when both sides are the same concrete record type and
/// hold equal values; two kinds wrapping the same primitive never compare equal.
pub trait DynRecord: Any + Debug + Send + Sync {
    /// Name declared by the record's kind.
    fn kind_name(&self) -> &'static str;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn DynRecord) -> bool;
}

impl<K: IntKind> DynRecord for IntRecord<K> {
    fn kind_name(&self) -> &'static str {
        K::SPEC.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynRecord) -> bool {
        other.as_any().downcast_ref::<Self>().is_some_and(|other| other == self)
    }
}

impl<K: StrKind> DynRecord for StrRecord<K> {
    fn kind_name(&self) -> &'static str {
        K::SPEC.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynRecord) -> bool {
        other.as_any().downcast_ref::<Self>().is_some_and(|other| other == self)
    }
}

impl PartialEq for dyn DynRecord {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}
