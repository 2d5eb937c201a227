//! # Value Records
//!
//! Immutable single-value wrapper types whose constraints are declared once and enforced
//! once, at construction. A record either wraps an `i32` ([`IntRecord`]) or a `String`
//! ([`StrRecord`]); the constraints live in a `const` spec on an uninhabited "kind" type.
//!
//! ## Features
//!
//! * **Integer bounds**: inclusive `[min, max]`.
//! * **String policy**: empty / line-break allowance, a *required* pattern (fails construction)
//!   and an *advisory* pattern (reported, never fails), plus a byte-length limit measured in a
//!   named encoding such as Shift_JIS.
//! * **Kind identity**: records of different kinds are distinct types, and compare unequal through
//!   the type-erased [`DynRecord`] as well.
//! * **Serde**: records (de)serialise as their primitive; deserialisation validates.
//!
//! # Example
//!
//! ```rust
//! use wodi_value::{ValueError, int_kind, str_kind};
//!
//! int_kind! {
//!     /// Map number.
//!     pub MapId(MapIdKind) { min: 0, max: 9_999 }
//! }
//!
//! str_kind! {
//!     /// Common event name.
//!     pub EventName(EventNameKind).allow_empty();
//! }
//!
//! # fn main() -> Result<(), ValueError> {
//! let id = MapId::new(12)?;
//! assert_eq!(id.get(), 12);
//! assert!(MapId::new(10_000).is_err());
//!
//! let name = EventName::new("")?;
//! assert_eq!(name.as_str(), "");
//! assert!(EventName::new("two\nlines").is_err());
//! # Ok(())
//! # }
//! ```

mod dynamic;
mod encoding;
mod error;
mod int;
mod pattern;
mod spec;
mod string;

pub use dynamic::DynRecord;
pub use encoding::TextEncoding;
pub use error::{ValueError, ValueErrorExt};
pub use int::{IntKind, IntRecord};
pub use spec::{AdvisoryMismatch, EncodedLimit, IntSpec, StrSpec};
pub use string::{StrKind, StrRecord};

/// Declares integer record types: a marker kind plus a type alias over [`IntRecord`].
///
/// ```rust
/// wodi_value::int_kind! {
///     pub Percent(PercentKind) { min: 0, max: 100 }
///     pub Offset(OffsetKind) { min: -8, max: 8 }
/// }
///
/// assert!(Percent::new(101).is_err());
/// assert_eq!(Offset::MIN, -8);
/// ```
#[macro_export]
macro_rules! int_kind {
    ($($(#[$meta:meta])* $vis:vis $alias:ident($kind:ident) { min: $min:expr, max: $max:expr $(,)? })+) => {
        $(
            #[derive(Debug)]
            $vis enum $kind {}

            impl $crate::IntKind for $kind {
                const SPEC: $crate::IntSpec = $crate::IntSpec::new(stringify!($alias), $min, $max);
            }

            $(#[$meta])*
            $vis type $alias = $crate::IntRecord<$kind>;
        )+
    };
}

/// Declares string record types: a marker kind plus a type alias over [`StrRecord`].
///
/// The trailing calls are [`StrSpec`] builder methods applied to `StrSpec::new(<alias name>)`.
///
/// ```rust
/// use wodi_value::TextEncoding;
///
/// wodi_value::str_kind! {
///     pub Memo(MemoKind).allow_empty().allow_newline();
///     pub Title(TitleKind).max_encoded_len(TextEncoding::ShiftJis, 16);
/// }
///
/// assert!(Memo::new("line\nbreak").is_ok());
/// assert!(Title::new("あ".repeat(9)).is_err());
/// ```
#[macro_export]
macro_rules! str_kind {
    ($($(#[$meta:meta])* $vis:vis $alias:ident($kind:ident) $(.$method:ident($($arg:expr),* $(,)?))*;)+) => {
        $(
            #[derive(Debug)]
            $vis enum $kind {}

            impl $crate::StrKind for $kind {
                const SPEC: $crate::StrSpec =
                    $crate::StrSpec::new(stringify!($alias)) $(.$method($($arg),*))*;
            }

            $(#[$meta])*
            $vis type $alias = $crate::StrRecord<$kind>;
        )+
    };
}
