//! # Constrained Collections
//!
//! [`ConstrainedVec`] is an ordered sequence whose length always stays inside a capacity declared
//! by its [`CollectionKind`]: either a fixed length or an inclusive `min..=max` range. Slots
//! are filled from the kind's positional default factory on creation, reset, and growth.
//!
//! ## Features
//!
//! * **Length invariant**: every constructor and mutator rejects results outside the capacity.
//! * **Observers**: per-instance callbacks for replace, clear, insert, and remove. Cloning
//!   never carries them over.
//! * **Structural equality**: two collections are equal when their items are equal in order.
//! * **Serde**: serialises as a plain sequence; deserialisation re-validates length and
//!   rejects `null` elements.
//!
//! # Example
//!
//! ```rust
//! use wodi_collection::{CollectionError, CollectionKind, CollectionSpec, ConstrainedVec};
//!
//! #[derive(Debug)]
//! enum Choices {}
//!
//! impl CollectionKind for Choices {
//!     type Item = String;
//!     const SPEC: CollectionSpec = CollectionSpec::bounded("Choices", 1, 3);
//!
//!     fn default_item(index: usize) -> Option<String> {
//!         Some(format!("Choice {}", index + 1))
//!     }
//! }
//!
//! # fn main() -> Result<(), CollectionError> {
//! let mut choices = ConstrainedVec::<Choices>::new()?;
//! choices.push("Yes".to_owned())?;
//! choices.push("No".to_owned())?;
//! assert_eq!(choices.len(), 3);
//! assert!(choices.push("Maybe".to_owned()).is_err());
//!
//! choices.clear()?;
//! assert_eq!(choices.as_slice(), &["Choice 1".to_owned()]);
//! # Ok(())
//! # }
//! ```

mod bounded;
mod error;
mod kind;
mod observer;
mod vec;

pub use error::{CollectionError, CollectionErrorExt};
pub use kind::{Capacity, CollectionKind, CollectionSpec};
pub use observer::ObserverId;
pub use vec::ConstrainedVec;
