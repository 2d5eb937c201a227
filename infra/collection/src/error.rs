use std::borrow::Cow;

/// Errors raised by constrained collection construction and mutation.
#[wodi_derive::wodi_error]
pub enum CollectionError {
    /// An absent sequence was supplied where a full sequence is required.
    #[error("Collection is required{}: {message}", format_context(.context))]
    NullCollection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Element is required{}: {message}", format_context(.context))]
    NullElement { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The supplied length is outside the declared capacity.
    #[error("Length mismatch{}: {message}", format_context(.context))]
    LengthMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Index out of range{}: {message}", format_context(.context))]
    IndexOutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Count out of range{}: {message}", format_context(.context))]
    CountOutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// `index + count` runs past the end of the collection.
    #[error("Invalid range{}: {message}", format_context(.context))]
    InvalidRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Capacity exceeded{}: {message}", format_context(.context))]
    CapacityExceeded { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Capacity underflow{}: {message}", format_context(.context))]
    CapacityUnderflow { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The collection kind is defective (e.g. its default factory yields nothing).
    /// This is a programming error in the kind declaration, not bad caller input.
    #[error("Invariant violation{}: {message}", format_context(.context))]
    InvariantViolation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
