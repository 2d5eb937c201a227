use std::borrow::Cow;

/// Errors raised while constructing a validated value record.
#[wodi_derive::wodi_error]
pub enum ValueError {
    /// Integer outside the inclusive bounds declared by its kind.
    #[error("Value out of range{}: {message}", format_context(.context))]
    OutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An absent string was supplied. Never allowed, regardless of other flags.
    #[error("Value is required{}: {message}", format_context(.context))]
    RequiredValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Empty value not allowed{}: {message}", format_context(.context))]
    EmptyNotAllowed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Line break not allowed{}: {message}", format_context(.context))]
    NewlineNotAllowed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The value does not match the required pattern of its kind.
    #[error("Pattern mismatch{}: {message}", format_context(.context))]
    PatternMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Encoded length exceeded{}: {message}", format_context(.context))]
    EncodedLengthExceeded { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The kind declaration itself is defective (e.g. a pattern that does not compile).
    /// Not caused by caller input and not recoverable by retrying with another value.
    #[error("Invariant violation{}: {message}", format_context(.context))]
    InvariantViolation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
