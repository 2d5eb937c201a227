use std::borrow::Cow;

#[wodi_derive::wodi_error]
pub enum RegistryError {
    /// Container keys must be non-empty and single-line.
    #[error("Invalid container key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No creation entry exists for the capability in the container.
    #[error("Service not registered{}: {message}", format_context(.context))]
    NotRegistered { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
