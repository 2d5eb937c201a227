use std::borrow::Cow;
use wodi_registry::RegistryError;

#[wodi_derive::wodi_error]
pub enum KernelError {
    /// The configured target container key was rejected by the registry.
    #[error("Registry error{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("Kernel validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
