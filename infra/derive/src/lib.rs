#![allow(unreachable_pub)]

//! Procedural macros for the wodi workspace.
//!
//! Each crate declares one error enum and marks it with [`macro@wodi_error`], so every error
//! in the workspace carries an optional context note and a variant-name code.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into the crate's error type.
///
/// Generated items:
/// * `#[derive(Debug, thiserror::Error)]`, skipping whichever the enum already derives.
/// * `kind(&self) -> &'static str`, the variant name.
/// * `<Enum>Ext<T>` with `context(..)`, implemented for `Result<T, Enum>` (fills the variant's
///   `context` field) and for `Result<T, Source>` of every variant wrapping a `source`.
/// * `From<Source>` for those variants, so `?` lifts upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant
///   exists.
/// * A private `format_context` helper for `#[error(..)]` strings: `" (note)"` or `""`.
///
/// Variants must use named fields. A `context` field must be `Option<Cow<'static, str>>`, and a
/// variant with a `source` (or `#[source]`/`#[from]` field) must have one.
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[wodi_derive::wodi_error]
/// pub enum ValueError {
///     #[error("Value out of range{}: {message}", format_context(.context))]
///     OutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// let err = ValueError::OutOfRange { message: "42".into(), context: None };
/// assert_eq!(err.kind(), "OutOfRange");
/// ```
#[proc_macro_attribute]
pub fn wodi_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(&input).into()
}
