#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the Artifex workspace.
//!
//! Every pipeline stage declares exactly one error enum and annotates it with
//! [`macro@artifex_error`]. The macro keeps the stage errors uniform so the facade
//! can aggregate them and the CLI can report them with a stable diagnostic code.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining stage error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source`
///   field (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Diagnostic Codes**: Implements `code(&self) -> &'static str` returning the
///   variant name, used by the CLI when reporting a failed run.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use artifex_derive::artifex_error;
/// use std::borrow::Cow;
///
/// #[artifex_error]
/// pub enum StoreError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Configuration not found{}: {path}", format_context(.context))]
///     MissingConfiguration { path: String, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, StoreError> {
///     std::fs::read_to_string(path).context("Reading bounded context")
/// }
/// ```
#[proc_macro_attribute]
pub fn artifex_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
