//! Naming conventions shared by validation, topology and proxy generation.

use artifex_domain::constants::NAMESPACE_SEPARATOR;
use heck::ToLowerCamelCase;

/// `CartId` -> `cartId`, the form constructor parameters and proxy properties use.
#[must_use]
pub fn camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Splits a namespace and removes the longest configured dotted prefix it starts with.
///
/// Prefixes only match on whole segments: `Shop` strips `Shop.Carts` but not `Shopping.Carts`.
#[must_use]
pub fn strip_namespace<'a>(namespace: &'a str, prefixes: &[String]) -> Vec<&'a str> {
    let segments: Vec<&str> =
        namespace.split(NAMESPACE_SEPARATOR).filter(|s| !s.is_empty()).collect();

    let strip = prefixes
        .iter()
        .map(|prefix| {
            prefix.split(NAMESPACE_SEPARATOR).filter(|s| !s.is_empty()).collect::<Vec<_>>()
        })
        .filter(|prefix| !prefix.is_empty() && segments.starts_with(prefix))
        .map(|prefix| prefix.len())
        .max()
        .unwrap_or(0);

    segments[strip..].to_vec()
}
