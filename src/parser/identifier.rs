//! Identifier and type-name normalization for Oracle DDL.
//!
//! Every identifier used as a catalog key or compared for equality goes
//! through [`normalize_identifier`] first, so quoted and unquoted spellings
//! of the same name collide as intended.

/// Strips one layer of surrounding double quotes from an identifier and
/// removes any embedded carriage-return/line-feed characters.
///
/// Quotes are stripped only when present on both ends; an unbalanced quote
/// is kept as part of the name. The front end only ever emits balanced
/// quoting, so a lone quote never reaches the catalog in practice.
///
/// Idempotent: normalizing an already-normalized identifier is a no-op.
pub fn normalize_identifier(ident: &str) -> String {
    let stripped = ident
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(ident);
    stripped.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// Normalizes a base type keyword: upper-cases it and strips a trailing
/// literal `_T` suffix if present.
///
/// Applies to the base keyword only; length/precision suffixes like `(30)`
/// or `(10,2)` are appended afterwards, untouched.
pub fn normalize_type_name(type_name: &str) -> String {
    let upper = type_name.to_uppercase();
    match upper.strip_suffix("_T") {
        Some(base) => base.to_string(),
        None => upper,
    }
}
