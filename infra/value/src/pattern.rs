use crate::error::ValueError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Compiled patterns, keyed by their source. Kind patterns are `'static`, so the cache is bounded
/// by the number of declared kinds.
static PATTERNS: LazyLock<RwLock<FxHashMap<&'static str, Regex>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Tests `value` against `pattern`, compiling and caching the pattern on first use.
///
/// # Errors
/// Returns [`ValueError::InvariantViolation`] if the pattern does not compile.
pub(crate) fn is_match(
    kind: &'static str,
    pattern: &'static str,
    value: &str,
) -> Result<bool, ValueError> {
    if let Some(regex) = PATTERNS.read().get(pattern) {
        return Ok(regex.is_match(value));
    }

    let regex = Regex::new(pattern).map_err(|e| ValueError::InvariantViolation {
        message: format!("`{pattern}` is not a valid pattern: {e}").into(),
        context: Some(kind.into()),
    })?;
    trace!(kind, pattern, "Compiled value pattern");

    let matched = regex.is_match(value);
    PATTERNS.write().entry(pattern).or_insert(regex);
    Ok(matched)
}
