//! Search-filter and autocomplete helpers.
//!
//! Catalog search is a case-insensitive substring match (`ILIKE`), so user
//! input must have its wildcard characters escaped before it is bound.

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Autocomplete defaults
// ---------------------------------------------------------------------------

/// Default number of autocomplete suggestions.
pub const DEFAULT_LOOKUP_LIMIT: i64 = 10;

/// Maximum number of autocomplete suggestions.
pub const MAX_LOOKUP_LIMIT: i64 = 25;

/// Longest search string accepted; longer input is truncated.
pub const MAX_QUERY_CHARS: usize = 100;

// ---------------------------------------------------------------------------
// Query helpers
// ---------------------------------------------------------------------------

/// Trim a raw `?search=` value. Empty or whitespace-only input yields `None`,
/// meaning "no filter".
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_QUERY_CHARS).collect())
}

/// Build an `ILIKE` substring pattern from user input.
///
/// `\`, `%` and `_` are escaped with a backslash; queries must use
/// `ILIKE $n ESCAPE '\'`.
///
/// # Examples
///
/// ```
/// use gunpla_core::search::build_like_pattern;
/// assert_eq!(build_like_pattern("zaku"), "%zaku%");
/// assert_eq!(build_like_pattern("100%"), "%100\\%%");
/// ```
pub fn build_like_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query))
}

/// Build an `ILIKE` prefix pattern (`term%`), used to rank autocomplete
/// suggestions that start with the typed text ahead of inner matches.
pub fn build_prefix_pattern(query: &str) -> String {
    format!("{}%", escape_like(query))
}

fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Convenience: normalize then build a pattern. `None` means "no filter".
pub fn like_pattern_for(raw: Option<&str>) -> Option<String> {
    normalize_query(raw).map(|q| build_like_pattern(&q))
}

/// Parse a comma-separated id list (badge filters such as `?grade_ids=1,3`).
///
/// Non-numeric and non-positive entries are skipped, duplicates removed, and
/// the first-seen order kept.
pub fn parse_id_list(raw: &str) -> Vec<DbId> {
    let mut ids: Vec<DbId> = Vec::new();
    for part in raw.split(',') {
        if let Ok(id) = part.trim().parse::<DbId>() {
            if id > 0 && !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}
