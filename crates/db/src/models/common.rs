//! Filter types shared by the list queries of several repositories.

use gunpla_core::types::DbId;

/// Search + visibility filter for admin and public entity lists.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Escaped `ILIKE` pattern (see `gunpla_core::search::like_pattern_for`).
    pub search_pattern: Option<String>,
    /// Include rows whose `is_active` flag is false. Ignored by tables
    /// without the flag.
    pub include_inactive: bool,
    /// Restrict to one series. Ignored by tables without a `series_id` column.
    pub series_id: Option<DbId>,
}

impl ListFilter {
    /// Filter used by public endpoints: active rows only.
    pub fn public(search_pattern: Option<String>) -> Self {
        Self {
            search_pattern,
            include_inactive: false,
            series_id: None,
        }
    }
}
