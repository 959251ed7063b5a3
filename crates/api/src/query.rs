//! Shared query parameter types for API handlers.

use gunpla_core::pagination::PageRequest;
use gunpla_core::search::{like_pattern_for, parse_id_list};
use gunpla_core::types::DbId;
use gunpla_db::models::common::ListFilter;
use gunpla_db::models::kit::KitFilter;
use serde::Deserialize;

/// `?search=&page=&per_page=&include_inactive=&series_id=` for entity lists.
///
/// `include_inactive` is only honoured by admin handlers.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    #[serde(default)]
    pub include_inactive: bool,
    pub series_id: Option<DbId>,
}

impl ListParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }

    /// Filter for public endpoints: inactive rows are always hidden.
    pub fn public_filter(&self) -> ListFilter {
        ListFilter {
            search_pattern: like_pattern_for(self.search.as_deref()),
            include_inactive: false,
            series_id: self.series_id,
        }
    }

    pub fn admin_filter(&self) -> ListFilter {
        ListFilter {
            include_inactive: self.include_inactive,
            ..self.public_filter()
        }
    }
}

/// `?search=` for small reference lists (grades, series, brands).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    pub fn pattern(&self) -> Option<String> {
        like_pattern_for(self.search.as_deref())
    }
}

/// Query parameters of the kit listing.
///
/// `grade_id` and the comma-separated `grade_ids` badge filter are merged.
#[derive(Debug, Default, Deserialize)]
pub struct KitListParams {
    pub search: Option<String>,
    pub grade_id: Option<DbId>,
    pub grade_ids: Option<String>,
    pub series_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub mobile_suit_id: Option<DbId>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    #[serde(default)]
    pub include_inactive: bool,
}

impl KitListParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }

    pub fn filter(&self, allow_inactive: bool) -> KitFilter {
        let mut grade_ids = self
            .grade_ids
            .as_deref()
            .map(parse_id_list)
            .unwrap_or_default();
        if let Some(id) = self.grade_id {
            if !grade_ids.contains(&id) {
                grade_ids.push(id);
            }
        }

        KitFilter {
            search_pattern: like_pattern_for(self.search.as_deref()),
            grade_ids,
            series_id: self.series_id,
            brand_id: self.brand_id,
            mobile_suit_id: self.mobile_suit_id,
            include_inactive: allow_inactive && self.include_inactive,
        }
    }
}

/// `?q=&limit=` for autocomplete.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
}
