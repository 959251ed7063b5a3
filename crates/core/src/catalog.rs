//! Catalog browsing rules: kit sort orders, related-kit limits, and the set
//! of entities the admin autocomplete can look up.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Maximum number of related kits attached to a kit detail.
pub const RELATED_KITS_LIMIT: i64 = 8;

/// Number of most recently added kits shown on the home summary.
pub const LATEST_KITS_LIMIT: i64 = 12;

// ---------------------------------------------------------------------------
// Kit sort order
// ---------------------------------------------------------------------------

/// Sort orders accepted by the public kit listing (`?sort=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KitSort {
    #[default]
    Newest,
    Oldest,
    Name,
    ReleaseDate,
    PriceAsc,
    PriceDesc,
}

impl KitSort {
    pub const ALL: &'static [KitSort] = &[
        KitSort::Newest,
        KitSort::Oldest,
        KitSort::Name,
        KitSort::ReleaseDate,
        KitSort::PriceAsc,
        KitSort::PriceDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KitSort::Newest => "newest",
            KitSort::Oldest => "oldest",
            KitSort::Name => "name",
            KitSort::ReleaseDate => "release_date",
            KitSort::PriceAsc => "price_asc",
            KitSort::PriceDesc => "price_desc",
        }
    }

    /// Fixed `ORDER BY` fragment for queries aliasing the kits table as `k`.
    ///
    /// Every variant ends with `k.id` so paging is stable across equal keys.
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            KitSort::Newest => "k.created_at DESC, k.id DESC",
            KitSort::Oldest => "k.created_at ASC, k.id ASC",
            KitSort::Name => "k.name ASC, k.id ASC",
            KitSort::ReleaseDate => "k.release_date DESC NULLS LAST, k.id DESC",
            KitSort::PriceAsc => "k.price_yen ASC NULLS LAST, k.id ASC",
            KitSort::PriceDesc => "k.price_yen DESC NULLS LAST, k.id DESC",
        }
    }

    /// Parse an optional `?sort=` value. Missing or blank means the default.
    pub fn parse_param(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(KitSort::default()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for KitSort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KitSort::ALL
            .iter()
            .copied()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = KitSort::ALL.iter().map(KitSort::as_str).collect();
                CoreError::Validation(format!(
                    "Unknown sort '{s}'. Valid values: {}",
                    valid.join(", ")
                ))
            })
    }
}

impl fmt::Display for KitSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Autocomplete lookup targets
// ---------------------------------------------------------------------------

/// Entities reachable through `GET /admin/lookup/{entity}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupEntity {
    Grades,
    Series,
    Brands,
    Companies,
    Factions,
    Organizations,
    MobileSuits,
    Pilots,
    Kits,
}

impl LookupEntity {
    pub const ALL: &'static [LookupEntity] = &[
        LookupEntity::Grades,
        LookupEntity::Series,
        LookupEntity::Brands,
        LookupEntity::Companies,
        LookupEntity::Factions,
        LookupEntity::Organizations,
        LookupEntity::MobileSuits,
        LookupEntity::Pilots,
        LookupEntity::Kits,
    ];

    /// URL segment used in the route.
    pub fn slug(&self) -> &'static str {
        match self {
            LookupEntity::Grades => "grades",
            LookupEntity::Series => "series",
            LookupEntity::Brands => "brands",
            LookupEntity::Companies => "companies",
            LookupEntity::Factions => "factions",
            LookupEntity::Organizations => "organizations",
            LookupEntity::MobileSuits => "mobile-suits",
            LookupEntity::Pilots => "pilots",
            LookupEntity::Kits => "kits",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            LookupEntity::Grades => "grades",
            LookupEntity::Series => "series",
            LookupEntity::Brands => "brands",
            LookupEntity::Companies => "companies",
            LookupEntity::Factions => "factions",
            LookupEntity::Organizations => "organizations",
            LookupEntity::MobileSuits => "mobile_suits",
            LookupEntity::Pilots => "pilots",
            LookupEntity::Kits => "kits",
        }
    }

    /// Whether the table carries an `is_active` flag that lookups must honour.
    pub fn is_soft_deletable(&self) -> bool {
        !matches!(
            self,
            LookupEntity::Grades | LookupEntity::Series | LookupEntity::Brands
        )
    }
}

impl FromStr for LookupEntity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LookupEntity::ALL
            .iter()
            .copied()
            .find(|entity| entity.slug() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown lookup entity '{s}'")))
    }
}
