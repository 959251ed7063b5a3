//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod brand_repo;
pub mod catalog_repo;
pub mod company_repo;
pub mod faction_repo;
pub mod grade_repo;
pub mod kit_repo;
pub mod lookup_repo;
pub mod mobile_suit_organization_repo;
pub mod mobile_suit_pilot_repo;
pub mod mobile_suit_repo;
pub mod organization_faction_repo;
pub mod organization_repo;
pub mod pilot_repo;
pub mod series_repo;
pub mod session_repo;
pub mod user_repo;

pub use brand_repo::BrandRepo;
pub use catalog_repo::CatalogRepo;
pub use company_repo::CompanyRepo;
pub use faction_repo::FactionRepo;
pub use grade_repo::GradeRepo;
pub use kit_repo::KitRepo;
pub use lookup_repo::LookupRepo;
pub use mobile_suit_organization_repo::MobileSuitOrganizationRepo;
pub use mobile_suit_pilot_repo::MobileSuitPilotRepo;
pub use mobile_suit_repo::MobileSuitRepo;
pub use organization_faction_repo::OrganizationFactionRepo;
pub use organization_repo::OrganizationRepo;
pub use pilot_repo::PilotRepo;
pub use series_repo::SeriesRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
