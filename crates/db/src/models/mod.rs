//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod brand;
pub mod catalog;
pub mod common;
pub mod company;
pub mod faction;
pub mod grade;
pub mod kit;
pub mod lookup;
pub mod mobile_suit;
pub mod organization;
pub mod pilot;
pub mod series;
pub mod session;
pub mod user;
