//! Domain types and pure helpers shared by the database and API crates.
//!
//! Nothing in here performs IO, so every module can be unit tested in
//! isolation and reused by future tooling.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod roles;
pub mod search;
pub mod types;
pub mod uploads;
