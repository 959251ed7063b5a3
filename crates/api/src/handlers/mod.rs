//! HTTP handlers, one module per resource.
//!
//! Public browse handlers never expose inactive rows; admin handlers take a
//! [`RequireEditor`](crate::middleware::rbac::RequireEditor) or
//! [`RequireAdmin`](crate::middleware::rbac::RequireAdmin) extractor.

pub mod auth;
pub mod brand;
pub mod catalog;
pub mod company;
pub mod faction;
pub mod grade;
pub mod kit;
pub mod lookup;
pub mod mobile_suit;
pub mod organization;
pub mod pilot;
pub mod relations;
pub mod series;
pub mod uploads;
pub mod users;
