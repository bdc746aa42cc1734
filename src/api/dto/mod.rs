//! Data Transfer Objects for API requests and responses.
//!
//! Briefs, packs and previews travel as the domain entities themselves
//! ([`crate::domain::entities`]); only the endpoint-specific shapes live here.

pub mod health;
pub mod lists;
