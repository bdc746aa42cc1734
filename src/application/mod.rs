//! Application layer services.
//!
//! Services sit between callers (HTTP handlers, the CLI) and the pure
//! generator. They own configuration such as sanitizer limits and add
//! logging around each operation.
//!
//! # Available Services
//!
//! - [`services::listing_service::ListingService`] - Brief sanitization, pack generation and previews
//! - [`services::sanitizer`] - Raw brief validation and list parsing

pub mod services;
