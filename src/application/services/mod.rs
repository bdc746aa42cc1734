//! Business logic services for the application layer.

pub mod listing_service;
pub mod sanitizer;

pub use listing_service::{ListKind, ListingService};
pub use sanitizer::{SanitizeLimits, parse_keyword_list, parse_material_list, sanitize};
