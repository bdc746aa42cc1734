//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod lists;
pub mod packs;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use lists::parse_list_handler;
pub use packs::{create_pack_handler, preview_pack_handler};
