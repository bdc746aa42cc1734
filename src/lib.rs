//! # Listing Pack
//!
//! Generates marketplace listing copy (title, tags, description, FAQ, photo
//! plan and launch checklist) from a structured product brief.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Brief, pack and preview entities, validation errors
//! - **Generator** ([`generator`]) - The pure brief → pack pipeline
//! - **Application Layer** ([`application`]) - Sanitization and the [`ListingService`]
//! - **API Layer** ([`api`]) - Stateless REST handlers, DTOs and middleware
//!
//! ## Core Operations
//!
//! - [`application::services::sanitize`] - raw brief → [`domain::entities::ListingInput`]
//!   or an `invalid_<field>` error
//! - [`application::services::parse_keyword_list`] / [`application::services::parse_material_list`]
//!   - delimited text → normalized list
//! - [`generator::build_pack`] - brief → [`domain::entities::ListingPack`]
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the HTTP service
//! cargo run
//!
//! # Or generate a pack from a JSON brief on the command line
//! cargo run --bin listing-pack -- generate --brief brief.json
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod generator;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::ListingService;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ListKind, ListingService, SanitizeLimits, parse_keyword_list, parse_material_list,
        sanitize,
    };
    pub use crate::domain::entities::{
        FaqItem, ListingInput, ListingPack, PackPreview, RawListingInput, Tone,
    };
    pub use crate::domain::{Field, ValidationError};
    pub use crate::error::AppError;
    pub use crate::generator::build_pack;
    pub use crate::state::AppState;
}
