//! Domain layer containing the listing data model and validation errors.
//!
//! # Architecture
//!
//! - [`entities`] - Brief, pack and raw input structures
//! - [`validation`] - Field-scoped validation errors (`invalid_<field>`)
//!
//! The domain layer has no dependencies on the HTTP or CLI layers. The
//! generation pipeline that turns a brief into a pack lives in
//! [`crate::generator`].

pub mod entities;
pub mod validation;

pub use validation::{Field, ValidationError};
