//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`RawListingInput`] - An unvalidated brief as received from a caller
//! - [`ListingInput`] - A sanitized brief, the only input the generator accepts
//! - [`ListingPack`] - The generated bundle of listing copy
//! - [`PackPreview`] - A pack truncated for display before payment
//!
//! Entities are plain data. Sanitization lives in
//! [`crate::application::services::sanitizer`], generation in [`crate::generator`].

pub mod brief;
pub mod pack;
pub mod preview;
pub mod raw_brief;

pub use brief::{ListingInput, Tone};
pub use pack::{FaqItem, ListingPack};
pub use preview::PackPreview;
pub use raw_brief::RawListingInput;
