//! Utility functions shared across layers.
//!
//! - [`text`] - Whitespace collapsing, keyword normalization, title-casing
//!   and character-based length helpers

pub mod text;
