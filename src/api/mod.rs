//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into [`crate::application::services::ListingService`]
//! calls and shapes the responses. The layer is stateless: no sessions, no
//! persistence.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies not covered by domain entities
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
