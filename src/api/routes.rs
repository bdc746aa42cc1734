//! API route configuration.

use crate::api::handlers::{create_pack_handler, parse_list_handler, preview_pack_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes. None of them require authentication.
///
/// # Endpoints
///
/// - `POST /packs`         - Generate a full listing pack from a brief
/// - `POST /packs/preview` - Generate a pack and return its preview
/// - `POST /lists/parse`   - Split delimited keywords or materials
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/packs", post(create_pack_handler))
        .route("/packs/preview", post(preview_pack_handler))
        .route("/lists/parse", post(parse_list_handler))
}
