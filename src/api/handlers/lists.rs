//! Handler for delimited list parsing.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::lists::{ParseListRequest, ParseListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Splits and normalizes comma or newline delimited keywords or materials.
///
/// # Endpoint
///
/// `POST /api/lists/parse`
///
/// # Request Body
///
/// ```json
/// { "text": "wedding gift, bridesmaid gift\nhandmade box", "kind": "keywords" }
/// ```
///
/// # Response
///
/// ```json
/// { "items": ["wedding gift", "bridesmaid gift", "handmade box"], "count": 3 }
/// ```
///
/// # Errors
///
/// - `validation_error` if the body is malformed or `text` exceeds 4000 characters
/// - `invalid_keywordsCsv` if no keyword survives normalization
/// - `invalid_materialsCsv` if a material entry is too long
pub async fn parse_list_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseListRequest>, JsonRejection>,
) -> Result<Json<ParseListResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Malformed list request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let items = state
        .listing_service
        .parse_list(&payload.text, payload.kind.into())?;

    Ok(Json(items.into()))
}
