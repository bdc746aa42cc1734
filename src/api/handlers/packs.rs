//! Handlers for listing pack generation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;

use crate::domain::entities::{ListingPack, PackPreview, RawListingInput};
use crate::error::AppError;
use crate::state::AppState;

/// Generates a full listing pack from a brief.
///
/// # Endpoint
///
/// `POST /api/packs`
///
/// # Request Body
///
/// ```json
/// {
///   "shopName": "Clay Studio",
///   "productType": "ring dish",
///   "targetAudience": "brides",
///   "primaryKeyword": "personalized ring dish",
///   "supportingKeywords": ["engagement gift", "bridal shower gift"],
///   "materials": ["ceramic", "glaze"],
///   "tone": "warm",
///   "priceBand": "$25-$40",
///   "processingTimeDays": 3,
///   "personalization": true,
///   "includeUkSpelling": false
/// }
/// ```
///
/// `keywordsCsv` / `materialsCsv` may replace the list fields.
///
/// # Errors
///
/// Returns 400 Bad Request with code `invalid_<field>` for the first invalid
/// field, or `validation_error` for a malformed body.
pub async fn create_pack_handler(
    State(state): State<AppState>,
    payload: Result<Json<RawListingInput>, JsonRejection>,
) -> Result<Json<ListingPack>, AppError> {
    let raw = parse_brief(payload)?;
    let pack = state.listing_service.generate(&raw)?;

    Ok(Json(pack))
}

/// Generates a pack and returns only its preview.
///
/// # Endpoint
///
/// `POST /api/packs/preview`
///
/// Same request body and errors as [`create_pack_handler`].
///
/// # Response
///
/// ```json
/// {
///   "title": "Personalized Ring Dish | Ring Dish | ...",
///   "score": 88,
///   "tags": ["engagement gift", "bridal shower gift", "ceramic tray"],
///   "locked": true,
///   "lockedTags": 10,
///   "lockedFaq": 3
/// }
/// ```
pub async fn preview_pack_handler(
    State(state): State<AppState>,
    payload: Result<Json<RawListingInput>, JsonRejection>,
) -> Result<Json<PackPreview>, AppError> {
    let raw = parse_brief(payload)?;
    let pack = state.listing_service.generate(&raw)?;

    Ok(Json(state.listing_service.preview(&pack)))
}

fn parse_brief(
    payload: Result<Json<RawListingInput>, JsonRejection>,
) -> Result<RawListingInput, AppError> {
    payload.map(|Json(raw)| raw).map_err(|rejection| {
        AppError::bad_request(
            "Malformed brief",
            json!({ "reason": rejection.body_text() }),
        )
    })
}
