//! Handler for health check endpoint.

use axum::{Json, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::{ListingInput, Tone};
use crate::generator::build_pack;
use crate::generator::tags::MAX_TAGS;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The generator produced a valid pack
/// - **503 Service Unavailable**: The smoke pack broke an invariant
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "generator": { "status": "ok", "message": "Sample pack scored 79" }
///   }
/// }
/// ```
pub async fn health_handler() -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let generator_check = check_generator();
    let healthy = generator_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            generator: generator_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Builds a pack from a fixed brief and checks its shape.
fn check_generator() -> CheckStatus {
    let pack = build_pack(&sample_brief());

    if pack.tags.is_empty() || pack.tags.len() > MAX_TAGS || pack.title.is_empty() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Sample pack is malformed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Sample pack scored {}", pack.score)),
        }
    }
}

fn sample_brief() -> ListingInput {
    ListingInput {
        shop_name: "Health Check".to_string(),
        product_type: "candle".to_string(),
        target_audience: "new homeowners".to_string(),
        primary_keyword: "soy candle".to_string(),
        supporting_keywords: vec!["housewarming gift".to_string()],
        materials: vec!["soy wax".to_string()],
        tone: Tone::Minimal,
        price_band: "$15-$25".to_string(),
        processing_time_days: 2,
        personalization: false,
        include_uk_spelling: false,
    }
}
