#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use listing_pack::application::services::{ListingService, SanitizeLimits};
use listing_pack::routes::app_router;
use listing_pack::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(ListingService::new(SanitizeLimits::default(), 3)))
}

/// Serves the full application router, fallback and path normalization included.
pub fn create_test_server() -> TestServer {
    let app = app_router(create_test_state());

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// The ring dish brief used across tests. Scores 88 with 13 tags.
pub fn ring_dish_brief() -> Value {
    json!({
        "shopName": "Clay Studio",
        "productType": "ring dish",
        "targetAudience": "brides",
        "primaryKeyword": "personalized ring dish",
        "supportingKeywords": ["engagement gift", "bridal shower gift", "ceramic tray"],
        "materials": ["ceramic", "glaze", "gold paint"],
        "tone": "warm",
        "priceBand": "$25-$40",
        "processingTimeDays": 3,
        "personalization": true
    })
}

pub fn brief_with(field: &str, value: Value) -> Value {
    let mut brief = ring_dish_brief();
    brief[field] = value;
    brief
}

pub fn brief_without(field: &str) -> Value {
    let mut brief = ring_dish_brief();
    brief.as_object_mut().unwrap().remove(field);
    brief
}
