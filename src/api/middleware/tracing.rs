//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// - One `INFO` span per request with method, URI and HTTP version
/// - Response status and latency in milliseconds at `INFO`
/// - Server errors (5xx) additionally at `ERROR`
///
/// Briefs are never logged; only the generated pack summary is, by
/// [`crate::application::services::ListingService`].
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/packs version=HTTP/1.1}: Listing pack generated score=88 tags=13
/// INFO request{method=POST uri=/api/packs version=HTTP/1.1}: finished processing request latency=2 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
