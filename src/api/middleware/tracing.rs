//! HTTP request/response tracing middleware.

use axum::extract::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::api::middleware::request_id::request_id;

/// Span constructor used by [`layer`].
pub type MakeRequestSpan = fn(&Request) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with:
///   - Request id (see [`crate::api::middleware::request_id`])
///   - HTTP method
///   - URI path
///   - HTTP version
///
/// **On Response:**
/// - Logs at `INFO` level with:
///   - Status code
///   - Latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{request_id=8a0c.. method=POST uri=/url version=HTTP/1.1}: url saved alias=abc123
/// INFO request{request_id=8a0c.. method=POST uri=/url version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
///
/// Must sit inside [`crate::api::middleware::request_id::set_layer`] so the
/// id is already assigned when the span is created.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeRequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request.headers()),
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
    )
}
