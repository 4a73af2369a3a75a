//! HTTP request/response tracing middleware.

use axum::extract::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span factory recording method and path (query string left out).
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSpan;

impl<B> MakeSpan<B> for PageSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Creates a tracing middleware for page, data and action requests.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET path=/settings/apps}: finished processing request latency=14 ms status=200
/// ERROR request{method=GET path=/health}: response failed classification=Status code: 503 Service Unavailable latency=2 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, PageSpan> {
    TraceLayer::new_for_http()
        .make_span_with(PageSpan)
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
