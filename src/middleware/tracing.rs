// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs and creates spans for every HTTP request

use axum::body::Body;
use http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates `req_<uuid>` identifiers for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeLiftlogRequestId;

impl MakeRequestId for MakeLiftlogRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = format!("req_{}", Uuid::new_v4().simple());
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Layers that set and echo the `x-request-id` header
pub struct RequestIdLayers;

impl RequestIdLayers {
    /// Layer assigning an ID to requests without one
    #[must_use]
    pub fn set() -> SetRequestIdLayer<MakeLiftlogRequestId> {
        SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeLiftlogRequestId,
        )
    }

    /// Layer copying the request ID onto the response
    #[must_use]
    pub fn propagate() -> PropagateRequestIdLayer {
        PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
    }
}

/// Create a tracing span for an HTTP request
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}
