//! Request ID middleware for correlating logs with requests.
//!
//! Reuses a UUID supplied by the caller in `x-request-id`, or generates a v4
//! one, and runs the request inside a tracing span carrying that id. The id is
//! echoed back in the response so probes and proxies can match log lines.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::REQUEST_ID_HEADER;

/// Take the caller's id if it is a valid UUID, otherwise mint one.
fn resolve_request_id(request: &Request) -> Uuid {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .unwrap_or_else(Uuid::new_v4)
}

/// Middleware that attaches a request id and wraps the request in a span.
///
/// Should be the outermost layer so the span covers everything else.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response
                .headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        response
    }
    .instrument(span)
    .await
}
