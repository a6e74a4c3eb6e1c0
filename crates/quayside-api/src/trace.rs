//! Trace ID middleware for API requests.
//!
//! Generates a unique trace ID for each incoming request and attaches it to:
//! - Request extensions (for use by handlers)
//! - Response header `X-Trace-Id`
//! - tracing span (for structured logging)

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

/// Header name for trace ID propagation.
pub const TRACE_ID_HEADER: &str = "X-Trace-Id";

/// Trace ID stored in request extensions.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

/// Axum middleware that generates a trace ID for each request.
///
/// If the incoming request already carries an `X-Trace-Id` header, it is
/// reused. Otherwise a new UUID v4 is generated.
pub async fn trace_id_middleware(mut request: Request, next: Next) -> Response {
    // Reuse caller-provided trace ID or generate a new one.
    let trace_id = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    tracing::debug!(trace_id = %trace_id, method = %request.method(), uri = %request.uri(), "request");

    // Store in request extensions so handlers can access it.
    request.extensions_mut().insert(TraceId(trace_id.clone()));

    let mut response = next.run(request).await;

    // Attach to response header.
    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }

    response
}
