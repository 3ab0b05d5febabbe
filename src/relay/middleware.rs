//! Middleware for the relay service

use crate::relay::headers::X_REQUEST_ID;
use crate::relay::types::RequestId;
use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// Request ID middleware - ensures every request has a unique ID for tracing
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    // Keep a caller-supplied ID when it parses as a UUID, otherwise mint one
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|existing| existing.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from)
        .unwrap_or_default();

    let header_value = HeaderValue::from_str(&request_id.to_string())
        .expect("UUID strings are always valid header values");

    request
        .headers_mut()
        .insert(X_REQUEST_ID, header_value.clone());

    let mut response = next.run(request).await;

    response.headers_mut().insert(X_REQUEST_ID, header_value);

    response
}

/// Logging middleware - logs request/response details with timing
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    info!(
        request_id = request_id,
        method = %method,
        path = %uri.path(),
        "Incoming request"
    );

    let response = next.run(request).await;
    let duration = start.elapsed();

    if response.status().is_server_error() {
        error!(
            request_id = request_id,
            method = %method,
            path = %uri.path(),
            status = response.status().as_u16(),
            duration_ms = duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            request_id = request_id,
            method = %method,
            path = %uri.path(),
            status = response.status().as_u16(),
            duration_ms = duration.as_millis(),
            "Request completed"
        );
    }

    response
}
