//! Main relay service implementation
//!
//! The `RelayService` is the entry point for the relay: it owns the upstream
//! client and exposes the axum router with the two relay endpoints plus the
//! documentation and health endpoints.
//!
//! ## Service Lifecycle
//!
//! ```rust,ignore
//! use face_relay::relay::{RelayConfig, RelayService};
//!
//! let config = RelayConfig::new(subscription_key);
//! let router = RelayService::new(config).into_router();
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```
//!
//! Every inbound request completes with exactly one response: upstream
//! replies (2xx or not) are relayed verbatim, and transport failures are
//! mapped onto a structured gateway error instead of being swallowed.

use crate::docs;
use crate::relay::error_response::ErrorResponseExt;
use crate::relay::headers::{content_types, paths, X_REQUEST_ID};
use crate::relay::middleware::{logging_middleware, request_id_middleware};
use crate::relay::query::{DetectParams, VerifyRequest};
use crate::relay::types::{RelayConfig, RelayError};
use crate::relay::upstream::{UpstreamClient, UpstreamReply};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Relay service owning the upstream client
pub struct RelayService {
    upstream: UpstreamClient,
}

impl RelayService {
    /// Create a new relay service
    pub fn new(config: RelayConfig) -> Self {
        Self {
            upstream: UpstreamClient::new(config),
        }
    }

    /// Create the axum router for the relay service with middleware
    pub fn into_router(self) -> Router {
        Router::new()
            .route(paths::DETECT, post(detect_handler))
            .route(paths::VERIFY, post(verify_handler))
            .route(paths::API_DOCS, get(api_docs_handler))
            .route(paths::HEALTH, get(health_handler))
            .with_state(Arc::new(self))
            .layer(from_fn(logging_middleware))
            .layer(from_fn(request_id_middleware))
            .layer(CorsLayer::permissive())
    }
}

/// Handler for `POST /detect`: forwards the raw body and the supplied query
/// fields to the detection endpoint
async fn detect_handler(
    State(relay): State<Arc<RelayService>>,
    Query(params): Query<DetectParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match relay.upstream.detect(&params, body).await {
        Ok(reply) => relay_response(reply),
        Err(error) => error_reply(error, &headers),
    }
}

/// Handler for `POST /verify`: forwards the two face IDs to the verification
/// endpoint
async fn verify_handler(
    State(relay): State<Arc<RelayService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Parsed leniently: a body that is not a JSON object forwards as an
    // empty one, and the upstream produces the rejection
    let request_body: VerifyRequest = serde_json::from_slice(&body).unwrap_or_default();

    match relay.upstream.verify(&request_body).await {
        Ok(reply) => relay_response(reply),
        Err(error) => error_reply(error, &headers),
    }
}

/// Handler for `GET /api-docs`: the generated endpoint documentation
async fn api_docs_handler() -> Json<&'static serde_json::Value> {
    Json(docs::openapi_document())
}

/// Health check handler
async fn health_handler() -> &'static str {
    "OK"
}

/// Relay an upstream reply verbatim: its status code and body
fn relay_response(reply: UpstreamReply) -> Response {
    (
        reply.status,
        [(header::CONTENT_TYPE, content_types::APPLICATION_JSON)],
        reply.body,
    )
        .into_response()
}

/// Map a relay failure onto an explicit error response for the caller
fn error_reply(error: RelayError, headers: &HeaderMap) -> Response {
    let mut error_response = error.to_error_response();

    if let Some(request_id) = headers.get(X_REQUEST_ID).and_then(|h| h.to_str().ok()) {
        error_response = error_response.with_request_id(request_id);
    }

    error_response.into_response_with_status(error.status_code())
}
