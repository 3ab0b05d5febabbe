//! HTTP header constants and utilities for the relay service
//!
//! Centralizes header names and well-known paths so the handlers,
//! middleware, and tests all agree on them.

use ::http::header;

/// Header carrying the Azure Face API subscription key on upstream calls
pub const OCP_APIM_SUBSCRIPTION_KEY: &str = "ocp-apim-subscription-key";

/// Header name for request ID used for tracing and correlation
pub const X_REQUEST_ID: &str = "x-request-id";

/// Standard header re-exports for convenience
pub use header::{CONTENT_LENGTH, CONTENT_TYPE, HOST, USER_AGENT};

/// Well-known paths
pub mod paths {
    /// Face detection relay endpoint
    pub const DETECT: &str = "/detect";

    /// Face verification relay endpoint
    pub const VERIFY: &str = "/verify";

    /// Generated API documentation endpoint
    pub const API_DOCS: &str = "/api-docs";

    /// Health check endpoint path
    pub const HEALTH: &str = "/health";
}

/// Common content types
pub mod content_types {
    pub const APPLICATION_JSON: &str = "application/json";
}
