//! Type definitions for the relay module

use nutype::nutype;
use thiserror::Error;
use uuid::Uuid;

/// Fixed upstream endpoint for face detection
pub const DETECTION_ENDPOINT: &str =
    "https://vsv-faceres.cognitiveservices.azure.com/face/v1.0/detect";

/// Fixed upstream endpoint for face verification
pub const VERIFICATION_ENDPOINT: &str =
    "https://vsv-faceres.cognitiveservices.azure.com/face/v1.0/verify";

/// Environment variable that redirects both upstream endpoints to an
/// alternative base URL (used to point the relay at a stub server)
pub const UPSTREAM_OVERRIDE_ENV: &str = "FACE_RELAY_UPSTREAM_OVERRIDE";

/// Azure Face API subscription key injected into every upstream call
#[nutype(
    derive(Clone, Debug, Hash, PartialEq, Eq, Deserialize, Serialize, TryFrom, AsRef),
    validate(predicate = |s: &str| !s.is_empty()),
)]
pub struct SubscriptionKey(String);

/// Absolute URL of an upstream endpoint
#[nutype(
    derive(Clone, Debug, Display, Deserialize, Serialize, TryFrom, AsRef),
    validate(predicate = |s: &str| s.starts_with("http://") || s.starts_with("https://")),
)]
pub struct EndpointUrl(String);

/// Request ID for correlating log lines and error responses
#[derive(Clone, Copy, Debug, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for RequestId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl AsRef<Uuid> for RequestId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl RequestId {
    /// Create a new RequestId with a v7 UUID
    pub fn new() -> Self {
        Self::from(Uuid::now_v7())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Relay configuration: the secret plus the two upstream endpoints
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub subscription_key: SubscriptionKey,
    pub detection_endpoint: EndpointUrl,
    pub verification_endpoint: EndpointUrl,
}

impl RelayConfig {
    /// Create a configuration pointing at the compiled-in Azure endpoints.
    ///
    /// If `FACE_RELAY_UPSTREAM_OVERRIDE` is set to a valid base URL, both
    /// endpoints are redirected under it instead.
    pub fn new(subscription_key: SubscriptionKey) -> Self {
        if let Ok(base_url) = std::env::var(UPSTREAM_OVERRIDE_ENV) {
            if let Ok(config) = Self::with_base_url(subscription_key.clone(), &base_url) {
                return config;
            }
        }

        Self {
            subscription_key,
            detection_endpoint: EndpointUrl::try_new(DETECTION_ENDPOINT.to_string())
                .expect("compiled-in detection endpoint should be a valid URL"),
            verification_endpoint: EndpointUrl::try_new(VERIFICATION_ENDPOINT.to_string())
                .expect("compiled-in verification endpoint should be a valid URL"),
        }
    }

    /// Create a configuration with both endpoints under a custom base URL
    /// (for testing against a stub upstream)
    pub fn with_base_url(
        subscription_key: SubscriptionKey,
        base_url: &str,
    ) -> Result<Self, RelayError> {
        let base_url = base_url.trim_end_matches('/');
        let detection_endpoint = EndpointUrl::try_new(format!("{base_url}/detect"))
            .map_err(|_| RelayError::InvalidEndpoint(base_url.to_string()))?;
        let verification_endpoint = EndpointUrl::try_new(format!("{base_url}/verify"))
            .map_err(|_| RelayError::InvalidEndpoint(base_url.to_string()))?;

        Ok(Self {
            subscription_key,
            detection_endpoint,
            verification_endpoint,
        })
    }
}

/// Errors that can occur while relaying a request
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Upstream connection error: {0}")]
    UpstreamConnection(String),

    #[error("Invalid upstream endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> SubscriptionKey {
        SubscriptionKey::try_new("test-key".to_string()).unwrap()
    }

    #[test]
    fn test_subscription_key_rejects_empty() {
        assert!(SubscriptionKey::try_new(String::new()).is_err());
        assert!(SubscriptionKey::try_new("abc".to_string()).is_ok());
    }

    #[test]
    fn test_endpoint_url_requires_scheme() {
        assert!(EndpointUrl::try_new("example.com/detect".to_string()).is_err());
        assert!(EndpointUrl::try_new("https://example.com/detect".to_string()).is_ok());
        assert!(EndpointUrl::try_new("http://localhost:3000".to_string()).is_ok());
    }

    #[test]
    fn test_request_id_is_v7() {
        let id = RequestId::new();
        assert_eq!(id.as_ref().get_version_num(), 7);
    }

    #[test]
    fn test_with_base_url_appends_paths() {
        let config = RelayConfig::with_base_url(test_key(), "http://127.0.0.1:9999/").unwrap();
        assert_eq!(
            config.detection_endpoint.as_ref(),
            "http://127.0.0.1:9999/detect"
        );
        assert_eq!(
            config.verification_endpoint.as_ref(),
            "http://127.0.0.1:9999/verify"
        );
    }

    #[test]
    fn test_with_base_url_rejects_bad_url() {
        let result = RelayConfig::with_base_url(test_key(), "not-a-url");
        assert!(matches!(result, Err(RelayError::InvalidEndpoint(_))));
    }
}
