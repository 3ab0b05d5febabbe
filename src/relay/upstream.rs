//! Outbound client for the Azure Face API
//!
//! One pooled `reqwest` client is shared by every inbound request. Each
//! inbound request produces exactly one upstream call: the subscription key
//! is injected, the caller's payload is forwarded untouched, and the upstream
//! reply (whatever its status) is handed back for verbatim relaying. No
//! retries, and no timeout beyond the client's defaults.

use crate::relay::headers::{content_types, OCP_APIM_SUBSCRIPTION_KEY};
use crate::relay::query::{DetectParams, VerifyRequest};
use crate::relay::types::{RelayConfig, RelayError, RelayResult};
use bytes::Bytes;
use http::{header, StatusCode};

/// Upstream reply: status and body, untouched
#[derive(Clone, Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Client for the two fixed upstream endpoints
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    client: reqwest::Client,
    config: RelayConfig,
}

impl UpstreamClient {
    /// Create a new upstream client
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Forward a detection request: raw body verbatim, plus exactly the
    /// query fields the caller supplied
    pub async fn detect(&self, params: &DetectParams, body: Bytes) -> RelayResult<UpstreamReply> {
        let request = self
            .client
            .post(self.config.detection_endpoint.as_ref())
            .query(params)
            .header(OCP_APIM_SUBSCRIPTION_KEY, self.config.subscription_key.as_ref())
            .header(header::CONTENT_TYPE, content_types::APPLICATION_JSON)
            .body(body);

        self.send(request).await
    }

    /// Forward a verification request: the two face IDs, reserialized with
    /// absent fields omitted
    pub async fn verify(&self, request_body: &VerifyRequest) -> RelayResult<UpstreamReply> {
        let request = self
            .client
            .post(self.config.verification_endpoint.as_ref())
            .header(OCP_APIM_SUBSCRIPTION_KEY, self.config.subscription_key.as_ref())
            .header(header::CONTENT_TYPE, content_types::APPLICATION_JSON)
            .json(request_body);

        self.send(request).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> RelayResult<UpstreamReply> {
        let response = request
            .send()
            .await
            .map_err(|e| RelayError::UpstreamConnection(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::UpstreamConnection(e.to_string()))?;

        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::types::SubscriptionKey;
    use serde_json::json;

    fn test_config(base_url: &str) -> RelayConfig {
        RelayConfig::with_base_url(
            SubscriptionKey::try_new("test-key".to_string()).unwrap(),
            base_url,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_detect_injects_subscription_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/detect")
            .match_header(OCP_APIM_SUBSCRIPTION_KEY, "test-key")
            .match_header("content-type", content_types::APPLICATION_JSON)
            .with_status(200)
            .with_body(json!({"faceId": "abc-123"}).to_string())
            .create_async()
            .await;

        let client = UpstreamClient::new(test_config(&server.url()));
        let reply = client
            .detect(&DetectParams::default(), Bytes::from_static(b"{}"))
            .await
            .unwrap();

        assert_eq!(reply.status, StatusCode::OK);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_2xx_reply_is_returned_not_errored() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/verify")
            .with_status(401)
            .with_body(json!({"error": {"code": "Unauthorized"}}).to_string())
            .create_async()
            .await;

        let client = UpstreamClient::new(test_config(&server.url()));
        let reply = client.verify(&VerifyRequest::default()).await.unwrap();

        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
        assert_eq!(body["error"]["code"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_a_connection_error() {
        // Bind and drop a listener so the port is (almost certainly) closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UpstreamClient::new(test_config(&format!("http://{addr}")));
        let result = client
            .detect(&DetectParams::default(), Bytes::from_static(b"{}"))
            .await;

        assert!(matches!(result, Err(RelayError::UpstreamConnection(_))));
    }
}
