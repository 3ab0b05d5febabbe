//! Request shapes accepted by the relay endpoints
//!
//! These are deliberately loose: the relay performs no validation of its own
//! and forwards exactly what the caller supplied, leaving all rejection to
//! the upstream service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query fields recognized on `/detect`.
///
/// Every field is optional. Fields the caller did not supply are absent from
/// the outbound query string (`None` is skipped on serialization); nothing is
/// defaulted. Values pass through as the strings the caller sent, including
/// the boolean-as-string fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_face_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_face_landmarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_face_attributes: Option<String>,
}

impl DetectParams {
    /// True when the caller supplied none of the recognized fields
    pub fn is_empty(&self) -> bool {
        self.detection_model.is_none()
            && self.return_face_id.is_none()
            && self.return_face_landmarks.is_none()
            && self.return_face_attributes.is_none()
    }
}

/// Body accepted on `/verify`.
///
/// The two face IDs are forwarded opaquely (any JSON value, not just
/// strings). A field absent from the inbound body is omitted from the
/// outbound body; the upstream produces the resulting 400. Unrecognized
/// inbound fields are dropped.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct VerifyRequest {
    #[serde(rename = "faceId1", skip_serializing_if = "Option::is_none")]
    pub face_id_1: Option<Value>,
    #[serde(rename = "faceId2", skip_serializing_if = "Option::is_none")]
    pub face_id_2: Option<Value>,
}
