//! Documentation publisher
//!
//! Serves a machine-readable description of the relay endpoints at
//! `/api-docs`. The document is a static structure built once on first use;
//! it reads nothing from the relay and the relay reads nothing from it.

use serde_json::{json, Value};
use std::sync::OnceLock;

static OPENAPI_DOCUMENT: OnceLock<Value> = OnceLock::new();

/// The OpenAPI document describing the relay endpoints
pub fn openapi_document() -> &'static Value {
    OPENAPI_DOCUMENT.get_or_init(build_document)
}

fn build_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "face_relay",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Relay for the Azure Face API detection and verification endpoints. The subscription key is injected server-side.",
        },
        "paths": {
            "/detect": {
                "post": {
                    "tags": ["Face Detection"],
                    "description": "Relays the request to the Azure Face API detection endpoint",
                    "parameters": [
                        {
                            "name": "detectionModel",
                            "description": "Face detection model version to apply",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string", "example": "detection_01" }
                        },
                        {
                            "name": "returnFaceId",
                            "description": "Return faceIds of the detected faces",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string", "example": "true" }
                        },
                        {
                            "name": "returnFaceLandmarks",
                            "description": "Return face landmarks of the detected faces",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string", "example": "true" }
                        },
                        {
                            "name": "returnFaceAttributes",
                            "description": "Comma-separated face attributes to return",
                            "in": "query",
                            "required": false,
                            "schema": {
                                "type": "string",
                                "example": "age,headPose,smile,facialHair,glasses,emotion,hair,makeup,occlusion,accessories,blur,exposure,noise"
                            }
                        }
                    ],
                    "requestBody": {
                        "description": "URL of the image to detect faces in",
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "url": { "type": "string" }
                                    }
                                },
                                "example": { "url": "https://example.com/face.jpg" }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Successfully performed face detection" },
                        "400": { "description": "Request body is invalid" },
                        "401": { "description": "Access denied due to invalid subscription key" },
                        "408": { "description": "Request timeout" },
                        "502": { "description": "Upstream service unreachable" }
                    }
                }
            },
            "/verify": {
                "post": {
                    "tags": ["Face Verification"],
                    "description": "Relays the request to the Azure Face API verification endpoint",
                    "requestBody": {
                        "description": "Face IDs obtained from the detection endpoint",
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "faceId1": { "type": "string" },
                                        "faceId2": { "type": "string" }
                                    }
                                },
                                "example": {
                                    "faceId1": "71546360-6d7d-420b-a350-f1ade5a2bf36",
                                    "faceId2": "cbe58d98-3838-4c6b-828e-de74a7af805e"
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Successfully performed face verification" },
                        "400": { "description": "Request body is invalid" },
                        "401": { "description": "Access denied due to invalid subscription key" },
                        "502": { "description": "Upstream service unreachable" }
                    }
                }
            }
        }
    })
}
