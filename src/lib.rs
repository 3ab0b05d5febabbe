//! face_relay - A relay service for the Azure Face API
//!
//! This service forwards face detection and verification requests to the
//! Azure Face API, injecting the subscription key server-side so callers
//! never handle the credential themselves. Upstream responses are relayed
//! back to the caller unmodified.

pub mod application;
pub mod config;
pub mod docs;
pub mod error;
pub mod relay;

pub use application::Application;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_basic_functionality() {
        // Basic smoke test to ensure the library compiles and basic types work
        let result: Result<()> = Ok(());
        assert!(result.is_ok());
    }
}
