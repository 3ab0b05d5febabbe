//! Relay module for forwarding requests to the Azure Face API
//!
//! One inbound request produces exactly one outbound call and exactly one
//! response to the caller: upstream replies are relayed verbatim, transport
//! failures become structured gateway errors.

pub mod error_response;
pub mod headers;
pub mod middleware;
pub mod query;
pub mod service;
pub mod types;
pub mod upstream;


pub use service::RelayService;
pub use types::{RelayConfig, RelayError, RelayResult};
