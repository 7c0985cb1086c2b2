//! Budget Buddy HTTP module
//!
//! Payload types shared with the backend and, behind the `client` feature, a
//! typed client with an explicit request/response interceptor pipeline.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{ApiClient, ApiClientBuilder, ClientError};
