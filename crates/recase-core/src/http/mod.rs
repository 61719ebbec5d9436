//! API client layer bracketing requests with key-casing conversion
//!
//! This module provides the client that consumes the case transcoder:
//! - Explicitly constructed client holding base URL and credentials
//! - Outbound bodies converted to the snake_case wire format before dispatch
//! - Inbound bodies converted to camelCase after receipt
//! - Error classification and normalization for failed responses

pub mod client;
pub mod error;

pub use client::{ApiClient, ApiClientConfig};
pub use error::{ErrorClassification, HttpError};

// Re-export commonly used types
pub use reqwest::{Method, StatusCode};
