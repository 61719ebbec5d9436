//! Recase Core - key-casing transcoder for JSON payloads
//!
//! This crate converts the mapping keys of arbitrarily nested JSON values
//! between the application's camelCase convention and the snake_case wire
//! format, and provides an API client that applies the conversion at the
//! request/response boundary.
//!
//! # Main Components
//!
//! - **Case Transcoder**: pure, recursive [`to_snake_case`] / [`to_camel_case`]
//!   functions over `serde_json::Value`
//! - **Error Handling**: error types using `thiserror` and `anyhow`
//! - **API Client**: [`http::ApiClient`], an explicitly constructed client that
//!   converts outbound bodies to wire format and inbound bodies back
//!
//! # Example
//!
//! ```
//! use recase_core::{to_snake_case, to_camel_case};
//! use serde_json::json;
//!
//! let body = json!({ "studentId": "abc", "progressPercentage": 50 });
//! let wire = to_snake_case(&body);
//! assert_eq!(wire, json!({ "student_id": "abc", "progress_percentage": 50 }));
//! assert_eq!(to_camel_case(&wire), body);
//! ```

pub mod convert;
pub mod error;
pub mod http;

// Re-export main types for convenience
pub use convert::{camel_key, convert, snake_key, to_camel_case, to_snake_case, KeyConvention};
pub use error::{Error, Result};
pub use http::{ApiClient, ApiClientConfig, ErrorClassification, HttpError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
