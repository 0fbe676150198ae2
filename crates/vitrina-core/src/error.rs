//! Unified error type exposed by **`vitrina-core`**.
//!
//! Backend crates should convert their internal errors into one of these
//! variants before bubbling them up to the caller.  This keeps the public
//! API small while still conveying rich diagnostic information.

use std::time::Duration;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, VitrinaError>;

#[derive(Debug, Error)]
pub enum VitrinaError {
    /// The model's reply was not a valid filter mapping.  `cleaned` carries
    /// the fence-stripped text so the failing payload can be inspected.
    #[error("model reply is not a valid filter mapping: {detail}; cleaned text: {cleaned}")]
    ResponseParse { detail: String, cleaned: String },

    /// The external text-generation call did not resolve within the
    /// configured deadline.
    #[error("text generation timed out after {0:?}")]
    Timeout(Duration),

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the external model.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn't fit
    /// another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid: {0}")]
    Invalid(String),
}
