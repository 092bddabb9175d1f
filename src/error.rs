//! HotelWire error types.
//!
//! Two layers of errors exist in the crate:
//!
//! - [`WireError`] covers transport and plumbing failures (bad version
//!   strings, codec failures, config problems). The router decides how each
//!   variant maps to an HTTP response; nothing below the router makes that
//!   call.
//! - [`crate::validate::ValidationError`] covers business-rule violations in
//!   otherwise well-formed payloads. Those are surfaced inside the protocol's
//!   own response envelope, never as transport errors.

use thiserror::Error;

/// HotelWire protocol errors.
#[derive(Error, Debug)]
pub enum WireError {
    /// Protocol version string does not match the `YYYY-MM[letter]` shape.
    #[error("invalid protocol version string: {0}")]
    InvalidVersion(String),

    /// Structural (XSD) validation of a payload failed.
    #[error("schema validation error: {0}")]
    Schema(String),

    /// Payload decoding failed. A schema-valid document that fails to decode
    /// indicates a server-side defect, so the router treats this as internal.
    #[error("decode error: {0}")]
    Decode(String),

    /// Response encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// A business handler returned an error.
    #[error("handler error: {0}")]
    Handler(#[source] anyhow::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for HotelWire operations
pub type Result<T> = std::result::Result<T, WireError>;

impl From<toml::de::Error> for WireError {
    fn from(err: toml::de::Error) -> Self {
        WireError::Config(err.to_string())
    }
}
