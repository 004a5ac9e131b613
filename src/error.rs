//! Error types for the Co-WIN client

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when querying the Co-WIN API
#[derive(Error, Debug)]
pub enum CowinError {
    /// HTTP request failed before a usable response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status
    #[error("upstream rejected the request with status {status}")]
    UpstreamRejected {
        /// The status code that was received
        status: reqwest::StatusCode,
        /// Machine-readable code from the upstream error body, when one
        /// could be parsed
        code: Option<String>,
        /// Human-readable message from the upstream error body, when one
        /// could be parsed
        message: Option<String>,
    },

    /// A success response carried a body that does not match the expected
    /// envelope
    #[error("failed to decode upstream response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// Client initialization failed
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

/// Error body the upstream attaches to rejected requests,
/// e.g. `{"errorCode": "USRRET0013", "error": "Invalid pincode"}`
#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
    error: Option<String>,
}

impl CowinError {
    /// Build an `UpstreamRejected` from a status and the raw response body
    ///
    /// A missing or unparseable body leaves `code` and `message` empty; no
    /// fallback message is synthesized.
    pub(crate) fn upstream_rejected(status: reqwest::StatusCode, body: Option<String>) -> Self {
        let parsed: Option<RejectionBody> =
            body.and_then(|body| serde_json::from_str(&body).ok());

        CowinError::UpstreamRejected {
            status,
            code: parsed.as_ref().and_then(|body| body.error_code.clone()),
            message: parsed.and_then(|body| body.error),
        }
    }
}
