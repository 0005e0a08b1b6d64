//! Infomaniak API wire types
//!
//! Every response body is a JSON object tagged by a `result` field:
//! `"success"` carries the payload under `data`, anything else is a failure.
//! The envelope is decoded exactly once, at the transport boundary; a body
//! that does not fit the envelope at all is surfaced verbatim as an
//! API-level failure.

use serde::{Deserialize, Serialize};

use arec_core::error::{Error, Result};

/// Response envelope, tagged by the `result` field
#[derive(Debug, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Envelope<T> {
    /// `result == "success"`; payload in `data`
    Success {
        /// Operation payload
        data: T,
    },
    /// `result == "error"`; details in `error`
    Error {
        /// Provider error object
        #[serde(default)]
        error: ApiErrorBody,
    },
}

/// Error object carried by a `result == "error"` envelope
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code
    pub code: Option<String>,
    /// Human-readable description
    pub description: Option<String>,
}

/// Form payload for record creation
#[derive(Debug, Serialize)]
pub struct NewRecord<'a> {
    /// Record type; always "A" here
    #[serde(rename = "type")]
    pub record_type: &'a str,
    /// Subdomain relative to the zone apex; empty for the apex
    pub source: &'a str,
    /// IPv4 literal the record points to
    pub target: &'a str,
    /// Time-to-live in seconds
    pub ttl: u32,
}

/// Decode a response body through the envelope, yielding the payload
///
/// Any body whose `result` is not "success" — including bodies that do not
/// parse as the envelope, or whose `data` does not fit `T` — fails with the
/// full body in the error message.
pub fn decode_envelope<T>(body: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(Envelope::Success { data }) => Ok(data),
        Ok(Envelope::Error { .. }) | Err(_) => Err(Error::api(body)),
    }
}
