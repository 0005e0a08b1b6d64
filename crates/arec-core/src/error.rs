//! Error types for the arec tool
//!
//! Every failure mode is an enumerated kind; all errors are terminal for the
//! invocation (there is no retry policy anywhere) and render as a single
//! line.

use thiserror::Error;

/// Result type alias for arec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the arec tool
#[derive(Error, Debug)]
pub enum Error {
    /// Command-line usage errors
    #[error("{0}")]
    Usage(String),

    /// API token environment variable unset or empty
    #[error("{0} environment variable not set")]
    MissingCredential(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failures (connect, timeout, read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status, surfaced distinctly from API-level failures
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Well-formed response whose `result` field is not "success"
    #[error("Error in API request: {0}")]
    Api(String),

    /// No owned zone matched any candidate suffix of the domain
    #[error("Domain not found: {0}")]
    ZoneNotFound(String),

    /// A candidate suffix matched more than one owned zone
    #[error("Multiple zones match {0}")]
    AmbiguousZone(String),

    /// No A record matched (source, target) within the zone
    #[error("A record not found: {0}")]
    RecordNotFound(String),

    /// Two or more A records matched (source, target) within the zone
    #[error("Multiple matching A records found: {0}")]
    AmbiguousRecord(String),

    /// Invalid input value (bad domain name, bad IPv4 literal)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an API-level error carrying the full response body
    pub fn api(body: impl Into<String>) -> Self {
        Self::Api(body.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_single_line() {
        let errors = [
            Error::MissingCredential("INFOMANIAK_API_TOKEN".into()),
            Error::Transport("connection refused".into()),
            Error::Status {
                status: 503,
                body: "{\"result\":\"error\"}".into(),
            },
            Error::Api("{\"result\":\"error\",\"error\":{}}".into()),
            Error::ZoneNotFound("www.example.com".into()),
            Error::AmbiguousZone("example.com".into()),
            Error::RecordNotFound("www -> 10.0.0.1".into()),
            Error::AmbiguousRecord("www -> 10.0.0.1".into()),
        ];
        for err in errors {
            assert!(!err.to_string().contains('\n'), "{err}");
        }
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = Error::MissingCredential("INFOMANIAK_API_TOKEN".into());
        assert_eq!(
            err.to_string(),
            "INFOMANIAK_API_TOKEN environment variable not set"
        );
    }

    #[test]
    fn status_is_distinct_from_api() {
        let status = Error::Status {
            status: 500,
            body: "oops".into(),
        };
        let api = Error::api("oops");
        assert!(status.to_string().starts_with("HTTP status 500"));
        assert!(api.to_string().starts_with("Error in API request"));
    }
}
