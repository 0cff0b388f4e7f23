use reqwest::StatusCode;
use std::fmt;

/// Error type for every client operation
///
/// Variants map onto four failure kinds:
/// - authentication: [`AppError::Authentication`]
/// - transport: [`AppError::Network`] and [`AppError::Unexpected`]
/// - malformed response: [`AppError::MalformedResponse`]
/// - invalid input: [`AppError::InvalidInput`]
#[derive(Debug)]
pub enum AppError {
    /// Token exchange failed or its response could not be used
    Authentication(String),
    /// Network-level failure (connection, timeout, TLS)
    Network(reqwest::Error),
    /// The remote service answered with a non-2xx status
    Unexpected(StatusCode),
    /// The response body is not well-formed XML
    MalformedResponse(String),
    /// Caller supplied input the request builder cannot use
    InvalidInput(String),
    /// Request XML could not be written
    Serialization(String),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
}

impl AppError {
    /// Returns `true` for network failures and non-2xx responses
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Unexpected(_))
    }

    /// Status code of a non-2xx response, when there is one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unexpected(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(error: quick_xml::Error) -> Self {
        AppError::MalformedResponse(error.to_string())
    }
}
