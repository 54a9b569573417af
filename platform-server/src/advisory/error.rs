//! Live status error types.

use std::fmt;

use serde::Serialize;

/// Closed set of ways a remote advisory call can fail.
///
/// A missing credential is not a failure: it routes the request to the
/// offline fallback advisor instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureCategory {
    /// Upstream rejected the credential (HTTP 401).
    AuthFailure,
    /// Upstream throttled the request (HTTP 429).
    RateLimited,
    /// The outbound request was malformed (HTTP 400, or an unencodable header).
    BadRequest,
    /// Any other non-success status, or a transport failure.
    UpstreamError,
    /// Success status but the body was not JSON.
    ResponseParseError,
    /// The call did not complete within its time budget.
    Timeout,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureCategory::AuthFailure => "auth failure",
            FailureCategory::RateLimited => "rate limited",
            FailureCategory::BadRequest => "bad request",
            FailureCategory::UpstreamError => "upstream error",
            FailureCategory::ResponseParseError => "response parse error",
            FailureCategory::Timeout => "timeout",
        };
        f.write_str(s)
    }
}

/// A classified failure of the remote advisory client.
///
/// The message is user-displayable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteAdvisoryError {
    pub category: FailureCategory,
    pub message: String,
}

impl RemoteAdvisoryError {
    pub fn new(category: FailureCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Errors surfaced by [`LiveStatusAdvisor`](super::LiveStatusAdvisor).
///
/// Remote failures pass through untranslated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisoryError {
    #[error(transparent)]
    Remote(#[from] RemoteAdvisoryError),
}

impl AdvisoryError {
    pub fn category(&self) -> FailureCategory {
        match self {
            AdvisoryError::Remote(e) => e.category,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AdvisoryError::Remote(e) => &e.message,
        }
    }
}

/// A failure below HTTP: connect, TLS, or reading the body.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl TransportError {
    /// Describe `err` followed by each of its causes, e.g.
    /// "error sending request: Connection refused".
    fn from_chain(err: &dyn std::error::Error) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        TransportError::new(message)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::from_chain(&err)
    }
}
