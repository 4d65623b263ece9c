//! Domain Errors
//!
//! Failure taxonomy shared by the application service and the adapters.
//! Upstream failures are always surfaced, never folded into empty results.

/// Failure talking to the upstream employee service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// Connection, timeout or other transport-level failure
    #[error("upstream request failed: {0}")]
    Transport(String),
    /// Upstream answered 429 Too Many Requests
    #[error("upstream rate limit exceeded")]
    RateLimited,
    /// Upstream answered with a non-success status
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Response body did not match the expected envelope
    #[error("upstream response could not be decoded: {0}")]
    Decode(String),
}

/// Errors returned by employee use cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeError {
    #[error("employee not found: {0}")]
    NotFound(String),
    #[error("invalid employee request: {0}")]
    Validation(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
