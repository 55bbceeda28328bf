use thiserror::Error;

/// Any failure between issuing a request and holding its decoded payload.
///
/// This is the only failure family the projector models: network trouble,
/// a non-success HTTP status, an error envelope, or a payload that does not
/// have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request rejected: {message}")]
    Rejected { message: String },

    /// The request could not be sent as built, e.g. a path segment of `..`.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("malformed response: {0}")]
    Decode(String),
}
