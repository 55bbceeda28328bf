use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::errors::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        write!(f, "{verb}")
    }
}

/// A request against the spider API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attaches a JSON body.
    ///
    /// Fails with [`TransportError::Decode`] if `body` cannot be represented
    /// as JSON (e.g. a map with non-string keys).
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, TransportError> {
        let value = serde_json::to_value(body)
            .map_err(|e| TransportError::Decode(format!("request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }
}

impl Display for ApiRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Joins raw segments into an API path, percent-encoding each one.
///
/// Ids are server data and may contain `/`, `?` or `#`; encoded, they stay
/// a single segment. `.` and `..` survive encoding and are refused by the
/// transport instead.
pub fn resource_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| format!("/{}", urlencoding::encode(segment.as_ref())))
        .collect()
}

/// Performs requests against the spider API.
///
/// Implementations return the raw JSON body of a successful (2xx) response
/// and map everything else to a [`TransportError`]. Envelope decoding is
/// left to the caller, since envelope shapes differ per endpoint.
#[async_trait]
pub trait TransportPort: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}
