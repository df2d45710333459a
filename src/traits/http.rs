//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction over HTTP GET so the blog API client
//! can be exercised against canned responses.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Convenience for a 200 response carrying a JSON document.
    pub fn json_ok(json: impl Into<String>) -> Self {
        Self::new(200, json.into())
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, lossy.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// True when the body holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Transport-level failures. A completed request with a bad status is not
/// an `HttpError`; see [`Response::is_success`].
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Connection failed
    ConnectionFailed(String),
    /// Request timeout
    Timeout(String),
    /// Invalid URL
    InvalidUrl(String),
    /// Body could not be read
    Body(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Body(msg) => write!(f, "Failed to read body: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for HTTP client operations.
///
/// The blog backend is read-only, so only GET is needed. Implementations
/// include the production reqwest-based client and a mock client for tests.
///
/// # Example
///
/// ```ignore
/// use folio::traits::{HttpClient, Headers, HttpError};
///
/// async fn fetch_profile<C: HttpClient>(client: &C) -> Result<String, HttpError> {
///     let response = client.get("https://blog.example.com/api/profile", &Headers::new()).await?;
///     Ok(response.text_lossy())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    ///
    /// Non-2xx statuses come back as a normal [`Response`]; interpreting
    /// them is up to the caller.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
