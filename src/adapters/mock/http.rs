//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors per URL and records every request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a completed response (any status)
    Success(Response),
    /// Fail at the transport level
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// URLs are matched exactly; anything else falls through to the default
/// response, or to an error when no default is set.
///
/// # Example
///
/// ```ignore
/// use folio::adapters::mock::{http::MockResponse, MockHttpClient};
/// use folio::traits::{Headers, HttpClient, Response};
///
/// let client = MockHttpClient::new();
/// client.set_json("http://blog.test/api/articles", "[]");
///
/// let response = client.get("http://blog.test/api/articles", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Shorthand for a 200 response with a JSON body.
    pub fn set_json(&self, url: &str, json: &str) {
        self.set_response(url, MockResponse::Success(Response::json_ok(json)));
    }

    /// Shorthand for a non-2xx response with a text body.
    pub fn set_status(&self, url: &str, status: u16, body: &str) {
        self.set_response(
            url,
            MockResponse::Success(Response::new(status, body.to_string())),
        );
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.get_requests().into_iter().map(|r| r.url).collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, url: &str, headers: &Headers) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers);

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
