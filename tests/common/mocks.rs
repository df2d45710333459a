//! Mock configurations for test fixtures.

pub use folio::adapters::mock::http::MockResponse;
pub use folio::adapters::mock::{InMemoryPreferences, MockClipboard, MockHttpClient};
pub use folio::traits::{HttpError, Response};

use bytes::Bytes;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a response with a body.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Configures a transport failure.
    pub fn with_connection_error(self, url: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
