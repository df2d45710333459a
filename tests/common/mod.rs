//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let mut env = TestAppBuilder::new().with_theme("light").build();
//! env.app.init();
//! env.app.process_next_message().await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use folio::api::BlogClient;
use folio::app::App;
use std::sync::Arc;

pub const BASE_URL: &str = "http://blog.test";

pub const PROFILE_JSON: &str =
    r#"{"id":"1","username":"ann","avatarUrl":"/a.png","bio":"hi","email":"ann@x.com"}"#;
pub const ARTICLES_JSON: &str = r#"[{"id":"10","title":"First","publishDate":"2024-01-01"}]"#;
pub const DETAIL_JSON: &str =
    r##"{"id":"10","title":"First","publishDate":"2024-01-01","content":"# Hi"}"##;

/// Full URL for an API path on the mock backend.
pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// An app plus handles on every mock it talks to.
pub struct TestEnv {
    pub app: App,
    pub http: MockHttpClient,
    pub prefs: InMemoryPreferences,
    pub clipboard: MockClipboard,
}

/// Builder for test App instances wired to mocks.
pub struct TestAppBuilder {
    http: MockHttpClient,
    prefs: InMemoryPreferences,
    clipboard: MockClipboard,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    /// Backend serving the standard profile, list and article "10".
    pub fn new() -> Self {
        let http = MockHttpConfig::new()
            .with_json_response(&url("/api/profile"), 200, PROFILE_JSON)
            .with_json_response(&url("/api/articles"), 200, ARTICLES_JSON)
            .with_json_response(&url("/api/articles/10"), 200, DETAIL_JSON)
            .build();
        Self {
            http,
            prefs: InMemoryPreferences::new(),
            clipboard: MockClipboard::new(),
        }
    }

    /// Use a custom HTTP mock.
    pub fn with_http(mut self, http: MockHttpClient) -> Self {
        self.http = http;
        self
    }

    /// Share an existing preference store (simulates a later session).
    pub fn with_prefs(mut self, prefs: InMemoryPreferences) -> Self {
        self.prefs = prefs;
        self
    }

    /// Start with a stored theme preference.
    pub fn with_theme(self, value: &str) -> Self {
        self.with_prefs(InMemoryPreferences::with_value("theme", value))
    }

    pub fn with_clipboard(mut self, clipboard: MockClipboard) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn build(self) -> TestEnv {
        let client = Arc::new(BlogClient::new(BASE_URL, Arc::new(self.http.clone())));
        let app = App::new(
            client,
            Arc::new(self.prefs.clone()),
            Arc::new(self.clipboard.clone()),
        );
        TestEnv {
            app,
            http: self.http,
            prefs: self.prefs,
            clipboard: self.clipboard,
        }
    }
}

/// App after a completed successful `init`.
pub async fn loaded_app() -> TestEnv {
    let mut env = TestAppBuilder::new().build();
    env.app.init();
    env.app.process_next_message().await;
    env
}
