//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FilePreferenceStore`] - JSON file under the platform config directory
//! - [`SystemClipboard`] - OS clipboard through arboard
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryPreferences`] - In-memory preference storage
//! - [`mock::MockClipboard`] - Records writes, can be told to fail

pub mod file_preferences;
pub mod mock;
pub mod reqwest_http;
pub mod system_clipboard;

pub use file_preferences::FilePreferenceStore;
pub use mock::{InMemoryPreferences, MockClipboard, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use system_clipboard::SystemClipboard;
