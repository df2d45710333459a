//! Mock implementations for testing.
//!
//! Lets the controller and API client be tested without network access,
//! a display server, or the user's config directory.

pub mod clipboard;
pub mod http;
pub mod preferences;

pub use clipboard::MockClipboard;
pub use http::MockHttpClient;
pub use preferences::InMemoryPreferences;
