//! Trait abstractions for dependency injection and testability.
//!
//! The view controller only talks to the outside world through these traits,
//! so tests can swap in the mocks from `crate::adapters::mock`.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against the blog backend
//! - [`PreferenceStore`] - Persisted string key-value preferences
//! - [`ClipboardSink`] - Write-only system clipboard

pub mod clipboard;
pub mod http;
pub mod preferences;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use preferences::{PreferenceError, PreferenceStore};
