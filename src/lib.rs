//! folio - a terminal reader for a personal blog
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
