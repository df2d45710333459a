//! Blog API client.
//!
//! Thin typed layer over [`HttpClient`] for the three read-only endpoints:
//!
//! - `GET /api/profile` - the author profile
//! - `GET /api/articles` - article summaries in backend order
//! - `GET /api/articles/{id}` - one article with its markdown body
//!
//! Every request sends `Content-Type: application/json`. A non-2xx status
//! becomes [`ApiError::Status`] carrying the status code and body text.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{ArticleDetail, ArticleSummary, Profile};
use crate::traits::{Headers, HttpClient, HttpError};

/// Errors from the blog API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Http(#[from] HttpError),

    /// The backend answered with a non-2xx status
    #[error("Request failed: {status} {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON shape
    #[error("Invalid response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Strip a single trailing slash from a configured base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url
        .trim()
        .strip_suffix('/')
        .unwrap_or(base_url.trim())
        .to_string()
}

/// Client for the blog backend.
#[derive(Clone)]
pub struct BlogClient {
    /// Base URL without trailing slash
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for BlogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BlogClient {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            http,
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn default_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// GET `path` and decode the body.
    ///
    /// Returns `Ok(None)` for a 2xx with an empty body or a JSON `null`.
    async fn request<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url, &Self::default_headers()).await?;

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.text_lossy(),
            });
        }

        if response.is_blank() {
            return Ok(None);
        }

        serde_json::from_slice::<Option<T>>(&response.body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Same as [`Self::request`] but an empty body is a decode error.
    async fn request_required<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        match self.request(path).await? {
            Some(value) => Ok(value),
            None => Err(ApiError::Decode {
                path: path.to_string(),
                source: <serde_json::Error as serde::de::Error>::custom("empty response body"),
            }),
        }
    }

    /// Fetch the author profile.
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.request_required("/api/profile").await
    }

    /// Fetch article summaries in backend order.
    pub async fn fetch_articles(&self) -> Result<Vec<ArticleSummary>, ApiError> {
        self.request_required("/api/articles").await
    }

    /// Fetch one article.
    ///
    /// `Ok(None)` means the backend answered successfully but had nothing
    /// for this id.
    pub async fn fetch_article_detail(&self, id: &str) -> Result<Option<ArticleDetail>, ApiError> {
        let path = format!("/api/articles/{}", urlencoding::encode(id));
        self.request(&path).await
    }
}
