//! Operations that start async work: initial load, article fetch, copy.

use std::time::Duration;

use super::{App, AppMessage};

/// Shown when the initial profile/article fetch fails
pub const LOAD_DATA_ERROR: &str = "Failed to load data. Please try again later.";

/// Shown when an article fetch fails
pub const LOAD_ARTICLE_ERROR: &str = "Failed to load article. Please try again later.";

/// How long the "COPIED!" badge stays up
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

impl App {
    /// Apply the stored theme and start the initial load.
    ///
    /// Runs once per session; later calls are ignored.
    pub fn init(&mut self) {
        if self.initialized {
            tracing::debug!("init called again, ignoring");
            return;
        }
        self.initialized = true;

        // Theme goes first so the first frame matches the stored preference.
        self.load_theme_preference();

        self.loading = true;
        self.error = None;
        self.mark_dirty();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = tokio::try_join!(client.fetch_profile(), client.fetch_articles());
            let msg = match result {
                Ok((profile, articles)) => {
                    tracing::info!("Loaded profile and {} articles", articles.len());
                    AppMessage::InitialLoaded { profile, articles }
                }
                Err(e) => AppMessage::InitialLoadFailed {
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Fetch an article and switch to the detail view when it arrives.
    ///
    /// Starting a new request supersedes any earlier one still in flight.
    pub fn view_article(&mut self, id: &str) {
        self.article_request_id += 1;
        let request_id = self.article_request_id;
        self.pending_article_request = Some(request_id);

        self.loading = true;
        self.error = None;
        self.mark_dirty();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            let msg = match client.fetch_article_detail(&id).await {
                Ok(detail) => AppMessage::ArticleLoaded { request_id, detail },
                Err(e) => AppMessage::ArticleLoadFailed {
                    request_id,
                    error: format!("article {}: {}", id, e),
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Open the article under the list cursor.
    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_article().map(|a| a.id.clone()) {
            self.view_article(&id);
        }
    }

    /// Copy the profile email to the clipboard.
    ///
    /// Does nothing when the profile has no email.
    pub fn copy_email(&mut self) {
        let Some(email) = self
            .profile
            .as_ref()
            .and_then(|p| p.copyable_email())
            .map(str::to_string)
        else {
            return;
        };

        let clipboard = self.clipboard.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match clipboard.write_text(&email).await {
                Ok(()) => AppMessage::EmailCopied,
                Err(e) => AppMessage::CopyFailed {
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Show the copy badge and schedule its clear.
    pub(super) fn start_copy_feedback(&mut self) {
        self.copy_generation += 1;
        let generation = self.copy_generation;
        self.is_copied = true;

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(COPY_FEEDBACK_DURATION).await;
            let _ = tx.send(AppMessage::CopyFeedbackExpired { generation });
        });
    }

    /// Clear the copy badge unless a newer copy restarted it.
    pub(super) fn expire_copy_feedback(&mut self, generation: u64) {
        if generation == self.copy_generation {
            self.is_copied = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::ViewMode;
    use super::*;
    use crate::adapters::mock::http::MockResponse;
    use crate::adapters::{InMemoryPreferences, MockHttpClient};
    use crate::traits::HttpError;
    use tokio::time::Instant;

    #[tokio::test]
    async fn test_init_success() {
        let mut h = harness();
        h.app.init();
        assert!(h.app.loading);
        assert!(h.app.error.is_none());

        h.app.process_next_message().await;
        assert!(!h.app.loading);
        assert!(h.app.error.is_none());
        assert_eq!(h.app.profile.as_ref().unwrap().username, "ann");
        assert_eq!(h.app.articles.len(), 1);
        assert_eq!(h.app.articles[0].title, "First");
    }

    #[tokio::test]
    async fn test_init_requests_both_endpoints() {
        let h = loaded().await;
        let mut urls = h.http.requested_urls();
        urls.sort();
        assert_eq!(
            urls,
            vec![
                "http://blog.test/api/articles".to_string(),
                "http://blog.test/api/profile".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_init_failure_of_either_fetch() {
        for failing in ["/api/profile", "/api/articles"] {
            let http = MockHttpClient::new();
            http.set_json(&format!("{}/api/profile", BASE), PROFILE_JSON);
            http.set_json(&format!("{}/api/articles", BASE), ARTICLES_JSON);
            http.set_status(&format!("{}{}", BASE, failing), 500, "boom");

            let mut h = harness_with(http, InMemoryPreferences::new());
            h.app.init();
            h.app.process_next_message().await;

            assert!(!h.app.loading);
            assert_eq!(h.app.error.as_deref(), Some(LOAD_DATA_ERROR));
            assert!(h.app.profile.is_none());
            assert!(h.app.articles.is_empty());
        }
    }

    #[tokio::test]
    async fn test_init_runs_once() {
        let mut h = loaded().await;
        h.app.init();
        assert!(!h.app.loading);
        assert_eq!(h.app.drain_pending_messages(), 0);
        assert_eq!(h.http.get_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_init_applies_theme_before_fetch() {
        let http = MockHttpClient::new();
        let mut h = harness_with(http, InMemoryPreferences::with_value("theme", "light"));
        h.app.init();
        // Nothing has been received yet
        assert!(h.app.loading);
        assert!(!h.app.is_dark_mode());
    }

    #[tokio::test]
    async fn test_view_article_success() {
        let mut h = loaded().await;
        h.app.detail_scroll = 7;
        h.app.view_article("10");
        assert!(h.app.loading);

        h.app.process_next_message().await;
        assert!(!h.app.loading);
        assert_eq!(h.app.mode, ViewMode::Detail);
        assert_eq!(h.app.detail_scroll, 0);
        assert_eq!(h.app.current_article().unwrap().content, "# Hi");
        assert!(!h.app.rendered_markdown().is_empty());
    }

    #[tokio::test]
    async fn test_view_article_no_match_stays_in_list() {
        let mut h = loaded().await;
        h.http.set_json("http://blog.test/api/articles/99", "null");

        h.app.view_article("99");
        h.app.process_next_message().await;

        assert!(!h.app.loading);
        assert!(h.app.error.is_none());
        assert_eq!(h.app.mode, ViewMode::List);
        assert!(h.app.current_article().is_none());
    }

    #[tokio::test]
    async fn test_view_article_failure_keeps_mode() {
        let mut h = loaded().await;
        h.app.view_article("10");
        h.app.process_next_message().await;
        assert_eq!(h.app.mode, ViewMode::Detail);

        h.http.set_response(
            "http://blog.test/api/articles/11",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        h.app.view_article("11");
        assert!(h.app.error.is_none());
        h.app.process_next_message().await;

        assert!(!h.app.loading);
        assert_eq!(h.app.error.as_deref(), Some(LOAD_ARTICLE_ERROR));
        assert_eq!(h.app.mode, ViewMode::Detail);
        assert_eq!(h.app.current_article().unwrap().id(), "10");
    }

    #[tokio::test]
    async fn test_view_article_clears_previous_error() {
        let mut h = loaded().await;
        h.app.error = Some(LOAD_ARTICLE_ERROR.to_string());
        h.app.view_article("10");
        assert!(h.app.error.is_none());
    }

    #[tokio::test]
    async fn test_open_selected() {
        let mut h = loaded().await;
        h.app.open_selected();
        h.app.process_next_message().await;
        assert_eq!(h.app.mode, ViewMode::Detail);
        assert!(h
            .http
            .requested_urls()
            .contains(&"http://blog.test/api/articles/10".to_string()));
    }

    #[tokio::test]
    async fn test_copy_email_without_profile_is_noop() {
        let mut h = harness();
        h.app.copy_email();
        tokio::task::yield_now().await;
        assert_eq!(h.app.drain_pending_messages(), 0);
        assert!(h.clipboard.writes().is_empty());
        assert!(!h.app.is_copied);
    }

    #[tokio::test]
    async fn test_copy_email_with_blank_email_is_noop() {
        let http = MockHttpClient::new();
        http.set_json(
            "http://blog.test/api/profile",
            r#"{"id":"1","username":"ann","avatarUrl":"","bio":"","email":"  "}"#,
        );
        http.set_json("http://blog.test/api/articles", "[]");
        let mut h = harness_with(http, InMemoryPreferences::new());
        h.app.init();
        h.app.process_next_message().await;

        h.app.copy_email();
        tokio::task::yield_now().await;
        assert_eq!(h.app.drain_pending_messages(), 0);
        assert!(h.clipboard.writes().is_empty());
        assert!(!h.app.is_copied);
    }

    #[tokio::test]
    async fn test_copy_email_writes_stored_value() {
        let http = MockHttpClient::new();
        http.set_json(
            "http://blog.test/api/profile",
            r#"{"id":"1","username":"ann","avatarUrl":"","bio":"","email":" ann@x.com "}"#,
        );
        http.set_json("http://blog.test/api/articles", "[]");
        let mut h = harness_with(http, InMemoryPreferences::new());
        h.app.init();
        h.app.process_next_message().await;

        h.app.copy_email();
        h.app.process_next_message().await;
        assert_eq!(h.clipboard.writes(), vec![" ann@x.com "]);
        assert!(h.app.is_copied);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_feedback_clears_after_delay() {
        let mut h = loaded().await;
        h.app.copy_email();
        h.app.process_next_message().await;

        assert_eq!(h.clipboard.writes(), vec!["ann@x.com"]);
        assert!(h.app.is_copied);

        let start = Instant::now();
        h.app.process_next_message().await;
        assert!(!h.app.is_copied);
        let elapsed = start.elapsed();
        assert!(elapsed >= COPY_FEEDBACK_DURATION);
        assert!(elapsed < COPY_FEEDBACK_DURATION + Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_copy_restarts_window() {
        let mut h = loaded().await;
        h.app.copy_email();
        h.app.process_next_message().await;

        tokio::time::sleep(Duration::from_millis(1500)).await;
        h.app.copy_email();
        h.app.process_next_message().await;
        assert!(h.app.is_copied);

        // First clear fires but is superseded
        h.app.process_next_message().await;
        assert!(h.app.is_copied);

        h.app.process_next_message().await;
        assert!(!h.app.is_copied);
        assert_eq!(h.clipboard.writes().len(), 2);
    }

    #[tokio::test]
    async fn test_copy_failure_is_silent() {
        let mut h = loaded().await;
        h.clipboard.set_should_fail(true);

        h.app.copy_email();
        h.app.process_next_message().await;

        assert!(!h.app.is_copied);
        assert!(h.app.error.is_none());
    }
}
