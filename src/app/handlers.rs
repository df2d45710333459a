//! Message handler for App.

use super::{App, AppMessage, ViewMode, LOAD_ARTICLE_ERROR, LOAD_DATA_ERROR};

impl App {
    /// Handle an async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        // All messages result in state changes that require a redraw
        self.mark_dirty();
        match msg {
            AppMessage::InitialLoaded { profile, articles } => {
                self.profile = Some(profile);
                self.articles = articles;
                self.selected_index = 0;
                self.loading = false;
            }
            AppMessage::InitialLoadFailed { error } => {
                tracing::error!("Error fetching data: {}", error);
                self.error = Some(LOAD_DATA_ERROR.to_string());
                self.loading = false;
            }
            AppMessage::ArticleLoaded { request_id, detail } => {
                if !self.take_article_request(request_id) {
                    return;
                }
                self.loading = false;
                match detail {
                    Some(detail) => {
                        tracing::debug!("Opened article {}", detail.id());
                        self.set_current_article(Some(detail));
                        self.mode = ViewMode::Detail;
                        self.detail_scroll = 0;
                    }
                    None => tracing::debug!("Article request {} returned nothing", request_id),
                }
            }
            AppMessage::ArticleLoadFailed { request_id, error } => {
                if !self.take_article_request(request_id) {
                    return;
                }
                tracing::error!("Error fetching {}", error);
                self.error = Some(LOAD_ARTICLE_ERROR.to_string());
                self.loading = false;
            }
            AppMessage::EmailCopied => self.start_copy_feedback(),
            AppMessage::CopyFailed { error } => {
                tracing::warn!("Failed to copy email: {}", error);
            }
            AppMessage::CopyFeedbackExpired { generation } => {
                self.expire_copy_feedback(generation);
            }
        }
    }

    /// Consume the pending article request if `request_id` is it.
    ///
    /// Responses to superseded requests are dropped.
    fn take_article_request(&mut self, request_id: u64) -> bool {
        if self.pending_article_request == Some(request_id) {
            self.pending_article_request = None;
            true
        } else {
            tracing::debug!("Dropping stale article response {}", request_id);
            false
        }
    }

    /// Forget any in-flight article request.
    pub(super) fn cancel_article_request(&mut self) {
        if self.pending_article_request.take().is_some() {
            self.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::models::ArticleDetail;

    fn detail(id: &str) -> ArticleDetail {
        serde_json::from_str(&format!(
            r#"{{"id":"{}","title":"T{}","publishDate":"2024-01-01","content":"body {}"}}"#,
            id, id, id
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_every_message_marks_dirty() {
        let mut h = loaded().await;
        h.app.needs_redraw = false;
        h.app.handle_message(AppMessage::CopyFailed {
            error: "denied".to_string(),
        });
        assert!(h.app.needs_redraw);
    }

    #[tokio::test]
    async fn test_stale_article_response_is_dropped() {
        let mut h = loaded().await;
        h.app.view_article("10");
        h.app.view_article("10");

        // Simulate a late reply to the first request
        h.app.back_to_list();
        h.app.handle_message(AppMessage::ArticleLoaded {
            request_id: 1,
            detail: Some(detail("1")),
        });
        assert_eq!(h.app.mode, ViewMode::List);
        assert!(h.app.current_article().is_none());
    }

    #[tokio::test]
    async fn test_newest_request_wins() {
        let mut h = loaded().await;
        h.app.view_article("a");
        h.app.view_article("b");
        // Replies in reverse order; ids are 1 and 2
        h.app.handle_message(AppMessage::ArticleLoaded {
            request_id: 2,
            detail: Some(detail("b")),
        });
        h.app.handle_message(AppMessage::ArticleLoaded {
            request_id: 1,
            detail: Some(detail("a")),
        });
        assert_eq!(h.app.current_article().unwrap().id(), "b");
        assert!(!h.app.loading);
    }

    #[tokio::test]
    async fn test_stale_failure_sets_no_error() {
        let mut h = loaded().await;
        h.app.view_article("a");
        h.app.back_to_list();
        h.app.handle_message(AppMessage::ArticleLoadFailed {
            request_id: 1,
            error: "boom".to_string(),
        });
        assert!(h.app.error.is_none());
        assert!(!h.app.loading);
    }

    #[tokio::test]
    async fn test_initial_load_resets_selection() {
        let mut h = harness();
        h.app.selected_index = 4;
        h.app.handle_message(AppMessage::InitialLoaded {
            profile: serde_json::from_str(PROFILE_JSON).unwrap(),
            articles: serde_json::from_str(ARTICLES_JSON).unwrap(),
        });
        assert_eq!(h.app.selected_index, 0);
    }
}
