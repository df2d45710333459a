//! AppMessage enum for async communication within the application.

use crate::models::{ArticleDetail, ArticleSummary, Profile};

/// Messages sent from spawned tasks back to the UI loop.
///
/// Tasks never touch [`super::App`] directly; every state change arrives
/// here and is applied by [`super::App::handle_message`].
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Profile and article list both fetched
    InitialLoaded {
        profile: Profile,
        articles: Vec<ArticleSummary>,
    },
    /// Either initial fetch failed
    InitialLoadFailed { error: String },
    /// Article detail fetch finished; `None` when the backend had no match
    ArticleLoaded {
        request_id: u64,
        detail: Option<ArticleDetail>,
    },
    /// Article detail fetch failed
    ArticleLoadFailed { request_id: u64, error: String },
    /// Email written to the clipboard
    EmailCopied,
    /// Clipboard write rejected
    CopyFailed { error: String },
    /// Copy-feedback window elapsed for the copy with this generation
    CopyFeedbackExpired { generation: u64 },
}
