//! Application state and logic for the TUI.
//!
//! [`App`] is the single state container. Operations started from the UI
//! (`init`, `view_article`, `copy_email`) spawn tokio tasks that report back
//! through an unbounded channel of [`AppMessage`]s; the UI loop feeds those to
//! [`App::handle_message`], so state is only mutated from one task.
//!
//! - [`ViewMode`] - list or detail
//! - [`Theme`] - dark or light, persisted under [`THEME_KEY`]

mod actions;
mod handlers;
mod messages;
mod navigation;
mod theme;
mod types;

pub use actions::{COPY_FEEDBACK_DURATION, LOAD_ARTICLE_ERROR, LOAD_DATA_ERROR};
pub use messages::AppMessage;
pub use theme::{Theme, THEME_KEY};
pub use types::ViewMode;

use ratatui::text::Line;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::BlogClient;
use crate::markdown::{render_html, MarkdownCache};
use crate::models::{ArticleDetail, ArticleSummary, Profile};
use crate::traits::{ClipboardSink, PreferenceStore};
use crate::ui::theme::Palette;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// True while any fetch is in flight
    pub loading: bool,
    /// Generic user-facing error from the last failed fetch
    pub error: Option<String>,
    pub profile: Option<Profile>,
    /// Article summaries in backend order
    pub articles: Vec<ArticleSummary>,
    pub mode: ViewMode,
    pub theme: Theme,
    /// Copy-feedback flag ("COPIED!" badge)
    pub is_copied: bool,
    /// Cursor in the article list
    pub selected_index: usize,
    /// Vertical scroll offset of the detail view
    pub detail_scroll: u16,
    /// Largest useful detail scroll (calculated during render)
    pub detail_max_scroll: u16,
    /// Height of the detail viewport, used for page scrolling
    pub detail_viewport_height: u16,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Set by any state change; cleared after a frame is drawn
    pub needs_redraw: bool,
    /// Receiver for async messages (taken by the UI loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Blog API client (shared across async tasks)
    pub client: Arc<BlogClient>,
    preferences: Arc<dyn PreferenceStore>,
    clipboard: Arc<dyn ClipboardSink>,
    /// Loaded article, only present in detail mode
    current_article: Option<ArticleDetail>,
    /// HTML projection of `current_article`
    rendered_html: String,
    markdown_cache: MarkdownCache,
    initialized: bool,
    /// Bumped on every successful copy; only the latest clear applies
    copy_generation: u64,
    /// Id handed to the most recent article request
    article_request_id: u64,
    /// Request whose response is still wanted
    pending_article_request: Option<u64>,
}

impl App {
    pub fn new(
        client: Arc<BlogClient>,
        preferences: Arc<dyn PreferenceStore>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            loading: false,
            error: None,
            profile: None,
            articles: Vec::new(),
            mode: ViewMode::List,
            theme: Theme::default(),
            is_copied: false,
            selected_index: 0,
            detail_scroll: 0,
            detail_max_scroll: 0,
            detail_viewport_height: 0,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            client,
            preferences,
            clipboard,
            current_article: None,
            rendered_html: String::new(),
            markdown_cache: MarkdownCache::new(),
            initialized: false,
            copy_generation: 0,
            article_request_id: 0,
            pending_article_request: None,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation clock; only redraws while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.loading {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Take the message receiver so the UI loop can select on it.
    pub fn take_message_rx(&mut self) -> Option<mpsc::UnboundedReceiver<AppMessage>> {
        self.message_rx.take()
    }

    /// Wait for the next async message and apply it.
    ///
    /// Returns `false` when the receiver has been taken. Used where no UI
    /// loop owns the receiver, such as tests.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    /// Apply every message already queued without waiting.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut handled = 0;
        while let Some(msg) = self.message_rx.as_mut().and_then(|rx| rx.try_recv().ok()) {
            self.handle_message(msg);
            handled += 1;
        }
        handled
    }

    pub fn current_article(&self) -> Option<&ArticleDetail> {
        self.current_article.as_ref()
    }

    /// Article under the list cursor
    pub fn selected_article(&self) -> Option<&ArticleSummary> {
        self.articles.get(self.selected_index)
    }

    /// Replace the loaded article and recompute its projection.
    fn set_current_article(&mut self, article: Option<ArticleDetail>) {
        self.rendered_html = article
            .as_ref()
            .map(|a| render_html(&a.content))
            .unwrap_or_default();
        self.current_article = article;
    }

    /// Safe HTML for the loaded article; empty when none is loaded.
    pub fn rendered_markdown(&self) -> &str {
        &self.rendered_html
    }

    /// Loaded article body as styled terminal lines for the active theme.
    pub fn rendered_lines(&mut self) -> Vec<Line<'static>> {
        let Some(article) = self.current_article.as_ref() else {
            return Vec::new();
        };
        let styles = Palette::for_theme(self.theme).markdown_styles();
        self.markdown_cache.render(&article.content, &styles)
    }
}
