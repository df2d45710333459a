//! Navigation methods for the App.

use super::{App, ViewMode};

impl App {
    /// Return to the article list, discarding the loaded article.
    pub fn back_to_list(&mut self) {
        self.cancel_article_request();
        self.mode = ViewMode::List;
        self.set_current_article(None);
        self.detail_scroll = 0;
        self.mark_dirty();
    }

    /// Move the list cursor up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.mark_dirty();
        }
    }

    /// Move the list cursor down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.articles.len() {
            self.selected_index += 1;
            self.mark_dirty();
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
        self.mark_dirty();
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.articles.len().saturating_sub(1);
        self.mark_dirty();
    }

    /// Scroll the detail view up by `lines`
    pub fn scroll_up(&mut self, lines: u16) {
        let new_scroll = self.detail_scroll.saturating_sub(lines);
        if new_scroll != self.detail_scroll {
            self.detail_scroll = new_scroll;
            self.mark_dirty();
        }
    }

    /// Scroll the detail view down by `lines`, clamped to the content
    pub fn scroll_down(&mut self, lines: u16) {
        let new_scroll = self
            .detail_scroll
            .saturating_add(lines)
            .min(self.detail_max_scroll);
        if new_scroll != self.detail_scroll {
            self.detail_scroll = new_scroll;
            self.mark_dirty();
        }
    }

    /// Lines moved by a page scroll
    pub fn page_size(&self) -> u16 {
        self.detail_viewport_height.saturating_sub(2).max(1)
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_up(u16::MAX);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_down(u16::MAX);
    }

    /// Move up in whichever view is active
    pub fn move_up(&mut self) {
        match self.mode {
            ViewMode::List => self.move_selection_up(),
            ViewMode::Detail => self.scroll_up(1),
        }
    }

    /// Move down in whichever view is active
    pub fn move_down(&mut self) {
        match self.mode {
            ViewMode::List => self.move_selection_down(),
            ViewMode::Detail => self.scroll_down(1),
        }
    }

    pub fn page_up(&mut self) {
        if self.mode == ViewMode::Detail {
            self.scroll_up(self.page_size());
        }
    }

    pub fn page_down(&mut self) {
        if self.mode == ViewMode::Detail {
            self.scroll_down(self.page_size());
        }
    }

    pub fn jump_to_start(&mut self) {
        match self.mode {
            ViewMode::List => self.select_first(),
            ViewMode::Detail => self.scroll_to_top(),
        }
    }

    pub fn jump_to_end(&mut self) {
        match self.mode {
            ViewMode::List => self.select_last(),
            ViewMode::Detail => self.scroll_to_bottom(),
        }
    }
}
