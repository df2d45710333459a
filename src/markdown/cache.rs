//! Memoization cache for terminal markdown rendering
//!
//! Keyed by a hash of the content plus the style set, so a theme switch
//! produces a fresh entry instead of stale colors.

use ratatui::text::Line;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::markdown::{render_lines, MarkdownStyles, MARKDOWN_CACHE_MAX_ENTRIES};

/// Memoization cache for [`render_lines`].
///
/// The detail view re-renders every frame; parsing the article body each
/// time is wasted work once it has been done for the current theme.
pub struct MarkdownCache {
    /// Rendered lines keyed by content/style hash
    entries: HashMap<u64, Vec<Line<'static>>>,
    /// Insertion order for eviction (oldest first)
    insertion_order: Vec<u64>,
    hits: u64,
    misses: u64,
}

impl Default for MarkdownCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    fn key(content: &str, styles: &MarkdownStyles) -> u64 {
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        styles.hash(&mut hasher);
        hasher.finish()
    }

    /// Render markdown with caching.
    pub fn render(&mut self, content: &str, styles: &MarkdownStyles) -> Vec<Line<'static>> {
        let key = Self::key(content, styles);

        if let Some(lines) = self.entries.get(&key) {
            self.hits += 1;
            return lines.clone();
        }

        self.misses += 1;
        let lines = render_lines(content, styles);

        while self.entries.len() >= MARKDOWN_CACHE_MAX_ENTRIES && !self.insertion_order.is_empty() {
            let oldest = self.insertion_order.remove(0);
            self.entries.remove(&oldest);
        }

        self.entries.insert(key, lines.clone());
        self.insertion_order.push(key);

        lines
    }

    /// Cache statistics as (hits, misses)
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries. Stats are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }
}
