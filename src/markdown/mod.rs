//! Markdown rendering for article bodies.
//!
//! Two projections of the same markdown source:
//!
//! - [`render_html`] produces a safe HTML fragment (raw HTML escaped, script
//!   URLs neutralized). It is the canonical "rendered article" value.
//! - [`render_lines`] produces styled ratatui `Line`s for the terminal, with
//!   [`MarkdownCache`] memoizing it by content hash.
//!
//! Both are pure functions of their input.

mod cache;
mod html;
mod links;
mod styles;

pub use cache::MarkdownCache;
pub use html::{is_safe_url, render_html};
pub use styles::MarkdownStyles;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Maximum number of entries in the markdown cache before eviction
pub const MARKDOWN_CACHE_MAX_ENTRIES: usize = 32;

/// Parser options shared by both projections.
pub(crate) fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Open container on the renderer's stack, mirrored 1:1 with parser
/// `Start`/`End` events.
enum Container {
    Paragraph,
    Heading,
    BlockQuote,
    CodeBlock,
    List { next_number: Option<u64> },
    Item,
    Styled,
    Link { url: String, text: String },
    Image,
    Table,
    TableRow,
    TableCell,
    Other,
}

/// Renders markdown into terminal lines.
struct LineRenderer<'s> {
    styles: &'s MarkdownStyles,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    containers: Vec<Container>,
    style_stack: Vec<Style>,
}

impl<'s> LineRenderer<'s> {
    fn new(styles: &'s MarkdownStyles) -> Self {
        Self {
            styles,
            lines: Vec::new(),
            current: Vec::new(),
            containers: Vec::new(),
            style_stack: vec![styles.text],
        }
    }

    fn style(&self) -> Style {
        *self.style_stack.last().unwrap_or(&self.styles.text)
    }

    fn push_style(&mut self, style: Style) {
        let patched = self.style().patch(style);
        self.style_stack.push(patched);
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    /// Prefix for lines inside block quotes.
    fn quote_prefix(&self) -> Option<Span<'static>> {
        let depth = self
            .containers
            .iter()
            .filter(|c| matches!(c, Container::BlockQuote))
            .count();
        (depth > 0).then(|| Span::styled("│ ".repeat(depth), self.styles.quote))
    }

    fn list_depth(&self) -> usize {
        self.containers
            .iter()
            .filter(|c| matches!(c, Container::List { .. }))
            .count()
    }

    fn start_line_if_empty(&mut self) {
        if self.current.is_empty() {
            if let Some(prefix) = self.quote_prefix() {
                self.current.push(prefix);
            }
        }
    }

    fn push_text(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        self.start_line_if_empty();
        self.current.push(Span::styled(text.to_string(), style));
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn blank_line(&mut self) {
        self.flush_line();
        if self.lines.last().is_some_and(|l| !l.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let container = match tag {
            Tag::Paragraph => {
                self.flush_line();
                Container::Paragraph
            }
            Tag::Heading { level, .. } => {
                self.blank_line();
                let style = if level == HeadingLevel::H1 {
                    self.styles.title
                } else {
                    self.styles.heading
                };
                self.push_style(style);
                self.push_text(&format!("{} ", "#".repeat(level as usize)), self.style());
                Container::Heading
            }
            Tag::BlockQuote(_) => {
                self.blank_line();
                Container::BlockQuote
            }
            Tag::CodeBlock(_) => {
                self.blank_line();
                self.push_style(self.styles.code_block);
                Container::CodeBlock
            }
            Tag::List(start) => {
                if self.list_depth() == 0 {
                    self.blank_line();
                } else {
                    self.flush_line();
                }
                Container::List { next_number: start }
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.list_depth().saturating_sub(1));
                let marker = match self.containers.last_mut() {
                    Some(Container::List {
                        next_number: Some(n),
                    }) => {
                        let marker = format!("{}{}. ", indent, n);
                        *n += 1;
                        marker
                    }
                    _ => format!("{}• ", indent),
                };
                self.push_text(&marker, self.styles.list_marker);
                Container::Item
            }
            Tag::Emphasis => {
                self.push_style(self.styles.emphasis);
                Container::Styled
            }
            Tag::Strong => {
                self.push_style(self.styles.strong);
                Container::Styled
            }
            Tag::Strikethrough => {
                self.push_style(self.styles.strikethrough);
                Container::Styled
            }
            Tag::Link { dest_url, .. } => {
                self.push_style(self.styles.link);
                Container::Link {
                    url: dest_url.to_string(),
                    text: String::new(),
                }
            }
            Tag::Image { .. } => {
                self.push_text("[image: ", self.styles.dim);
                self.push_style(self.styles.dim);
                Container::Image
            }
            Tag::Table(_) => {
                self.blank_line();
                Container::Table
            }
            Tag::TableHead | Tag::TableRow => {
                self.flush_line();
                Container::TableRow
            }
            Tag::TableCell => Container::TableCell,
            _ => Container::Other,
        };
        self.containers.push(container);
    }

    fn end(&mut self) {
        let Some(container) = self.containers.pop() else {
            return;
        };
        match container {
            Container::Paragraph => {
                self.flush_line();
                if self.list_depth() == 0 {
                    self.blank_line();
                }
            }
            Container::Heading => {
                self.pop_style();
                self.blank_line();
            }
            Container::BlockQuote => self.blank_line(),
            Container::CodeBlock => {
                self.pop_style();
                self.blank_line();
            }
            Container::List { .. } => {
                if self.list_depth() == 0 {
                    self.blank_line();
                } else {
                    self.flush_line();
                }
            }
            Container::Item => self.flush_line(),
            Container::Styled => self.pop_style(),
            Container::Link { url, text } => {
                self.pop_style();
                if !url.is_empty() && url != text {
                    self.push_text(&format!(" ({})", url), self.styles.dim);
                }
            }
            Container::Image => {
                self.pop_style();
                self.push_text("]", self.styles.dim);
            }
            Container::Table => self.blank_line(),
            Container::TableRow => self.flush_line(),
            Container::TableCell => self.push_text(" │ ", self.styles.dim),
            Container::Other => {}
        }
    }

    fn text(&mut self, text: &str) {
        if matches!(self.containers.last(), Some(Container::CodeBlock)) {
            let style = self.style();
            let mut parts = text.split('\n').peekable();
            while let Some(part) = parts.next() {
                // The final newline of a block produces an empty trailing part.
                if part.is_empty() && parts.peek().is_none() {
                    break;
                }
                self.push_text("  ", style);
                self.push_text(part, style);
                self.lines.push(Line::from(std::mem::take(&mut self.current)));
            }
            return;
        }

        let mut in_link = false;
        for container in self.containers.iter_mut().rev() {
            if let Container::Link { text: link_text, .. } = container {
                link_text.push_str(text);
                in_link = true;
                break;
            }
        }
        let style = self.style();
        if in_link || text.is_empty() {
            self.push_text(text, style);
            return;
        }
        self.start_line_if_empty();
        let spans = links::spans_with_urls(text, style, self.styles.link);
        self.current.extend(spans);
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Render markdown text to styled terminal lines.
///
/// Handles headings, paragraphs, emphasis, strong, strikethrough, inline and
/// fenced code, ordered/unordered (nested) lists, block quotes, rules, links
/// (URL appended in dim text) and images (shown as their alt text).
///
/// Lines are not wrapped here; the view wraps them to the terminal width.
/// Empty input yields no lines.
pub fn render_lines(text: &str, styles: &MarkdownStyles) -> Vec<Line<'static>> {
    let mut renderer = LineRenderer::new(styles);

    for event in Parser::new_ext(text, parser_options()) {
        match event {
            Event::Start(tag) => renderer.start(tag),
            Event::End(_) => renderer.end(),
            Event::Text(t) => renderer.text(&t),
            Event::Code(code) => renderer.push_text(&code, styles.inline_code),
            Event::Html(raw) | Event::InlineHtml(raw) => {
                let style = renderer.style();
                for (i, part) in raw.split('\n').enumerate() {
                    if i > 0 {
                        renderer.flush_line();
                    }
                    renderer.push_text(part, style);
                }
            }
            Event::SoftBreak => {
                let style = renderer.style();
                renderer.push_text(" ", style);
            }
            Event::HardBreak => renderer.flush_line(),
            Event::Rule => {
                renderer.blank_line();
                renderer.push_text(&"─".repeat(24), styles.dim);
                renderer.blank_line();
            }
            Event::TaskListMarker(done) => {
                let marker = if done { "[x] " } else { "[ ] " };
                renderer.push_text(marker, styles.list_marker);
            }
            _ => {}
        }
    }

    renderer.finish()
}

/// Flatten rendered lines to plain text, one `\n`-separated row per line.
pub fn lines_to_plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
