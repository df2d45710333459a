//! Helper functions for UI rendering

use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = [
    "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
];

/// Spinner frame for an animation tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Truncate a string to `max_width` display columns, adding "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > target {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Estimate how many rows `lines` occupy once wrapped to `viewport_width`.
pub fn estimate_wrapped_line_count(lines: &[Line], viewport_width: usize) -> usize {
    if viewport_width == 0 {
        return lines.len();
    }

    lines
        .iter()
        .map(|line| {
            let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            if width == 0 {
                1 // Empty line still takes 1 row
            } else {
                width.div_ceil(viewport_width)
            }
        })
        .sum()
}
