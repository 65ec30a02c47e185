//! Intrinsic text measurement
//!
//! A fixed-advance approximation of inline layout: text nodes flow into the
//! current line, `<br>` ends it. Lines never wrap; a `max-width` only clips.

use crate::{DomTree, NodeId};

/// Font and box metrics used for measuring unlaid-out elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Advance of one character
    pub char_width: f64,
    pub line_height: f64,
    /// Horizontal padding on each side
    pub padding_x: f64,
    /// Vertical padding on each side
    pub padding_y: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 16.0,
            padding_x: 8.0,
            padding_y: 4.0,
        }
    }
}

impl TextMetrics {
    /// Border-box size of the given lines
    pub fn measure_lines<S: AsRef<str>>(&self, lines: &[S], max_width: Option<f64>) -> (f64, f64) {
        let longest = lines
            .iter()
            .map(|l| l.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let line_count = lines.len().max(1);

        let mut width = longest as f64 * self.char_width + 2.0 * self.padding_x;
        if let Some(max) = max_width {
            width = width.min(max);
        }
        let height = line_count as f64 * self.line_height + 2.0 * self.padding_y;
        (width, height)
    }
}

/// Split the inline content of `id` into rendered lines.
///
/// A trailing `<br>` does not open an extra line.
pub fn collect_lines(tree: &DomTree, id: NodeId) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut trailing_break = false;

    for node in tree.descendants(id) {
        let Some(n) = tree.get(node) else { continue };
        if n.is_line_break() {
            lines.push(String::new());
            trailing_break = true;
        } else if let Some(text) = n.as_text() {
            if let Some(line) = lines.last_mut() {
                line.push_str(text);
            }
            trailing_break = trailing_break && text.is_empty();
        }
    }

    if trailing_break && lines.len() > 1 {
        lines.pop();
    }
    lines
}
