//! Content line splitting
//!
//! Tooltip text coming from markup carries line breaks as the two-character
//! escape `\n`; text built in code may carry real newlines. Both split.

/// Escape sequence used for line breaks inside attribute values
pub const LINE_MARKER: &str = "\\n";

/// Split content into its lines, in order.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(LINE_MARKER).flat_map(|chunk| chunk.split('\n')).collect()
}

/// Whether content has nothing to show
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(split_lines("Save changes"), vec!["Save changes"]);
    }

    #[test]
    fn test_escape_marker() {
        assert_eq!(split_lines(r"a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines(r"first\nsecond\nthird"), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_real_newline() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_mixed_markers() {
        assert_eq!(split_lines("a\\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        assert_eq!(split_lines(r"a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t "));
        assert!(!is_blank(" x "));
    }
}
