//! Shared utility functions

use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Terminal column width of a string
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Horizontal window onto a single-line input.
///
/// Given the input text, the cursor position (in chars) and the number of
/// columns available, returns the slice to draw and the cursor column
/// relative to the start of that slice. The window scrolls just far enough
/// to keep the cursor visible.
///
/// ```ignore
/// let (visible, col) = scroll_window("hello world", 11, 5);
/// assert_eq!(visible, "orld");
/// assert_eq!(col, 4);
/// ```
pub fn scroll_window(s: &str, cursor: usize, columns: usize) -> (&str, usize) {
    if columns == 0 {
        return ("", 0);
    }

    let widths: Vec<(usize, usize)> = s
        .char_indices()
        .map(|(i, c)| (i, c.width().unwrap_or(0)))
        .collect();
    let cursor = cursor.min(widths.len());

    // Leave one column for the cursor itself
    let mut start = 0;
    let mut before: usize = widths[..cursor].iter().map(|(_, w)| w).sum();
    while before >= columns && start < cursor {
        before -= widths[start].1;
        start += 1;
    }

    let mut end = start;
    let mut used = 0;
    while end < widths.len() && used + widths[end].1 <= columns {
        used += widths[end].1;
        end += 1;
    }

    let byte_start = widths.get(start).map(|(i, _)| *i).unwrap_or(s.len());
    let byte_end = widths.get(end).map(|(i, _)| *i).unwrap_or(s.len());
    (&s[byte_start..byte_end], before)
}

/// Byte ranges of `s` split into lines no wider than `columns`.
///
/// Breaks after the last space that fits; a run without spaces is cut at
/// the column limit. Nothing is trimmed, so the lines concatenate back to `s`.
pub fn wrap_ranges(s: &str, columns: usize) -> Vec<Range<usize>> {
    if columns == 0 || s.is_empty() {
        return vec![0..s.len()];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while display_width(&s[start..]) > columns {
        let mut used = 0;
        let mut end = start;
        let mut last_break = None;
        for (i, c) in s[start..].char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > columns {
                break;
            }
            used += w;
            end = start + i + c.len_utf8();
            if c == ' ' {
                last_break = Some(end);
            }
        }
        // A single char wider than the line still has to go somewhere
        if end == start {
            end = start + s[start..].chars().next().map_or(0, char::len_utf8);
        }
        let cut = last_break.unwrap_or(end);
        ranges.push(start..cut);
        start = cut;
    }
    ranges.push(start..s.len());
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_counts_wide_chars_twice() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_short_text_is_not_scrolled() {
        assert_eq!(scroll_window("John", 4, 20), ("John", 4));
        assert_eq!(scroll_window("John", 0, 20), ("John", 0));
    }

    #[test]
    fn test_cursor_at_end_scrolls_left() {
        assert_eq!(scroll_window("hello world", 11, 5), ("orld", 4));
    }

    #[test]
    fn test_cursor_in_middle_keeps_start() {
        assert_eq!(scroll_window("hello world", 2, 5), ("hello", 2));
    }

    #[test]
    fn test_wide_chars_respect_boundaries() {
        let (visible, col) = scroll_window("日本語です", 5, 6);
        assert!(display_width(visible) <= 6);
        assert!(col < 6);
        assert!(visible.ends_with('す'));
    }

    #[test]
    fn test_zero_columns() {
        assert_eq!(scroll_window("abc", 1, 0), ("", 0));
    }

    #[test]
    fn test_wrap_breaks_after_spaces() {
        let text = "one two three";
        let lines: Vec<&str> = wrap_ranges(text, 8)
            .into_iter()
            .map(|r| &text[r])
            .collect();
        assert_eq!(lines, vec!["one two ", "three"]);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_wrap_cuts_unbroken_runs() {
        let text = "abcdefghij";
        let lines: Vec<&str> = wrap_ranges(text, 4).into_iter().map(|r| &text[r]).collect();
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_ranges("John", 20), vec![0..4]);
        assert_eq!(wrap_ranges("", 20), vec![0..0]);
    }
}
