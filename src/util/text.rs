use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// Unicode-aware: CJK characters and emoji count as 2 columns, combining
/// marks as 0, ASCII as 1.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit within `max_width` terminal columns, appending
/// "..." when text was cut off.
///
/// Returns `Cow::Borrowed` when the string already fits. For widths of 3
/// columns or less there is no room for a character plus ellipsis, so as
/// many characters as fit are returned without the ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let budget = max_width.saturating_sub(ELLIPSIS_WIDTH);
    let mut used = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + c.len_utf8();
    }

    if max_width <= ELLIPSIS_WIDTH {
        // Too narrow for an ellipsis; refit without reserving space for it.
        let mut used = 0;
        let mut end = 0;
        for (idx, c) in s.char_indices() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > max_width {
                break;
            }
            used += w;
            end = idx + c.len_utf8();
        }
        return Cow::Owned(s[..end].to_string());
    }

    Cow::Owned(format!("{}{}", &s[..end], ELLIPSIS))
}

/// Word-wrap a paragraph to lines of at most `width` columns.
///
/// Splits on whitespace and greedily fills lines. A single word wider than
/// `width` is hard-broken at character boundaries so no line ever exceeds
/// the limit. Returns an empty vec for `width == 0`.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in s.split_whitespace() {
        let word_width = display_width(word);

        if word_width > width {
            // Flush the current line, then hard-break the long word.
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            let mut chunk = String::new();
            let mut chunk_width = 0;
            for c in word.chars() {
                let w = UnicodeWidthChar::width(c).unwrap_or(0);
                if chunk_width + w > width {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(c);
                chunk_width += w;
            }
            line = chunk;
            line_width = chunk_width;
            continue;
        }

        let needed = if line.is_empty() {
            word_width
        } else {
            word_width + 1
        };
        if line_width + needed > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
            line.push_str(word);
            line_width += word_width;
        } else {
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii_and_cjk() {
        assert_eq!(display_width("Hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_fits_returns_borrowed() {
        let result = truncate_to_width("Short", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Short");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }

    #[test]
    fn truncate_cjk_never_splits_codepoints() {
        assert_eq!(truncate_to_width("你好世界", 7), "你好...");
        assert_eq!(truncate_to_width("你好", 10), "你好");
    }

    #[test]
    fn truncate_narrow_widths() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Testing", 1), "T");
        assert_eq!(truncate_to_width("Testing", 3), "Tes");
        // CJK char is 2 columns, does not fit in width 1
        assert_eq!(truncate_to_width("你好", 1), "");
    }

    #[test]
    fn wrap_empty_and_zero_width() {
        assert!(wrap_text("", 20).is_empty());
        assert!(wrap_text("anything at all", 0).is_empty());
    }

    #[test]
    fn wrap_fills_lines_greedily() {
        let lines = wrap_text("the quick brown fox jumps over", 15);
        assert_eq!(lines, vec!["the quick brown", "fox jumps over"]);
        for line in &lines {
            assert!(display_width(line) <= 15);
        }
    }

    #[test]
    fn wrap_single_short_line() {
        assert_eq!(wrap_text("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        let lines = wrap_text("supercalifragilistic", 6);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(display_width(line) <= 6);
        }
        assert_eq!(lines.join(""), "supercalifragilistic");
    }

    #[test]
    fn wrap_collapses_whitespace() {
        let lines = wrap_text("a   b\t\tc", 10);
        assert_eq!(lines, vec!["a b c"]);
    }
}
