//! # Text Layout
//!
//! Fixed-width helpers shared by the overview and detail views. Widths are
//! measured in terminal columns via `unicode-width`, so plain ASCII costs one
//! column per character.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to text cut short by [`truncate`].
pub const ELLIPSIS: char = '…';

/// Character used for horizontal separator rules.
pub const RULE_CHAR: char = '-';

/// Clip `text` to at most `max_width` columns.
///
/// Text that already fits is returned unchanged. Otherwise the result keeps as
/// many leading characters as fit in `max_width - 1` columns and ends with
/// [`ELLIPSIS`]. A zero width yields an empty string.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::with_capacity(max_width);
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap.
///
/// `text` is split on `\n` into paragraphs first; a blank paragraph becomes a
/// blank output line. Words are packed into lines no wider than `width`, and a
/// word that is wider than `width` on its own gets a line to itself, unbroken.
///
/// With `max_lines`, output stops as soon as that many lines exist, even in the
/// middle of a paragraph.
pub fn wrap(text: &str, width: usize, max_lines: Option<usize>) -> Vec<String> {
    let limit = max_lines.unwrap_or(usize::MAX);
    let mut lines = Vec::new();
    if limit == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            if lines.len() >= limit {
                return lines;
            }
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };

            if current.is_empty() || candidate <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                if lines.len() >= limit {
                    return lines;
                }
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
            if lines.len() >= limit {
                return lines;
            }
        }
    }

    lines
}

/// Drop the first `n` characters of `text` (horizontal scrolling).
pub fn skip_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

/// A separator rule spanning `width` columns.
pub fn rule(width: usize) -> String {
    RULE_CHAR.to_string().repeat(width)
}

/// True for lines made up only of [`RULE_CHAR`] (ignoring surrounding spaces).
pub fn is_rule(text: &str) -> bool {
    text.starts_with(RULE_CHAR) && text.trim().chars().all(|c| c == RULE_CHAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 80), "hello");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate("hello world", 8);
        assert_eq!(out, "hello w…");
        assert_eq!(out.chars().count(), 8);
    }

    #[test]
    fn test_truncate_tiny_widths() {
        assert_eq!(truncate("hello", 0), "");
        assert_eq!(truncate("hello", 1), "…");
        assert_eq!(truncate("hello", 2), "h…");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        // each CJK glyph is two columns wide
        let out = truncate("日本語テキスト", 6);
        assert!(out.width() <= 6);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncate_width_property() {
        let samples = ["", "a", "abc def", "a much longer line of text here"];
        for s in samples {
            for w in 0..40 {
                let out = truncate(s, w);
                assert!(out.width() <= w, "{s:?} at {w} gave {out:?}");
                if s.width() <= w {
                    assert_eq!(out, s);
                } else if w >= 1 {
                    assert!(out.ends_with(ELLIPSIS));
                    assert_eq!(out.chars().count(), w);
                }
            }
        }
    }

    #[test]
    fn test_wrap_greedy() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10, None);
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
    }

    #[test]
    fn test_wrap_preserves_blank_paragraphs() {
        let lines = wrap("first\n\nsecond", 20, None);
        assert_eq!(lines, vec!["first", "", "second"]);

        let lines = wrap("", 20, None);
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_wrap_long_word_unbroken() {
        let lines = wrap("a supercalifragilistic word", 6, None);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn test_wrap_max_lines_stops_mid_paragraph() {
        let lines = wrap("one two three four five six", 4, Some(3));
        assert_eq!(lines, vec!["one", "two", "three"]);

        assert!(wrap("anything", 10, Some(0)).is_empty());
        assert_eq!(wrap("\n\n\n\n", 10, Some(2)).len(), 2);
    }

    #[test]
    fn test_wrap_line_width_property() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua.\n\nUt enim";
        for width in 1..30 {
            for line in wrap(text, width, None) {
                let single_word = !line.contains(' ');
                assert!(line.width() <= width || single_word, "{line:?} > {width}");
            }
        }
    }

    #[test]
    fn test_skip_chars() {
        assert_eq!(skip_chars("abcdef", 0), "abcdef");
        assert_eq!(skip_chars("abcdef", 2), "cdef");
        assert_eq!(skip_chars("abc", 3), "");
        assert_eq!(skip_chars("abc", 10), "");
        assert_eq!(skip_chars("héllo", 2), "llo");
    }

    #[test]
    fn test_rule_detection() {
        assert_eq!(rule(4), "----");
        assert!(is_rule("----"));
        assert!(is_rule("-"));
        assert!(!is_rule(""));
        assert!(!is_rule("- item"));
        assert!(!is_rule("  --"));
    }
}
