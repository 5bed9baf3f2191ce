//! Terminal text layout helpers

use unicode_width::UnicodeWidthChar;

/// Hard-wrap `s` at `width` display columns
///
/// Existing line breaks are kept. Double-width characters never straddle
/// a line boundary.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for source_line in s.lines() {
        let mut line = String::new();
        let mut line_width = 0;
        for c in source_line.chars() {
            let char_width = c.width().unwrap_or(0);
            if line_width + char_width > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(c);
            line_width += char_width;
        }
        lines.push(line);
    }
    lines
}

/// Keep at most `max_height` lines, marking the cut with an ellipsis line
pub fn truncate_lines(mut lines: Vec<String>, max_height: usize) -> Vec<String> {
    if max_height == 0 {
        return vec![];
    }
    if lines.len() > max_height {
        lines.truncate(max_height - 1);
        lines.push(String::from("..."));
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[rstest]
    #[case("hello, world!", 13, &["hello, world!"])]
    #[case("hello, world!", 4, &["hell", "o, w", "orld", "!"])]
    #[case("first\nsecond", 10, &["first", "second"])]
    #[case("こんにちは", 4, &["こん", "にち", "は"])]
    #[case("", 5, &[])]
    fn test_wrap_text(#[case] input: &str, #[case] width: usize, #[case] expected: &[&str]) {
        assert_eq!(wrap_text(input, width), owned(expected));
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_wrap_text_wide_char_in_narrow_column() {
        // A double-width char still gets its own line when the column is narrower
        assert_eq!(wrap_text("世界", 1), owned(&["世", "界"]));
    }

    #[rstest]
    #[case(&["a", "b"], 3, &["a", "b"])]
    #[case(&["a", "b", "c", "d"], 3, &["a", "b", "..."])]
    #[case(&["a", "b"], 1, &["..."])]
    #[case(&["a"], 0, &[])]
    fn test_truncate_lines(#[case] input: &[&str], #[case] max: usize, #[case] expected: &[&str]) {
        assert_eq!(truncate_lines(owned(input), max), owned(expected));
    }
}
