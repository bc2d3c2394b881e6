//! Width-aware text truncation for single-line terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates `text` to `max_width` terminal columns, ending with `...` when
/// anything was cut.
///
/// Widths of three columns or fewer cannot hold text plus an ellipsis and
/// are filled with dots instead.
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }
    let mut truncated = take_columns(text, max_width.saturating_sub(ELLIPSIS.len()));
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Keeps the last `max_width` columns of `text`, starting with `...` when
/// anything was cut.
pub(crate) fn tail_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut kept = Vec::new();
    let mut width = 0usize;
    for ch in text.chars().rev() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width.saturating_add(char_width) > budget {
            break;
        }
        kept.push(ch);
        width = width.saturating_add(char_width);
    }
    let mut tail = String::from(ELLIPSIS);
    tail.extend(kept.into_iter().rev());
    tail
}

/// Returns the first line of `text`, truncated to `max_width` columns.
///
/// An ellipsis marks hidden lines as well as cut text.
pub(crate) fn first_line_preview(text: &str, max_width: usize) -> String {
    let mut lines = text.lines();
    let first_line = lines.next().unwrap_or("").trim_end();
    if lines.next().is_none() {
        return truncate_with_ellipsis(first_line, max_width);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut preview = take_columns(first_line, budget);
    preview.push_str(ELLIPSIS);
    preview
}

/// Clips `text` to exactly `columns` columns, padding with spaces.
pub(crate) fn fit_to_columns(text: &str, columns: usize) -> String {
    let mut fitted = take_columns(text, columns);
    let padding = columns.saturating_sub(fitted.width());
    fitted.extend(std::iter::repeat_n(' ', padding));
    fitted
}

pub(crate) fn take_columns(text: &str, columns: usize) -> String {
    let mut taken = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width.saturating_add(char_width) > columns {
            break;
        }
        taken.push(ch);
        width = width.saturating_add(char_width);
    }
    taken
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{first_line_preview, fit_to_columns, tail_with_ellipsis, truncate_with_ellipsis};

    #[rstest]
    #[case("curta", 20, "curta")]
    #[case("uma avaliação muito longa demais", 12, "uma avali...")]
    #[case("abcdef", 0, "")]
    #[case("abcdef", 2, "..")]
    #[case("你好世界", 5, "你...")]
    fn truncates_to_display_width(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_with_ellipsis(text, width), expected);
    }

    #[test]
    fn preview_marks_hidden_lines() {
        assert_eq!(first_line_preview("linha um\nlinha dois", 40), "linha um...");
    }

    #[test]
    fn preview_of_single_line_is_plain_truncation() {
        assert_eq!(first_line_preview("linha única", 40), "linha única");
    }

    #[rstest]
    #[case::pads_short("ab", 4, "ab  ")]
    #[case::clips_long("abcdef", 3, "abc")]
    #[case::wide_char_not_split("日本", 3, "日 ")]
    fn fit_to_columns_yields_exact_width(
        #[case] text: &str,
        #[case] columns: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(fit_to_columns(text, columns), expected);
    }

    #[rstest]
    #[case("curta", 20, "curta")]
    #[case("uma avaliação muito longa demais", 12, "...ga demais")]
    #[case("abcdef", 0, "")]
    #[case("abcdef", 3, "...")]
    #[case("你好世界", 5, "...界")]
    fn tail_keeps_last_columns(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(tail_with_ellipsis(text, width), expected);
    }
}
