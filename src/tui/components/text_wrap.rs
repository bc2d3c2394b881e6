//! Word wrapping of review content for terminal display.
//!
//! Widths are display columns, so accented and CJK text wrap where they
//! will actually end on screen. Runs of whitespace inside a line collapse to
//! one space; line breaks and blank lines in the source are kept.

use unicode_width::UnicodeWidthStr;

use super::text_truncate::take_columns;

/// Wraps `text` into lines no wider than `max_width` columns.
///
/// Words longer than a whole line are split. A zero width is treated as one
/// column.
#[must_use]
pub(crate) fn wrap_lines(text: &str, max_width: usize) -> Vec<String> {
    let width = max_width.max(1);
    text.lines().flat_map(|line| wrap_line(line, width)).collect()
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let separator = usize::from(!current.is_empty());
        if current.width() + separator + word.width() <= width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.push_str(split_long_word(word, width, &mut lines));
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pushes full-width chunks of `word` onto `lines` and returns the tail.
fn split_long_word<'a>(word: &'a str, width: usize, lines: &mut Vec<String>) -> &'a str {
    let mut rest = word;
    while rest.width() > width {
        let head = take_columns(rest, width);
        if head.is_empty() {
            // A single character wider than the line; emit it as is.
            break;
        }
        rest = rest.strip_prefix(head.as_str()).unwrap_or_default();
        lines.push(head);
    }
    rest
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::wrap_lines;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_lines("uma linha", 40), vec!["uma linha"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_lines("o lago estava calmo hoje", 10),
            vec!["o lago", "estava", "calmo hoje"]
        );
    }

    #[test]
    fn keeps_source_lines_and_blank_lines() {
        assert_eq!(
            wrap_lines("primeira linha\n\nsegunda linha importante", 40),
            vec!["primeira linha", "", "segunda linha importante"]
        );
    }

    #[rstest]
    #[case::ascii("abcdefghij", 4, vec!["abcd", "efgh", "ij"])]
    #[case::wide_chars("日本語です", 4, vec!["日本", "語で", "す"])]
    fn splits_words_longer_than_a_line(
        #[case] text: &str,
        #[case] width: usize,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(wrap_lines(text, width), expected);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_lines("", 10).is_empty());
    }
}
