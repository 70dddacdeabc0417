//! Single-character field splitting.
//!
//! Used for CSV lines (`,`), the selected-columns list (`,`), the input text (`\n`) and the
//! filter-definition block (`\n`). No quoting or escaping is interpreted.

/// Split `text` on every occurrence of `delimiter`.
///
/// - Whitespace is preserved.
/// - Adjacent delimiters produce an empty field between them.
/// - A delimiter at the very end terminates the last field and does not start a new one.
/// - Empty input produces no fields.
///
/// ```rust
/// use csv_select::tokenizer::split;
///
/// assert_eq!(split("a,,b", ','), vec!["a", "", "b"]);
/// assert_eq!(split("a,b,", ','), vec!["a", "b"]);
/// assert!(split("", ',').is_empty());
/// ```
pub fn split(text: &str, delimiter: char) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix(delimiter).unwrap_or(text);
    body.split(delimiter).collect()
}

/// Like [`split`], but strips one trailing `\r` from every field (CRLF line endings).
pub fn split_lines(text: &str) -> Vec<&str> {
    split(text, '\n')
        .into_iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{split, split_lines};

    #[test]
    fn splits_on_every_delimiter() {
        assert_eq!(split("col1,col2,col3", ','), vec!["col1", "col2", "col3"]);
    }

    #[test]
    fn keeps_empty_fields_between_delimiters() {
        assert_eq!(split(",a,,b", ','), vec!["", "a", "", "b"]);
    }

    #[test]
    fn does_not_trim_whitespace() {
        assert_eq!(split(" a , b", ','), vec![" a ", " b"]);
    }

    #[test]
    fn trailing_delimiter_does_not_add_a_field() {
        assert_eq!(split("a=1\nb=2\n", '\n'), vec!["a=1", "b=2"]);
        assert_eq!(split(",", ','), vec![""]);
    }

    #[test]
    fn single_field_without_delimiter() {
        assert_eq!(split("header", ','), vec!["header"]);
    }

    #[test]
    fn quotes_are_not_interpreted() {
        assert_eq!(split("\"a,b\",c", ','), vec!["\"a", "b\"", "c"]);
    }

    #[test]
    fn split_lines_strips_carriage_returns() {
        assert_eq!(split_lines("h1,h2\r\n1,2\r\n"), vec!["h1,h2", "1,2"]);
    }
}
