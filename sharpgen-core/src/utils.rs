//! String utilities for preparing text blocks before emission.

/// Strip the whitespace prefix common to all lines of `text`.
///
/// The margin is computed over lines that contain non-whitespace
/// characters; lines consisting solely of whitespace are ignored for the
/// computation and normalized to empty lines in the result. A trailing
/// newline is preserved.
///
/// ```
/// use sharpgen_core::dedent;
///
/// assert_eq!(dedent("    foo\n        bar\n"), "foo\n    bar\n");
/// ```
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - trimmed.len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }

    let margin = margin.unwrap_or("");
    let mut result = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        if !line.trim_start().is_empty() {
            result.push_str(line.strip_prefix(margin).unwrap_or(line));
        }
    }
    if text.ends_with('\n') {
        result.push('\n');
    }
    result
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_common_margin() {
        assert_eq!(dedent("    foo\n    bar"), "foo\nbar");
        assert_eq!(dedent("    foo\n        bar"), "foo\n    bar");
        assert_eq!(dedent("foo\n    bar"), "foo\n    bar");
    }

    #[test]
    fn test_dedent_no_margin() {
        assert_eq!(dedent("foo\nbar"), "foo\nbar");
        assert_eq!(dedent(""), "");
    }

    #[test]
    fn test_dedent_preserves_trailing_newline() {
        assert_eq!(dedent("    foo\n"), "foo\n");
        assert_eq!(dedent("    foo"), "foo");
    }

    #[test]
    fn test_dedent_normalizes_whitespace_only_lines() {
        assert_eq!(dedent("    foo\n        \n    bar"), "foo\n\nbar");
    }

    #[test]
    fn test_dedent_leading_blank_line() {
        assert_eq!(dedent("\n    foo\n    bar\n"), "\nfoo\nbar\n");
    }

    #[test]
    fn test_dedent_tabs() {
        assert_eq!(dedent("\tfoo\n\tbar"), "foo\nbar");
    }
}
