//! Escaping for single-quoted JavaScript string literals.
//!
//! Everything the crate embeds into a string literal funnels through
//! [`escape`]; wrapper layers must never splice caller text between quotes
//! directly.

/// Escape `input` so it is safe between the quotes of a single-quoted
/// JavaScript string literal.
///
/// A single left-to-right pass maps each source character at most once, so
/// the backslash escape can never re-trigger on the output of the quote
/// escape. Raw line terminators (`\n`, `\r`, and the Unicode separators
/// U+2028/U+2029) become escape sequences; a raw line break inside a
/// non-template literal is invalid JavaScript.
///
/// Total over all input, including the empty string. NOT idempotent:
/// escaping already-escaped text double-escapes it. Callers must escape raw
/// text exactly once and never feed the output of a prior call back in.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `input` as a complete single-quoted JavaScript string literal.
#[must_use]
pub fn quote(input: &str) -> String {
    format!("'{}'", escape(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn quote_and_backslash() {
        assert_eq!(escape("it's"), "it\\'s");
        assert_eq!(escape("a\\b"), "a\\\\b");
    }

    #[test]
    fn backslash_then_quote_does_not_double_escape() {
        // \' in the input is a backslash followed by a quote: each escapes
        // independently, never as a unit.
        assert_eq!(escape("\\'"), "\\\\\\'");
    }

    #[test]
    fn line_terminators() {
        assert_eq!(escape("a\nb"), "a\\nb");
        assert_eq!(escape("a\r\nb"), "a\\r\\nb");
        assert_eq!(escape("a\tb"), "a\\tb");
        assert_eq!(escape("a\u{2028}b"), "a\\u2028b");
        assert_eq!(escape("a\u{2029}b"), "a\\u2029b");
    }

    #[test]
    fn mixed_input() {
        let escaped = escape("It's a \"test\"\nline2");
        assert_eq!(escaped, "It\\'s a \"test\"\\nline2");
        assert!(!escaped.contains('\n'));
    }

    #[test]
    fn double_quotes_pass_through() {
        // Double quotes are harmless inside a single-quoted literal.
        assert_eq!(escape("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn quote_wraps() {
        assert_eq!(quote("a,b"), "'a,b'");
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote(""), "''");
    }
}
