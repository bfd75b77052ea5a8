// Strips control-character noise left behind by PDF-to-text conversion and
// flattens reference statements into a single line.
//
// Two levels are offered. `strip_control_chars` keeps newlines and tabs so
// paragraph segmentation still works on the result. `clean_text` also folds
// newlines into spaces and collapses runs of spaces, which is what the
// reference statements get before they are compared against.

use std::sync::OnceLock;

use regex_lite::Regex;

fn control_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Everything in C0 except tab and line feed.
    RE.get_or_init(|| Regex::new(r"[\x00-\x08\x0B-\x1F]").expect("valid control-char pattern"))
}

fn repeated_spaces() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(" +").expect("valid space pattern"))
}

/// Remove carriage returns, form feeds, backspaces and the other C0 control
/// characters, keeping `\n` and `\t`.
pub fn strip_control_chars(text: &str) -> String {
    control_chars().replace_all(text, "").into_owned()
}

/// Replace newlines with spaces and collapse runs of spaces to one.
pub fn clean_text(text: &str) -> String {
    let flattened = strip_control_chars(text).replace('\n', " ");
    repeated_spaces().replace_all(&flattened, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_keeps_newlines_and_tabs() {
        let raw = "Line one\r\n\x0Cpage\ttwo\x08\n\nend";
        assert_eq!(strip_control_chars(raw), "Line one\npage\ttwo\n\nend");
    }

    #[test]
    fn test_clean_text_flattens() {
        let raw = "Honesty  and\nfairness\n\n  matter.";
        assert_eq!(clean_text(raw), "Honesty and fairness matter.");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_strip_is_noop_on_clean_text() {
        let text = "Nothing to strip here.";
        assert_eq!(strip_control_chars(text), text);
    }
}
