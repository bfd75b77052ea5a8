// Output formatting: terminal display, Markdown reports and JSON.

pub mod markdown;
pub mod report;
pub mod terminal;

use crate::segment::{WindowProp, WindowType};

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render an optional score with three decimals, or "n/a".
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{s:.3}"),
        None => "n/a".to_string(),
    }
}

/// Render the window configuration the way the CLI flags spell it.
pub fn describe_windows(prop: &WindowProp) -> String {
    if prop.is_unset() {
        return "whole document".to_string();
    }
    match prop.window_type {
        Some(WindowType::Sentence) => "sentences".to_string(),
        Some(WindowType::Paragraph) => "paragraphs".to_string(),
        _ => {
            let size = prop
                .window_size
                .map_or_else(|| "all".to_string(), |s| s.to_string());
            match (prop.window_shift, prop.window_overlap) {
                (Some(shift), _) => format!("{size} tokens, shift {shift}"),
                (None, Some(overlap)) => format!("{size} tokens, overlap {overlap}"),
                (None, None) => format!("{size} tokens"),
            }
        }
    }
}
