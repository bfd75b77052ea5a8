// Document segmentation into positioned windows.
//
// Three strategies:
//   - sentence:  one window per sentence reported by the provider
//   - paragraph: split at whitespace tokens holding a blank line
//   - fixed:     `window_size` tokens, advancing `window_shift` tokens a step
//
// Windows borrow their tokens from the document and record the character
// span they cover. Segmentation is all-or-nothing: any failure returns an
// error and no windows.

use std::convert::Infallible;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::{AxidocError, Result};
use crate::nlp::document::{Document, Span};
use crate::nlp::tokenizer::is_paragraph_break;

/// Segmentation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    Sentence,
    Paragraph,
    /// Fixed-size sliding window (the default).
    Fixed,
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindowType::Sentence => "sentence",
            WindowType::Paragraph => "paragraph",
            WindowType::Fixed => "fixed",
        })
    }
}

/// Any name other than `sentence` or `paragraph` selects fixed-size windows.
impl FromStr for WindowType {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "sentence" => WindowType::Sentence,
            "paragraph" => WindowType::Paragraph,
            "fixed" | "window" | "document" => WindowType::Fixed,
            other => {
                warn!(window_type = other, "Unknown window type, using fixed-size windows");
                WindowType::Fixed
            }
        })
    }
}

/// Window size of the default analysis, in tokens.
pub const DEFAULT_WINDOW_SIZE: usize = 20;
/// Window shift of the default analysis, in tokens.
pub const DEFAULT_WINDOW_SHIFT: usize = 10;

/// Segmentation configuration. Sizes are token counts.
///
/// With every field unset the whole document is analyzed as one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowProp {
    pub window_size: Option<usize>,
    pub window_overlap: Option<usize>,
    pub window_shift: Option<usize>,
    pub window_type: Option<WindowType>,
}

impl Default for WindowProp {
    /// 20-token windows advancing 10 tokens at a time.
    fn default() -> Self {
        Self::fixed(DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SHIFT)
    }
}

impl WindowProp {
    /// No segmentation: the whole document is one window.
    pub const fn unset() -> Self {
        Self {
            window_size: None,
            window_overlap: None,
            window_shift: None,
            window_type: None,
        }
    }

    /// Fixed-size sliding windows.
    pub const fn fixed(window_size: usize, window_shift: usize) -> Self {
        Self {
            window_size: Some(window_size),
            window_overlap: None,
            window_shift: Some(window_shift),
            window_type: Some(WindowType::Fixed),
        }
    }

    /// One window per sentence.
    pub const fn sentences() -> Self {
        Self {
            window_type: Some(WindowType::Sentence),
            ..Self::unset()
        }
    }

    /// One window per paragraph.
    pub const fn paragraphs() -> Self {
        Self {
            window_type: Some(WindowType::Paragraph),
            ..Self::unset()
        }
    }

    /// Whether no field is configured.
    pub fn is_unset(&self) -> bool {
        *self == Self::unset()
    }
}

/// A contiguous span of a document under analysis.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    /// Tokens of the window, borrowed from the document.
    pub content: Span<'a>,
    /// Character offset where the window starts.
    pub start_pos: usize,
    /// Character offset one past the window's last character.
    pub end_pos: usize,
}

impl<'a> Window<'a> {
    fn from_span(content: Span<'a>) -> Self {
        Self {
            start_pos: content.start_char(),
            end_pos: content.end_char(),
            content,
        }
    }

    pub fn pos(&self) -> (usize, usize) {
        (self.start_pos, self.end_pos)
    }
}

/// Split `doc` into windows according to `prop`.
///
/// An empty document yields no windows under every strategy.
pub fn segment<'a>(doc: &'a Document, prop: &WindowProp) -> Result<Vec<Window<'a>>> {
    let strategy = prop.window_type.unwrap_or(WindowType::Fixed);
    let result = match strategy {
        WindowType::Sentence => Ok(by_sentence(doc)),
        WindowType::Paragraph => by_paragraph(doc),
        WindowType::Fixed => fixed_size(doc, prop),
    };

    match result {
        Ok(windows) => {
            info!(
                strategy = %strategy,
                tokens = doc.len(),
                windows = windows.len(),
                "Segmented document"
            );
            Ok(windows)
        }
        Err(e) => {
            error!(strategy = %strategy, error = %e, "Failed to segment document");
            Err(e)
        }
    }
}

fn by_sentence(doc: &Document) -> Vec<Window<'_>> {
    doc.sents().map(Window::from_span).collect()
}

fn by_paragraph(doc: &Document) -> Result<Vec<Window<'_>>> {
    if doc.is_empty() {
        return Ok(Vec::new());
    }

    let mut windows = Vec::new();
    let mut start = 0;
    for (i, token) in doc.tokens().iter().enumerate() {
        // Each later paragraph starts at its break token
        if token.is_space && is_paragraph_break(&token.text) && i > start {
            windows.push(window(doc, start..i)?);
            start = i;
        }
    }
    windows.push(window(doc, start..doc.len())?);

    Ok(windows)
}

fn fixed_size<'a>(doc: &'a Document, prop: &WindowProp) -> Result<Vec<Window<'a>>> {
    if prop.window_size == Some(0) {
        return Err(AxidocError::Segmentation(
            "window_size must be greater than zero".to_string(),
        ));
    }
    if prop.window_shift == Some(0) {
        return Err(AxidocError::Segmentation(
            "window_shift must be greater than zero".to_string(),
        ));
    }

    let len = doc.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let size = prop.window_size.unwrap_or(len);
    let shift = match (prop.window_shift, prop.window_overlap) {
        (Some(shift), _) => shift,
        (None, Some(overlap)) => {
            if overlap >= size {
                return Err(AxidocError::Segmentation(format!(
                    "window_overlap ({overlap}) must be less than window_size ({size})"
                )));
            }
            size - overlap
        }
        (None, None) => size,
    };

    (0..len)
        .step_by(shift)
        .map(|start| window(doc, start..(start + size).min(len)))
        .collect()
}

fn window(doc: &Document, range: Range<usize>) -> Result<Window<'_>> {
    let (start, end) = (range.start, range.end);
    doc.span(range).map(Window::from_span).ok_or_else(|| {
        AxidocError::Segmentation(format!(
            "token range {start}..{end} out of bounds for {} tokens",
            doc.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_type_parse() {
        assert_eq!("sentence".parse::<WindowType>().unwrap(), WindowType::Sentence);
        assert_eq!("document".parse::<WindowType>().unwrap(), WindowType::Fixed);
        assert_eq!("chapter".parse::<WindowType>(), Ok(WindowType::Fixed));
    }

    #[test]
    fn test_unset_detection() {
        assert!(WindowProp::unset().is_unset());
        assert!(!WindowProp::default().is_unset());
        assert!(!WindowProp::sentences().is_unset());
        let only_size = WindowProp {
            window_size: Some(5),
            ..WindowProp::unset()
        };
        assert!(!only_size.is_unset());
    }

    #[test]
    fn test_default_is_twenty_by_ten() {
        let prop = WindowProp::default();
        assert_eq!(prop.window_size, Some(20));
        assert_eq!(prop.window_shift, Some(10));
    }
}
