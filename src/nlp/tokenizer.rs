// Rule-based tokenizer and sentence splitter.
//
// Tokens are runs of alphanumeric characters (with internal apostrophes and
// decimal points), single punctuation characters, and whitespace runs. As in
// most statistical NLP pipelines, a single space directly after a token is
// treated as that token's trailing whitespace and does not become a token of
// its own; any other whitespace does. That keeps paragraph breaks ("\n\n")
// visible as tokens, which paragraph segmentation relies on.
//
// Offsets are character offsets, not byte offsets.

use std::ops::Range;

/// A token before flags and vectors are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub text: String,
    pub idx: usize,
    pub is_space: bool,
}

/// Short words that end with a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    "al", "cf", "dr", "etc", "fig", "jr", "mr", "mrs", "ms", "no", "prof", "sr", "st", "vol", "vs",
];

/// Split `text` into tokens.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens: Vec<RawToken> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            let mut j = i;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            // One trailing space belongs to the previous token
            let start = match tokens.last() {
                Some(prev) if !prev.is_space && c == ' ' => i + 1,
                _ => i,
            };
            if start < j {
                tokens.push(RawToken {
                    text: chars[start..j].iter().collect(),
                    idx: start,
                    is_space: true,
                });
            }
            i = j;
        } else if c.is_alphanumeric() {
            let mut j = i + 1;
            while j < chars.len() {
                let ch = chars[j];
                let joins_next = chars.get(j + 1).is_some_and(|n| n.is_alphanumeric());
                let prev = chars[j - 1];
                let keep = ch.is_alphanumeric()
                    || ((ch == '\'' || ch == '\u{2019}') && prev.is_alphabetic() && joins_next)
                    || ((ch == '.' || ch == ',')
                        && prev.is_ascii_digit()
                        && chars.get(j + 1).is_some_and(|n| n.is_ascii_digit()));
                if !keep {
                    break;
                }
                j += 1;
            }
            tokens.push(RawToken {
                text: chars[i..j].iter().collect(),
                idx: i,
                is_space: false,
            });
            i = j;
        } else {
            tokens.push(RawToken {
                text: c.to_string(),
                idx: i,
                is_space: false,
            });
            i += 1;
        }
    }

    tokens
}

/// Sentence boundaries as token ranges covering every token exactly once.
///
/// A sentence ends after `.`, `!` or `?` (plus any closing quotes/brackets and
/// whitespace) when the next word looks like a sentence start, and after any
/// whitespace token holding a paragraph break.
pub fn sentence_ranges(tokens: &[RawToken]) -> Vec<Range<usize>> {
    let len = tokens.len();
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < len {
        let token = &tokens[i];
        let mut cut = None;

        if token.is_space && is_paragraph_break(&token.text) {
            cut = Some(i + 1);
        } else if is_terminator(&token.text) && !is_abbreviation(tokens, i) {
            let mut end = i + 1;
            while end < len && is_closer(&tokens[end].text) {
                end += 1;
            }
            while end < len && tokens[end].is_space {
                end += 1;
            }
            if end >= len || starts_sentence(&tokens[end].text) {
                cut = Some(end);
            }
        }

        match cut {
            Some(end) => {
                push_range(&mut ranges, tokens, start..end);
                start = end;
                i = end;
            }
            None => i += 1,
        }
    }

    if start < len {
        push_range(&mut ranges, tokens, start..len);
    }

    ranges
}

/// Whether a whitespace token contains two or more newlines.
pub fn is_paragraph_break(text: &str) -> bool {
    text.matches('\n').count() >= 2
}

fn push_range(ranges: &mut Vec<Range<usize>>, tokens: &[RawToken], range: Range<usize>) {
    if range.is_empty() {
        return;
    }
    let only_space = tokens[range.clone()].iter().all(|t| t.is_space);
    match ranges.last_mut() {
        // Whitespace on its own is folded into the preceding sentence
        Some(last) if only_space => last.end = range.end,
        _ => ranges.push(range),
    }
}

fn is_terminator(text: &str) -> bool {
    matches!(text, "." | "!" | "?")
}

fn is_closer(text: &str) -> bool {
    matches!(text, "\"" | "'" | ")" | "]" | "\u{201D}" | "\u{2019}")
}

fn starts_sentence(text: &str) -> bool {
    match text.chars().next() {
        Some(c) => {
            c.is_uppercase()
                || c.is_ascii_digit()
                || matches!(c, '"' | '\'' | '(' | '[' | '\u{201C}' | '\u{2018}')
        }
        None => false,
    }
}

fn is_abbreviation(tokens: &[RawToken], i: usize) -> bool {
    if tokens[i].text != "." || i == 0 {
        return false;
    }
    let prev = &tokens[i - 1];
    if prev.is_space || !prev.text.chars().all(char::is_alphabetic) {
        return false;
    }
    prev.text.chars().count() == 1 || ABBREVIATIONS.contains(&prev.text.to_lowercase().as_str())
}
