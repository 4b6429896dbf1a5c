//! Word tokenization
//!
//! A word is a maximal run of ASCII letters delimited by word boundaries,
//! so `abc123` and `café` yield no word for their ASCII prefix.

use crate::editing::{CharOffset, CharRange};
use regex::Regex;
use std::sync::OnceLock;

static WORD: OnceLock<Regex> = OnceLock::new();

/// The shared word pattern
pub fn word_regex() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern is valid"))
}

/// Iterate over the words of a string
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    word_regex().find_iter(text).map(|m| m.as_str())
}

/// Check if a string is exactly one word
pub fn is_single_word(text: &str) -> bool {
    word_regex()
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

/// One word occurrence in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    /// Character range of the word
    pub range: CharRange,
    /// The word as it appears in the text
    pub word: String,
}

impl TokenSpan {
    pub fn start(&self) -> CharOffset {
        self.range.start
    }

    pub fn end(&self) -> CharOffset {
        self.range.end
    }
}

/// Tokenize text into word spans with character offsets.
///
/// Spans come out sorted by start offset and never overlap.
pub fn tokenize(text: &str) -> Vec<TokenSpan> {
    let mut spans = Vec::new();
    // Regex matches are byte offsets; walk them in order and keep a running
    // character count so the conversion stays linear.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for m in word_regex().find_iter(text) {
        char_cursor += text[byte_cursor..m.start()].chars().count();
        // Matches are pure ASCII, so byte length equals char length
        let start = char_cursor;
        let end = start + m.len();
        spans.push(TokenSpan {
            range: CharRange::new(start, end),
            word: m.as_str().to_string(),
        });
        byte_cursor = m.end();
        char_cursor = end;
    }

    spans
}
