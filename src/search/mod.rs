//! Exact-match occurrence scanning
//!
//! Used both for counting how often a phrase appears and for finding the
//! ranges to highlight once it has been accepted.

use crate::document::Document;
use crate::editing::CharRange;
use crate::nlp::tokenizer::is_single_word;
use crate::nlp::StopWords;

/// Literal matches of a phrase that stand on word boundaries.
///
/// Matches may overlap: scanning resumes one character after each match
/// start. Yields byte ranges.
pub struct Matches<'a> {
    text: &'a str,
    phrase: &'a str,
    from: usize,
}

impl<'a> Matches<'a> {
    pub fn new(text: &'a str, phrase: &'a str) -> Self {
        Self {
            text,
            phrase,
            from: 0,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = std::ops::Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phrase.is_empty() {
            return None;
        }

        while self.from <= self.text.len() {
            let start = self.from + self.text[self.from..].find(self.phrase)?;
            let end = start + self.phrase.len();
            // Resume one char later; `start` is a char boundary and the
            // phrase is non-empty, so a char follows it
            self.from = start
                + self.text[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);

            if is_word_boundary(self.text, start, end) {
                return Some(start..end);
            }
        }

        None
    }
}

/// Neither neighbour of `start..end` is alphanumeric
fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Every accepted match of a phrase as char ranges.
///
/// Matches made only of stop-words are skipped. The match text equals the
/// phrase, so that check is decided once for the whole phrase.
pub fn find_occurrences(document: &Document, stopwords: &StopWords, phrase: &str) -> Vec<CharRange> {
    if stopwords.is_ignorable(phrase) {
        return Vec::new();
    }

    let text = document.text();
    let phrase_chars = phrase.chars().count();
    // Match starts only grow, so a running char count keeps this linear
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    Matches::new(text, phrase)
        .map(|bytes| {
            char_cursor += text[byte_cursor..bytes.start].chars().count();
            byte_cursor = bytes.start;
            CharRange::new(char_cursor, char_cursor + phrase_chars)
        })
        .collect()
}

/// How often a phrase occurs in the document.
///
/// A single word answers from the cached, case-insensitive frequency table;
/// anything longer is scanned for case-sensitive literal matches.
pub fn count_occurrences(document: &Document, stopwords: &StopWords, phrase: &str) -> usize {
    if is_single_word(phrase) {
        return document.word_frequency(phrase);
    }
    if stopwords.is_ignorable(phrase) {
        return 0;
    }
    Matches::new(document.text(), phrase).count()
}
