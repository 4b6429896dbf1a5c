//! Document model: immutable text plus the caches derived from it

mod lines;

pub use lines::LineIndex;

use crate::editing::{CharOffset, CharRange, Selection, TextPosition};
use crate::error::{GatherError, Result};
use crate::nlp::{tokenize, StopWords, TokenSpan};
use rustc_hash::FxHashMap;
use std::path::Path;

/// The loaded article
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Full text content
    text: String,
    /// Line index for offset↔position translation
    lines: LineIndex,
    /// Word spans in appearance order
    tokens: Vec<TokenSpan>,
    /// Lowercase word → occurrences, stop-words excluded
    word_counts: FxHashMap<String, usize>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from text, building every cache in one pass
    pub fn from_text(text: impl Into<String>, stopwords: &StopWords) -> Self {
        let text = text.into();
        let lines = LineIndex::new(&text);
        let tokens = tokenize(&text);

        let mut word_counts = FxHashMap::default();
        for token in &tokens {
            let lower = token.word.to_lowercase();
            if !stopwords.is_stopword(&lower) {
                *word_counts.entry(lower).or_insert(0) += 1;
            }
        }

        tracing::debug!(
            lines = lines.line_count(),
            tokens = tokens.len(),
            distinct = word_counts.len(),
            "document indexed"
        );

        Self {
            text,
            lines,
            tokens,
            word_counts,
        }
    }

    /// Read a UTF-8 file into a document.
    ///
    /// `\r\n` and lone `\r` line endings are read as `\n`.
    pub fn load(path: impl AsRef<Path>, stopwords: &StopWords) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GatherError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(normalize_newlines(text), stopwords))
    }

    /// Get the full document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the line index
    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    /// Word spans, sorted by start offset
    pub fn tokens(&self) -> &[TokenSpan] {
        &self.tokens
    }

    /// Cached frequency of a word (case-insensitive, 0 for stop-words)
    pub fn word_frequency(&self, word: &str) -> usize {
        self.word_counts
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Most frequent substantive words, ties broken alphabetically
    pub fn top_words(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut counts: Vec<_> = self
            .word_counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(limit);
        counts
    }

    /// Convert a char offset to (line, column)
    pub fn position_of(&self, offset: CharOffset) -> TextPosition {
        self.lines.position_of(offset)
    }

    /// Convert (line, column) to a char offset
    pub fn offset_of(&self, position: TextPosition) -> CharOffset {
        self.lines.offset_of(position)
    }

    /// Find the word covering an offset
    pub fn word_at(&self, offset: CharOffset) -> Option<&TokenSpan> {
        // Spans are sorted and disjoint: the candidate is the last span
        // starting at or before the offset
        let idx = self
            .tokens
            .partition_point(|span| span.start() <= offset)
            .checked_sub(1)?;
        let span = &self.tokens[idx];
        span.range.contains(offset).then_some(span)
    }

    /// Text covered by a char range, clamped to the document
    pub fn slice(&self, range: CharRange) -> &str {
        let start = self.byte_of(range.start);
        let end = self.byte_of(range.end);
        &self.text[start..end]
    }

    /// Resolve two offsets, given in any order, to the trimmed text between
    /// them. `None` when nothing but whitespace is covered.
    pub fn resolve_selection(&self, a: CharOffset, b: CharOffset) -> Option<&str> {
        let selected = self.slice(Selection::new(a, b).range()).trim();
        (!selected.is_empty()).then_some(selected)
    }

    /// Byte offset of a char offset, clamped to the text
    pub(crate) fn byte_of(&self, offset: CharOffset) -> usize {
        let position = self.lines.position_of(offset);
        let line_start = self.lines.line_byte_start(position.line);
        self.text[line_start..]
            .char_indices()
            .nth(position.column)
            .map_or(self.text.len(), |(idx, _)| line_start + idx)
    }
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = "The cat sat on the mat. The cat ran.";

    fn doc(text: &str) -> Document {
        Document::from_text(text, &StopWords::english())
    }

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert_eq!(doc.len(), 0);
        assert!(doc.is_empty());
        assert!(doc.tokens().is_empty());
        assert!(doc.word_at(CharOffset(0)).is_none());
    }

    #[test]
    fn test_word_counts_skip_stopwords() {
        let doc = doc(SAMPLE);
        assert_eq!(doc.tokens().len(), 9);
        assert_eq!(doc.word_frequency("cat"), 2);
        assert_eq!(doc.word_frequency("CAT"), 2);
        assert_eq!(doc.word_frequency("the"), 0);
        assert_eq!(doc.word_frequency("dog"), 0);
    }

    #[test]
    fn test_top_words() {
        let doc = doc(SAMPLE);
        assert_eq!(doc.top_words(2), vec![("cat", 2), ("mat", 1)]);
        assert_eq!(doc.top_words(10).len(), 4);
    }

    #[test]
    fn test_word_at() {
        let doc = doc(SAMPLE);

        let word = doc.word_at(CharOffset(5)).map(|t| t.word.as_str());
        assert_eq!(word, Some("cat"));
        assert_eq!(doc.word_at(CharOffset(4)).map(|t| t.start()), Some(CharOffset(4)));
        // End is exclusive: offset 7 is the space after "cat"
        assert!(doc.word_at(CharOffset(7)).is_none());
        // Period after "mat"
        assert!(doc.word_at(CharOffset(22)).is_none());
        assert!(doc.word_at(CharOffset(1000)).is_none());
    }

    #[test]
    fn test_resolve_selection() {
        let doc = doc(SAMPLE);

        assert_eq!(doc.resolve_selection(CharOffset(4), CharOffset(7)), Some("cat"));
        assert_eq!(doc.resolve_selection(CharOffset(11), CharOffset(3)), Some("cat sat"));
        assert_eq!(doc.resolve_selection(CharOffset(3), CharOffset(4)), None);
        assert_eq!(doc.resolve_selection(CharOffset(5), CharOffset(5)), None);
        // Clamped to the end
        assert_eq!(doc.resolve_selection(CharOffset(32), CharOffset(99)), Some("ran."));
    }

    #[test]
    fn test_multibyte_slicing() {
        let doc = doc("Café au lait\nnaïve reader");

        assert_eq!(doc.slice(CharRange::new(0, 4)), "Café");
        assert_eq!(doc.slice(CharRange::new(13, 18)), "naïve");
        assert_eq!(doc.byte_of(CharOffset(4)), 5);
        assert_eq!(doc.byte_of(CharOffset(doc.len())), doc.text().len());
        assert_eq!(doc.word_at(CharOffset(20)).map(|t| t.word.as_str()), Some("reader"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Document::load("/definitely/not/here.txt", &StopWords::english()).unwrap_err();
        assert!(matches!(err, GatherError::Io { .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let doc = Document::load(&path, &StopWords::english()).unwrap();
        assert_eq!(doc.text(), SAMPLE);
        assert_eq!(doc.word_frequency("mat"), 1);
    }

    #[test]
    fn test_load_normalizes_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        std::fs::write(&path, "big\r\ndog and more\rend").unwrap();

        let doc = Document::load(&path, &StopWords::english()).unwrap();
        assert_eq!(doc.text(), "big\ndog and more\nend");
        assert_eq!(doc.lines().line_count(), 3);
        assert_eq!(doc.resolve_selection(CharOffset(0), CharOffset(7)), Some("big\ndog"));
    }

    proptest! {
        #[test]
        fn token_spans_sorted_and_disjoint(text in "[a-zA-Z0-9 .,'\n\u{e9}]{0,200}") {
            let doc = doc(&text);
            for pair in doc.tokens().windows(2) {
                prop_assert!(pair[0].end() <= pair[1].start());
            }
            for token in doc.tokens() {
                prop_assert!(token.start() < token.end());
                prop_assert_eq!(doc.slice(token.range), token.word.as_str());
            }
        }

        #[test]
        fn offset_position_round_trip(text in "[a-z \n\u{e9}]{0,120}") {
            let doc = doc(&text);
            for x in 0..=doc.len() {
                let offset = CharOffset(x);
                prop_assert_eq!(doc.offset_of(doc.position_of(offset)), offset);
            }
        }

        #[test]
        fn byte_of_agrees_with_char_indices(text in "[a-z \n\u{e9}\u{4e2d}]{0,80}") {
            let doc = doc(&text);
            for (x, (byte, _)) in text.char_indices().enumerate() {
                prop_assert_eq!(doc.byte_of(CharOffset(x)), byte);
            }
        }
    }
}
