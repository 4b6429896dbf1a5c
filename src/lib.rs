//! word-gather: selection and annotation engine for English articles
//!
//! This crate provides the engine behind an interactive reading tool:
//! - Word tokenization with cached character-offset spans
//! - Stop-word classification of words and phrases
//! - Offset↔(line, column) translation for text widgets
//! - Word-boundary-respecting occurrence counting and highlighting
//! - A deduplicated, ordered list of gathered phrases with file export
//!
//! A presentation layer owns a [`Session`] and calls into it directly from
//! its event handlers.

pub mod config;
pub mod document;
pub mod editing;
pub mod error;
pub mod nlp;
pub mod registry;
pub mod search;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmSession;

// Re-export primary types
pub use config::Config;
pub use document::{Document, LineIndex};
pub use editing::{CharOffset, CharRange, Gesture, Selection, TextPosition};
pub use error::{GatherError, Rejection, Result};
pub use nlp::{StopWords, TokenSpan};
pub use registry::PhraseRegistry;

use smallvec::SmallVec;
use std::path::{Path, PathBuf};

/// Every place an accepted phrase occurs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub phrase: String,
    pub ranges: SmallVec<[CharRange; 4]>,
}

impl Highlight {
    /// Ranges as (start, end) widget positions
    pub fn positions(&self, document: &Document) -> Vec<(TextPosition, TextPosition)> {
        self.ranges
            .iter()
            .map(|range| (document.position_of(range.start), document.position_of(range.end)))
            .collect()
    }
}

/// Outcome of a successful selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The phrase as stored
    pub phrase: String,
    /// How often it occurs in the document
    pub occurrences: usize,
    /// Where it should be highlighted
    pub ranges: SmallVec<[CharRange; 4]>,
}

/// Per-document engine state owned by the presentation layer
pub struct Session {
    config: Config,
    stopwords: StopWords,
    document: Document,
    /// File the document was read from
    source: Option<PathBuf>,
    registry: PhraseRegistry,
    highlights: Vec<Highlight>,
    gesture: Option<Gesture>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    /// Create a session with an empty document
    pub fn new(config: Config) -> Self {
        let stopwords = config.stop_words();
        Self {
            config,
            stopwords,
            document: Document::new(),
            source: None,
            registry: PhraseRegistry::new(),
            highlights: Vec::new(),
            gesture: None,
        }
    }

    /// Create a session over in-memory text
    pub fn with_text(text: impl Into<String>, config: Config) -> Self {
        let mut session = Self::new(config);
        session.load_text(text);
        session
    }

    /// Replace the document with new text, dropping every selection
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.document = Document::from_text(text, &self.stopwords);
        self.source = None;
        self.gesture = None;
        self.clear();
    }

    /// Open an article file. On failure the session is left untouched.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let document = Document::load(path, &self.stopwords)?;
        tracing::info!(
            path = %path.display(),
            words = document.tokens().len(),
            "article opened"
        );

        self.document = document;
        self.source = Some(path.to_path_buf());
        self.gesture = None;
        self.clear();
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &PhraseRegistry {
        &self.registry
    }

    /// File the current document came from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Convert a char offset to (line, column)
    pub fn position_of(&self, offset: CharOffset) -> TextPosition {
        self.document.position_of(offset)
    }

    /// Convert (line, column) to a char offset
    pub fn offset_of(&self, position: TextPosition) -> CharOffset {
        self.document.offset_of(position)
    }

    /// Find the word covering an offset
    pub fn word_at(&self, offset: CharOffset) -> Option<&TokenSpan> {
        self.document.word_at(offset)
    }

    /// Check if a phrase is made only of simple words
    pub fn is_ignorable(&self, phrase: &str) -> bool {
        self.stopwords.is_ignorable(phrase)
    }

    /// Count occurrences of a phrase
    pub fn count_occurrences(&self, phrase: &str) -> usize {
        search::count_occurrences(&self.document, &self.stopwords, phrase)
    }

    /// Find the ranges a phrase would be highlighted at
    pub fn find_occurrences(&self, phrase: &str) -> Vec<CharRange> {
        search::find_occurrences(&self.document, &self.stopwords, phrase)
    }

    /// Text between two offsets in any order, trimmed
    pub fn resolve_selection(&self, a: CharOffset, b: CharOffset) -> Option<&str> {
        self.document.resolve_selection(a, b)
    }

    /// Select the text between two offsets and gather it
    pub fn select_range(&mut self, a: CharOffset, b: CharOffset) -> Result<Accepted> {
        let phrase = self
            .document
            .resolve_selection(a, b)
            .ok_or(Rejection::Empty)?
            .to_string();
        self.accept_phrase(&phrase)
    }

    /// Gather a phrase typed or picked by the user
    pub fn accept_phrase(&mut self, phrase: &str) -> Result<Accepted> {
        if let Err(rejection) = self.registry.add(phrase, &self.stopwords) {
            tracing::debug!(%rejection, "selection discarded");
            return Err(rejection.into());
        }

        let phrase = phrase.trim().to_string();
        let ranges = SmallVec::from_vec(self.find_occurrences(&phrase));
        let occurrences = self.count_occurrences(&phrase);
        tracing::debug!(%phrase, occurrences, highlighted = ranges.len(), "phrase gathered");

        self.highlights.push(Highlight {
            phrase: phrase.clone(),
            ranges: ranges.clone(),
        });
        Ok(Accepted {
            phrase,
            occurrences,
            ranges,
        })
    }

    /// Press on the text. Returns false when the pointer is not on a word.
    pub fn begin_gesture(&mut self, offset: CharOffset) -> bool {
        self.gesture = self
            .document
            .word_at(offset)
            .map(|word| Gesture::begin(word.range));
        self.gesture.is_some()
    }

    /// Drag over the text, returning the span to preview
    pub fn drag_to(&self, offset: CharOffset) -> Option<CharRange> {
        let gesture = self.gesture.as_ref()?;
        let word = self.document.word_at(offset)?;
        Some(gesture.span_to(word.range))
    }

    /// Release the pointer, gathering the words between press and release
    pub fn finish_gesture(&mut self, offset: CharOffset) -> Result<Accepted> {
        let gesture = self.gesture.take().ok_or(Rejection::Empty)?;
        let word = self.document.word_at(offset).ok_or(Rejection::Empty)?;
        let span = gesture.span_to(word.range);
        self.select_range(span.start, span.end)
    }

    /// Abandon a gesture in progress
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    /// Highlights of every gathered phrase, in selection order
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Forget gathered phrases and their highlights
    pub fn clear(&mut self) {
        self.registry.clear();
        self.highlights.clear();
    }

    /// Gathered phrases in selection order
    pub fn export(&self) -> &[String] {
        self.registry.export()
    }

    /// File name proposed for saving
    pub fn default_export_name(&self) -> String {
        self.config.export_name(self.source())
    }

    /// Export path next to the source file, or in the working directory
    pub fn default_export_path(&self) -> PathBuf {
        let name = self.default_export_name();
        match self.source().and_then(Path::parent) {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Save gathered phrases, one per line
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.registry.write_to(path)
    }
}
