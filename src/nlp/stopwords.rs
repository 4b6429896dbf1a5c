//! Stop-word classification
//!
//! Closed-class English words (articles, pronouns, prepositions, auxiliary
//! and modal verbs, connectives) that are never worth gathering on their own.

use crate::nlp::tokenizer::words;
use rustc_hash::FxHashSet;

/// The built-in English list
const ENGLISH: &[&str] = &[
    // articles
    "a", "an", "the",
    // prepositions
    "in", "on", "at", "by", "with", "for", "to", "of", "from", "about", "into", "onto",
    // pronouns
    "i", "me", "my", "mine", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
    "it", "its", "we", "us", "our", "ours", "they", "them", "their", "theirs",
    // be-verbs
    "am", "is", "are", "was", "were", "be", "been", "being",
    // auxiliaries
    "do", "does", "did", "have", "has", "had",
    // modals
    "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    // demonstratives, adverbs, connectives
    "this", "that", "these", "those", "here", "there", "now", "then", "and", "or", "but", "so",
    "not", "no",
];

/// Fixed set of lowercase stop-words
#[derive(Debug, Clone)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWords {
    /// The built-in English stop-words
    pub fn english() -> Self {
        Self::from_list(ENGLISH)
    }

    /// Create a stop-word set from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Extend the set with more words before it is put to use
    pub fn with_extra<S: AsRef<str>>(mut self, extra: &[S]) -> Self {
        self.words
            .extend(extra.iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Check if a single word is a stop-word (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Check if every word of a phrase is a stop-word.
    ///
    /// A phrase without any words is ignorable too.
    pub fn is_ignorable(&self, phrase: &str) -> bool {
        words(phrase).all(|word| self.is_stopword(word))
    }

    /// Get the number of stop-words in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let stopwords = StopWords::english();

        assert!(stopwords.is_stopword("the"));
        assert!(stopwords.is_stopword("The")); // case insensitive
        assert!(stopwords.is_stopword("theirs"));
        assert!(stopwords.is_stopword("might"));
        assert!(!stopwords.is_stopword("cat"));
        assert!(!stopwords.is_stopword("if"));
        assert_eq!(stopwords.len(), ENGLISH.len());
    }

    #[test]
    fn test_single_word_ignorable() {
        let stopwords = StopWords::english();

        assert!(stopwords.is_ignorable("the"));
        assert!(stopwords.is_ignorable("THE"));
        assert!(!stopwords.is_ignorable("cat"));
    }

    #[test]
    fn test_phrase_ignorable_only_when_all_simple() {
        let stopwords = StopWords::english();

        assert!(stopwords.is_ignorable("on the"));
        assert!(stopwords.is_ignorable("It was, and is."));
        assert!(!stopwords.is_ignorable("on the mat"));
        assert!(!stopwords.is_ignorable("the cat"));
    }

    #[test]
    fn test_phrase_without_words_is_ignorable() {
        let stopwords = StopWords::english();

        assert!(stopwords.is_ignorable(""));
        assert!(stopwords.is_ignorable("42"));
        assert!(stopwords.is_ignorable("..."));
    }

    #[test]
    fn test_extra_stopwords() {
        let stopwords = StopWords::english().with_extra(&["Said", "mr"]);

        assert!(stopwords.is_stopword("said"));
        assert!(stopwords.is_stopword("Mr"));
        assert!(stopwords.is_ignorable("Mr said"));
        assert!(stopwords.is_stopword("the"));
    }

    #[test]
    fn test_custom_list() {
        let stopwords = StopWords::from_list(&["custom"]);

        assert!(stopwords.is_stopword("CUSTOM"));
        assert!(!stopwords.is_stopword("the"));
        assert!(!StopWords::from_list::<&str>(&[]).is_stopword("the"));
        assert!(StopWords::from_list::<&str>(&[]).is_empty());
    }
}
