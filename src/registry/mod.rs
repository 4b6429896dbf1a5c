//! Accepted-phrase registry: distinct phrases in selection order

use crate::error::{GatherError, Rejection, Result};
use crate::nlp::StopWords;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Phrases the user has gathered
#[derive(Debug, Clone, Default)]
pub struct PhraseRegistry {
    /// Insertion order
    phrases: Vec<String>,
    /// Duplicate check
    seen: FxHashSet<String>,
}

impl PhraseRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase. Surrounding whitespace is ignored.
    ///
    /// Duplicates are checked before simplicity, so re-selecting a phrase
    /// never reports it as simple.
    pub fn add(&mut self, phrase: &str, stopwords: &StopWords) -> std::result::Result<(), Rejection> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(Rejection::Empty);
        }
        if self.seen.contains(phrase) {
            return Err(Rejection::Duplicate(phrase.to_string()));
        }
        if stopwords.is_ignorable(phrase) {
            return Err(Rejection::Ignorable(phrase.to_string()));
        }

        self.seen.insert(phrase.to_string());
        self.phrases.push(phrase.to_string());
        Ok(())
    }

    /// Check if a phrase was already gathered
    pub fn contains(&self, phrase: &str) -> bool {
        self.seen.contains(phrase.trim())
    }

    /// Forget every phrase
    pub fn clear(&mut self) {
        self.phrases.clear();
        self.seen.clear();
    }

    /// Phrases in selection order
    pub fn export(&self) -> &[String] {
        &self.phrases
    }

    /// Export as file content: one phrase per line
    pub fn to_text(&self) -> String {
        self.phrases.join("\n")
    }

    /// Write the export to a file, returning how many phrases were written
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        if self.phrases.is_empty() {
            return Err(GatherError::NothingToSave);
        }

        let path = path.as_ref();
        std::fs::write(path, self.to_text()).map_err(|source| GatherError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(count = self.phrases.len(), path = %path.display(), "phrases saved");
        Ok(self.phrases.len())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_in_order() {
        let sw = StopWords::english();
        let mut registry = PhraseRegistry::new();

        assert_eq!(registry.add("cat", &sw), Ok(()));
        assert_eq!(registry.add("  sat\n", &sw), Ok(()));
        assert_eq!(registry.export(), &["cat".to_string(), "sat".to_string()]);
        assert_eq!(registry.to_text(), "cat\nsat");
        assert!(registry.contains("sat"));
    }

    #[test]
    fn test_duplicate_is_noop() {
        let sw = StopWords::english();
        let mut registry = PhraseRegistry::new();

        registry.add("the cat", &sw).unwrap();
        assert_eq!(
            registry.add("the cat", &sw),
            Err(Rejection::Duplicate("the cat".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_rejections() {
        let sw = StopWords::english();
        let mut registry = PhraseRegistry::new();

        assert_eq!(registry.add("   ", &sw), Err(Rejection::Empty));
        assert_eq!(registry.add("The", &sw), Err(Rejection::Ignorable("The".to_string())));
        assert_eq!(
            registry.add("on the", &sw),
            Err(Rejection::Ignorable("on the".to_string()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear() {
        let sw = StopWords::english();
        let mut registry = PhraseRegistry::new();

        registry.add("cat", &sw).unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.add("cat", &sw), Ok(()));
    }

    #[test]
    fn test_write_to() {
        let sw = StopWords::english();
        let mut registry = PhraseRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        assert!(matches!(registry.write_to(&path), Err(GatherError::NothingToSave)));
        assert!(!path.exists());

        registry.add("cat", &sw).unwrap();
        registry.add("sat", &sw).unwrap();
        assert_eq!(registry.write_to(&path).unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cat\nsat");
    }

    #[test]
    fn test_write_to_bad_path() {
        let sw = StopWords::english();
        let mut registry = PhraseRegistry::new();
        registry.add("cat", &sw).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let err = registry.write_to(dir.path().join("missing").join("out.txt")).unwrap_err();
        assert!(matches!(err, GatherError::Io { .. }));
    }
}
