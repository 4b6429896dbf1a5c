//! Natural Language Processing components
//!
//! This module provides word tokenization and stop-word classification.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopWords;
pub use tokenizer::{tokenize, words, TokenSpan};
