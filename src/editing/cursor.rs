//! Text positions, selections, and word-snapping drag gestures

use crate::editing::{CharOffset, CharRange};

/// Position in document as (line, column), both 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TextPosition {
    /// Line index
    pub line: usize,
    /// Character column within the line
    pub column: usize,
}

impl TextPosition {
    /// Create a new text position
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Text selection (anchor + active point)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started
    pub anchor: CharOffset,
    /// Where the selection ended, before or after the anchor
    pub active: CharOffset,
}

impl Selection {
    /// Create a new selection
    pub fn new(anchor: impl Into<CharOffset>, active: impl Into<CharOffset>) -> Self {
        Self {
            anchor: anchor.into(),
            active: active.into(),
        }
    }

    /// Get the selected range
    pub fn range(&self) -> CharRange {
        CharRange::new(self.anchor, self.active)
    }
}

/// A press-drag-release gesture that snaps to whole words.
///
/// The anchor is the word under the pointer when the button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    anchor: CharRange,
}

impl Gesture {
    /// Start a gesture on the given word
    pub fn begin(anchor_word: CharRange) -> Self {
        Self {
            anchor: anchor_word,
        }
    }

    /// The word the gesture started on
    pub fn anchor(&self) -> CharRange {
        self.anchor
    }

    /// Span covered while the pointer is over `current_word`
    pub fn span_to(&self, current_word: CharRange) -> CharRange {
        self.anchor.cover(&current_word)
    }
}
