//! Character offsets and ranges

use serde::Serialize;

/// Absolute character offset in the document.
///
/// Counted in Unicode scalar values, the unit a text widget uses for
/// columns, not in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct CharOffset(pub usize);

impl CharOffset {
    /// Create a new character offset
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }
}

impl From<usize> for CharOffset {
    fn from(offset: usize) -> Self {
        Self(offset)
    }
}

/// Half-open range of character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct CharRange {
    pub start: CharOffset,
    pub end: CharOffset,
}

impl CharRange {
    /// Create a range from two offsets given in any order
    pub fn new(a: impl Into<CharOffset>, b: impl Into<CharOffset>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Smallest range covering both ranges
    pub fn cover(&self, other: &CharRange) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Number of characters in the range
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset lies inside the range
    pub fn contains(&self, offset: CharOffset) -> bool {
        self.start <= offset && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalizes_order() {
        let range = CharRange::new(15, 10);
        assert_eq!(range.start, CharOffset(10));
        assert_eq!(range.end, CharOffset(15));
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_range_cover() {
        let a = CharRange::new(4, 7);
        let b = CharRange::new(12, 15);
        assert_eq!(a.cover(&b), CharRange::new(4, 15));
        assert_eq!(b.cover(&a), CharRange::new(4, 15));
    }

    #[test]
    fn test_range_contains_is_half_open() {
        let range = CharRange::new(4, 7);
        assert!(!range.contains(CharOffset(3)));
        assert!(range.contains(CharOffset(4)));
        assert!(range.contains(CharOffset(6)));
        assert!(!range.contains(CharOffset(7)));
        assert!(CharRange::new(3, 3).is_empty());
    }
}
