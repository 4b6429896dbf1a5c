//! Editing model: offsets, positions, selections, and drag gestures

mod cursor;
mod offset;

pub use cursor::{Gesture, Selection, TextPosition};
pub use offset::{CharOffset, CharRange};
