//! WASM bindings for the session

use crate::{Accepted, CharOffset, CharRange, Config, Result, Session, TextPosition};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed session wrapper
#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Session::default(),
        }
    }

    /// Create a session from a JSON config
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> std::result::Result<WasmSession, JsError> {
        let config = Config::from_json(config_json)?;
        Ok(Self {
            session: Session::new(config),
        })
    }

    /// Replace the article text
    #[wasm_bindgen(js_name = loadText)]
    pub fn load_text(&mut self, text: &str) {
        self.session.load_text(text);
    }

    /// Gather the text between two offsets (returns JSON)
    #[wasm_bindgen(js_name = selectRange)]
    pub fn select_range(&mut self, a: usize, b: usize) -> String {
        report(self.session.select_range(CharOffset(a), CharOffset(b)))
    }

    /// Gather a phrase (returns JSON)
    #[wasm_bindgen(js_name = acceptPhrase)]
    pub fn accept_phrase(&mut self, phrase: &str) -> String {
        report(self.session.accept_phrase(phrase))
    }

    /// Pointer pressed at an offset
    #[wasm_bindgen(js_name = beginGesture)]
    pub fn begin_gesture(&mut self, offset: usize) -> bool {
        self.session.begin_gesture(CharOffset(offset))
    }

    /// Pointer dragged to an offset: `[start, end]` to preview, or empty
    #[wasm_bindgen(js_name = dragTo)]
    pub fn drag_to(&self, offset: usize) -> Vec<u32> {
        self.session
            .drag_to(CharOffset(offset))
            .map(|range| flatten_range(&self.session, range).to_vec())
            .unwrap_or_default()
    }

    /// Pointer released at an offset (returns JSON)
    #[wasm_bindgen(js_name = finishGesture)]
    pub fn finish_gesture(&mut self, offset: usize) -> String {
        report(self.session.finish_gesture(CharOffset(offset)))
    }

    /// Count occurrences of a phrase
    #[wasm_bindgen(js_name = countOccurrences)]
    pub fn count_occurrences(&self, phrase: &str) -> usize {
        self.session.count_occurrences(phrase)
    }

    /// Get `[line, column]` for an offset
    #[wasm_bindgen(js_name = positionOf)]
    pub fn position_of(&self, offset: usize) -> Vec<u32> {
        let position = self.session.position_of(CharOffset(offset));
        vec![position.line as u32, position.column as u32]
    }

    /// Get the offset of a line and column
    #[wasm_bindgen(js_name = offsetOf)]
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        self.session.offset_of(TextPosition::new(line, column)).0
    }

    /// Get the word under an offset
    #[wasm_bindgen(js_name = wordAt)]
    pub fn word_at(&self, offset: usize) -> Option<String> {
        self.session
            .word_at(CharOffset(offset))
            .map(|token| token.word.clone())
    }

    /// Every highlight as flat quadruples
    /// `[start_line, start_column, end_line, end_column, ...]`
    #[wasm_bindgen(js_name = highlightRanges)]
    pub fn highlight_ranges(&self) -> Vec<u32> {
        self.session
            .highlights()
            .iter()
            .flat_map(|highlight| highlight.ranges.iter())
            .flat_map(|range| flatten_range(&self.session, *range))
            .collect()
    }

    /// Gathered phrases, one per line
    #[wasm_bindgen(js_name = exportText)]
    pub fn export_text(&self) -> String {
        self.session.registry().to_text()
    }

    /// Number of gathered phrases
    #[wasm_bindgen(js_name = phraseCount)]
    pub fn phrase_count(&self) -> usize {
        self.session.registry().len()
    }

    /// Forget gathered phrases
    pub fn clear(&mut self) {
        self.session.clear();
    }
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable selection outcome for JS
#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectionReport {
    pub accepted: bool,
    pub phrase: Option<String>,
    pub occurrences: usize,
    pub ranges: Vec<CharRange>,
    /// Notice to show when the selection was discarded
    pub reason: Option<String>,
}

impl SelectionReport {
    fn from_result(result: Result<Accepted>) -> Self {
        match result {
            Ok(accepted) => Self {
                accepted: true,
                phrase: Some(accepted.phrase),
                occurrences: accepted.occurrences,
                ranges: accepted.ranges.into_vec(),
                reason: None,
            },
            Err(err) => Self {
                reason: Some(err.to_string()),
                ..Self::default()
            },
        }
    }
}

fn report(result: Result<Accepted>) -> String {
    // Plain data with string keys cannot fail to serialize
    serde_json::to_string(&SelectionReport::from_result(result)).unwrap_or_default()
}

fn flatten_range(session: &Session, range: CharRange) -> [u32; 4] {
    let start = session.position_of(range.start);
    let end = session.position_of(range.end);
    [
        start.line as u32,
        start.column as u32,
        end.line as u32,
        end.column as u32,
    ]
}
