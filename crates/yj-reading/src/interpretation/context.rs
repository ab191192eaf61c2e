//! Request context handed to the interpretation pipeline.

use serde::Serialize;
use yj_core::{CastingMethod, Hexagram, Reading, Trigram};

/// One hexagram as the interpreter sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramView {
    /// The canonical record.
    pub hexagram: &'static Hexagram,
    /// Positions of changing lines, empty for the relating hexagram.
    pub changing_lines: Vec<u8>,
}

impl HexagramView {
    /// Upper trigram.
    pub fn upper(&self) -> Trigram {
        self.hexagram.upper
    }

    /// Lower trigram.
    pub fn lower(&self) -> Trigram {
        self.hexagram.lower
    }
}

/// Everything the interpretation step needs from a finished cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingContext {
    /// The querent's question, trimmed.
    pub question: String,
    /// How the lines were cast.
    pub method: CastingMethod,
    /// The hexagram as cast.
    pub primary: HexagramView,
    /// The inner hexagram of the primary.
    pub nuclear: &'static Hexagram,
    /// Where the situation is heading, if any line changed.
    pub relating: Option<HexagramView>,
}

impl ReadingContext {
    /// Build a context from a question and a resolved reading.
    pub fn new(question: impl Into<String>, method: CastingMethod, reading: &Reading) -> Self {
        let primary = HexagramView {
            hexagram: reading.primary.hexagram,
            changing_lines: reading.primary.changing_lines.clone(),
        };
        let relating = reading.relating.as_ref().map(|r| HexagramView {
            hexagram: r.hexagram,
            changing_lines: Vec::new(),
        });
        Self {
            question: question.into().trim().to_string(),
            method,
            nuclear: reading.primary.hexagram.nuclear(),
            primary,
            relating,
        }
    }

    /// Whether any line of the primary hexagram is changing.
    pub fn has_changing_lines(&self) -> bool {
        !self.primary.changing_lines.is_empty()
    }
}
