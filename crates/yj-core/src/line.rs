//! Hexagram lines.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The four states a cast line can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    /// Stable broken line (8).
    Yin,
    /// Stable solid line (7).
    Yang,
    /// Old yin, turning into yang (6).
    ChangingYin,
    /// Old yang, turning into yin (9).
    ChangingYang,
}

impl LineKind {
    /// The traditional numeric value: 6, 7, 8 or 9.
    pub fn value(self) -> u8 {
        match self {
            Self::ChangingYin => 6,
            Self::Yang => 7,
            Self::Yin => 8,
            Self::ChangingYang => 9,
        }
    }

    /// Line kind for a traditional numeric value.
    pub fn from_value(value: u8) -> CoreResult<Self> {
        match value {
            6 => Ok(Self::ChangingYin),
            7 => Ok(Self::Yang),
            8 => Ok(Self::Yin),
            9 => Ok(Self::ChangingYang),
            other => Err(CoreError::InvalidLineValue(other)),
        }
    }

    /// Whether the line is solid in the primary hexagram.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::Yang | Self::ChangingYang)
    }

    /// Whether the line is an old (moving) line.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::ChangingYin | Self::ChangingYang)
    }

    /// The stable line of the same polarity.
    pub fn settled(self) -> Self {
        if self.is_yang() { Self::Yang } else { Self::Yin }
    }

    /// The stable line this one becomes in the relating hexagram.
    /// Stable lines are returned unchanged.
    pub fn transformed(self) -> Self {
        match self {
            Self::ChangingYin => Self::Yang,
            Self::ChangingYang => Self::Yin,
            stable => stable,
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "yin"),
            Self::Yang => write!(f, "yang"),
            Self::ChangingYin => write!(f, "changing yin"),
            Self::ChangingYang => write!(f, "changing yang"),
        }
    }
}

/// A single cast line at a position from 1 (bottom) to 6 (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LineRecord", into = "LineRecord")]
pub struct Line {
    position: u8,
    kind: LineKind,
}

impl Line {
    /// Create a line, rejecting positions outside 1..=6.
    pub fn new(position: u8, kind: LineKind) -> CoreResult<Self> {
        if !(1..=6).contains(&position) {
            return Err(CoreError::InvalidPosition(position));
        }
        Ok(Self { position, kind })
    }

    /// Position counted from the bottom, 1..=6.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// The line state.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Whether this is a moving line.
    pub fn is_changing(&self) -> bool {
        self.kind.is_changing()
    }

    /// Whether this line is solid.
    pub fn is_yang(&self) -> bool {
        self.kind.is_yang()
    }

    /// Text glyph, top-down rendering style: changing lines are marked.
    pub fn glyph(&self) -> &'static str {
        match self.kind {
            LineKind::Yang => "━━━━━━━━━",
            LineKind::Yin => "━━━   ━━━",
            LineKind::ChangingYang => "━━━━━━━━━ o",
            LineKind::ChangingYin => "━━━   ━━━ x",
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {} ({})", self.position, self.kind, self.kind.value())
    }
}

/// Wire form of a [`Line`], carrying the derived `is_changing` flag.
#[derive(Serialize, Deserialize)]
struct LineRecord {
    position: u8,
    kind: LineKind,
    #[serde(default)]
    is_changing: bool,
}

impl From<Line> for LineRecord {
    fn from(line: Line) -> Self {
        Self {
            position: line.position,
            kind: line.kind,
            is_changing: line.is_changing(),
        }
    }
}

impl TryFrom<LineRecord> for Line {
    type Error = CoreError;

    fn try_from(record: LineRecord) -> CoreResult<Self> {
        Line::new(record.position, record.kind)
    }
}
