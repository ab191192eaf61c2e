//! Six-bit line patterns.

use serde::{Deserialize, Serialize};

use crate::trigram::Trigram;

/// A hexagram shape: bit 0 is the bottom line, bit 5 the top, set = yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinePattern(u8);

impl LinePattern {
    /// Build from raw bits; only the low six bits are kept.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11_1111)
    }

    /// Stack an upper trigram on a lower one.
    pub const fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        Self(lower.bits() | (upper.bits() << 3))
    }

    /// Build from lines bottom to top, `true` = yang.
    pub fn from_bools(lines: [bool; 6]) -> Self {
        let bits = lines
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, yang)| if *yang { acc | (1 << i) } else { acc });
        Self(bits)
    }

    /// The raw six bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Lines bottom to top, `true` = yang.
    pub fn to_bools(self) -> [bool; 6] {
        std::array::from_fn(|i| self.0 & (1 << i) != 0)
    }

    /// Whether the line at `position` (1..=6) is yang.
    pub fn is_yang(self, position: u8) -> bool {
        (1..=6).contains(&position) && self.0 & (1 << (position - 1)) != 0
    }

    /// The pattern with the lines at the given positions (1..=6) inverted.
    /// Positions outside that range are ignored.
    pub fn flip(self, positions: &[u8]) -> Self {
        let mask = positions
            .iter()
            .filter(|p| (1..=6).contains(*p))
            .fold(0u8, |acc, p| acc | (1 << (p - 1)));
        Self(self.0 ^ mask)
    }

    /// Lines 1-3.
    pub const fn lower(self) -> Trigram {
        Trigram::from_bits(self.0)
    }

    /// Lines 4-6.
    pub const fn upper(self) -> Trigram {
        Trigram::from_bits(self.0 >> 3)
    }

    /// The nuclear pattern: lines 2-4 below, lines 3-5 above.
    pub const fn nuclear(self) -> Self {
        let lower = (self.0 >> 1) & 0b111;
        let upper = (self.0 >> 2) & 0b111;
        Self(lower | (upper << 3))
    }
}

impl std::fmt::Display for LinePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // top line first, the way a hexagram is drawn
        for yang in self.to_bools().iter().rev() {
            write!(f, "{}", if *yang { '1' } else { '0' })?;
        }
        Ok(())
    }
}
