//! The 64 hexagrams and pattern resolution.
//!
//! Every combination of 8 lower and 8 upper trigrams appears exactly once in
//! the table, so [`resolve`] is total over all 64 [`LinePattern`]s.

mod pattern;
mod table;

pub use pattern::LinePattern;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::trigram::Trigram;
use table::TABLE;

static HEXAGRAMS: [Hexagram; 64] = TABLE;

/// A canonical hexagram record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// King Wen number, 1..=64.
    pub number: u8,
    /// English name.
    pub name: &'static str,
    /// Romanised Chinese name.
    pub pinyin: &'static str,
    /// Chinese characters.
    pub character: &'static str,
    /// Lines 4-6.
    pub upper: Trigram,
    /// Lines 1-3.
    pub lower: Trigram,
    /// Traditional judgment text.
    pub judgment: &'static str,
    /// Traditional image text.
    pub image: &'static str,
    /// Thematic keywords.
    pub keywords: &'static [&'static str],
}

impl Hexagram {
    /// The six-line shape: lower trigram bits, then upper trigram bits.
    pub fn pattern(&self) -> LinePattern {
        LinePattern::from_trigrams(self.lower, self.upper)
    }

    /// Lines bottom to top, `true` = yang.
    pub fn lines(&self) -> [bool; 6] {
        self.pattern().to_bools()
    }

    /// The inner hexagram formed by lines 2-4 and 3-5.
    pub fn nuclear(&self) -> &'static Hexagram {
        resolve(self.pattern().nuclear())
    }

    /// Unicode hexagram symbol (U+4DC0 block, King Wen order).
    pub fn symbol(&self) -> char {
        char::from_u32(0x4DC0 + u32::from(self.number) - 1).unwrap_or('?')
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}. {} ({} {})",
            self.symbol(),
            self.number,
            self.name,
            self.pinyin,
            self.character
        )
    }
}

/// Pattern-indexed lookup into the table, built at compile time.
const BY_PATTERN: [u8; 64] = build_pattern_index();

const fn build_pattern_index() -> [u8; 64] {
    let mut index = [0u8; 64];
    let mut i = 0;
    while i < TABLE.len() {
        let hex = &TABLE[i];
        let bits = LinePattern::from_trigrams(hex.lower, hex.upper).bits();
        index[bits as usize] = hex.number;
        i += 1;
    }
    index
}

/// All 64 hexagrams in King Wen order.
pub fn all() -> &'static [Hexagram; 64] {
    &HEXAGRAMS
}

/// Look up a hexagram by its King Wen number.
pub fn by_number(number: u8) -> CoreResult<&'static Hexagram> {
    if !(1..=64).contains(&number) {
        return Err(CoreError::UnknownHexagram(number));
    }
    Ok(&HEXAGRAMS[usize::from(number) - 1])
}

/// Look up the hexagram for a pattern, `None` only if the table is corrupt.
pub fn try_resolve(pattern: LinePattern) -> Option<&'static Hexagram> {
    let number = BY_PATTERN[usize::from(pattern.bits())];
    let hex = HEXAGRAMS.get(usize::from(number).checked_sub(1)?)?;
    (hex.pattern() == pattern).then_some(hex)
}

/// Resolve a six-line pattern to its hexagram.
///
/// # Panics
///
/// Panics if the static table does not contain the pattern. The table is
/// total by construction and tested exhaustively, so this indicates a
/// corrupted build rather than a runtime condition.
pub fn resolve(pattern: LinePattern) -> &'static Hexagram {
    match try_resolve(pattern) {
        Some(hex) => hex,
        None => panic!("hexagram table corruption: no entry for pattern {pattern}"),
    }
}
