//! The eight trigrams.
//!
//! Every hexagram is a lower and an upper trigram. Each trigram is a 3-bit
//! pattern read bottom to top (bit 0 is the bottom line, set = yang) with the
//! traditional correspondences of the later-heaven arrangement.

use serde::{Deserialize, Serialize};

/// One of the eight three-line figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ Qian, three yang lines.
    Heaven,
    /// ☱ Dui, yang below yin.
    Lake,
    /// ☲ Li, yin between yang.
    Fire,
    /// ☳ Zhen, yang beneath two yin.
    Thunder,
    /// ☴ Xun, yin beneath two yang.
    Wind,
    /// ☵ Kan, yang between yin.
    Water,
    /// ☶ Gen, yang above two yin.
    Mountain,
    /// ☷ Kun, three yin lines.
    Earth,
}

/// The five phases associated with the trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Heaven and Lake.
    Metal,
    /// Thunder and Wind.
    Wood,
    /// Water.
    Water,
    /// Fire.
    Fire,
    /// Mountain and Earth.
    Earth,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metal => write!(f, "Metal"),
            Self::Wood => write!(f, "Wood"),
            Self::Water => write!(f, "Water"),
            Self::Fire => write!(f, "Fire"),
            Self::Earth => write!(f, "Earth"),
        }
    }
}

impl Trigram {
    /// All trigrams, ordered by the later-heaven family sequence.
    pub fn all() -> &'static [Self; 8] {
        &[
            Self::Heaven,
            Self::Lake,
            Self::Fire,
            Self::Thunder,
            Self::Wind,
            Self::Water,
            Self::Mountain,
            Self::Earth,
        ]
    }

    /// The 3-bit line pattern, bit 0 = bottom line, set = yang.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Heaven => 0b111,
            Self::Lake => 0b011,
            Self::Fire => 0b101,
            Self::Thunder => 0b001,
            Self::Wind => 0b110,
            Self::Water => 0b010,
            Self::Mountain => 0b100,
            Self::Earth => 0b000,
        }
    }

    /// The trigram with the given 3-bit pattern. Only the low three bits
    /// are considered, so this is total.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b111 => Self::Heaven,
            0b011 => Self::Lake,
            0b101 => Self::Fire,
            0b001 => Self::Thunder,
            0b110 => Self::Wind,
            0b010 => Self::Water,
            0b100 => Self::Mountain,
            _ => Self::Earth,
        }
    }

    /// Lines bottom to top, `true` = yang.
    pub fn lines(self) -> [bool; 3] {
        let bits = self.bits();
        [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0]
    }

    /// English image name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heaven => "Heaven",
            Self::Lake => "Lake",
            Self::Fire => "Fire",
            Self::Thunder => "Thunder",
            Self::Wind => "Wind",
            Self::Water => "Water",
            Self::Mountain => "Mountain",
            Self::Earth => "Earth",
        }
    }

    /// Romanised Chinese name.
    pub fn pinyin(self) -> &'static str {
        match self {
            Self::Heaven => "Qian",
            Self::Lake => "Dui",
            Self::Fire => "Li",
            Self::Thunder => "Zhen",
            Self::Wind => "Xun",
            Self::Water => "Kan",
            Self::Mountain => "Gen",
            Self::Earth => "Kun",
        }
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Heaven => '☰',
            Self::Lake => '☱',
            Self::Fire => '☲',
            Self::Thunder => '☳',
            Self::Wind => '☴',
            Self::Water => '☵',
            Self::Mountain => '☶',
            Self::Earth => '☷',
        }
    }

    /// Quality traditionally attributed to the trigram.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Heaven => "strong, creative",
            Self::Lake => "joyous, open",
            Self::Fire => "clinging, clarity",
            Self::Thunder => "arousing, movement",
            Self::Wind => "gentle, penetrating",
            Self::Water => "abysmal, danger",
            Self::Mountain => "keeping still, rest",
            Self::Earth => "receptive, devoted",
        }
    }

    /// Associated phase.
    pub fn element(self) -> Element {
        match self {
            Self::Heaven | Self::Lake => Element::Metal,
            Self::Thunder | Self::Wind => Element::Wood,
            Self::Water => Element::Water,
            Self::Fire => Element::Fire,
            Self::Mountain | Self::Earth => Element::Earth,
        }
    }

    /// Family member in the trigram family.
    pub fn family(self) -> &'static str {
        match self {
            Self::Heaven => "father",
            Self::Lake => "youngest daughter",
            Self::Fire => "middle daughter",
            Self::Thunder => "eldest son",
            Self::Wind => "eldest daughter",
            Self::Water => "middle son",
            Self::Mountain => "youngest son",
            Self::Earth => "mother",
        }
    }

    /// Compass direction in the later-heaven arrangement.
    pub fn direction(self) -> &'static str {
        match self {
            Self::Heaven => "northwest",
            Self::Lake => "west",
            Self::Fire => "south",
            Self::Thunder => "east",
            Self::Wind => "southeast",
            Self::Water => "north",
            Self::Mountain => "northeast",
            Self::Earth => "southwest",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.symbol(), self.name(), self.pinyin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bit_patterns_are_distinct_and_exhaustive() {
        let bits: HashSet<u8> = Trigram::all().iter().map(|t| t.bits()).collect();
        assert_eq!(bits.len(), 8);
        assert!(bits.iter().all(|b| *b < 8));
    }

    #[test]
    fn from_bits_round_trips() {
        for t in Trigram::all() {
            assert_eq!(Trigram::from_bits(t.bits()), *t);
        }
    }

    #[test]
    fn from_bits_ignores_high_bits() {
        assert_eq!(Trigram::from_bits(0b1000_0111), Trigram::Heaven);
    }

    #[test]
    fn lines_read_bottom_to_top() {
        assert_eq!(Trigram::Thunder.lines(), [true, false, false]);
        assert_eq!(Trigram::Mountain.lines(), [false, false, true]);
        assert_eq!(Trigram::Lake.lines(), [true, true, false]);
        assert_eq!(Trigram::Wind.lines(), [false, true, true]);
    }

    #[test]
    fn elements() {
        assert_eq!(Trigram::Heaven.element(), Element::Metal);
        assert_eq!(Trigram::Wind.element(), Element::Wood);
        assert_eq!(Trigram::Earth.element(), Element::Earth);
        assert_eq!(Element::Water.to_string(), "Water");
    }

    #[test]
    fn display() {
        assert_eq!(Trigram::Water.to_string(), "☵ Water (Kan)");
    }
}
