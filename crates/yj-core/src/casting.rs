//! Line casting.
//!
//! Turns raw random integers into lines under one of the two traditional
//! methods. The integers carry no guaranteed range: coins read parity,
//! yarrow stalks reduce modulo 16.
//!
//! The two methods produce different distributions and must not be
//! confused:
//!
//! | value | line          | three coins | yarrow stalks |
//! |-------|---------------|-------------|---------------|
//! | 6     | changing yin  | 1/8         | 1/16          |
//! | 7     | yang          | 3/8         | 5/16          |
//! | 8     | yin           | 3/8         | 7/16          |
//! | 9     | changing yang | 1/8         | 3/16          |

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::line::{Line, LineKind};

/// Number of lines in a hexagram.
pub const LINES_PER_HEXAGRAM: usize = 6;

/// How lines are cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CastingMethod {
    /// Three coins per line, heads counted.
    #[default]
    ThreeCoin,
    /// Simulated yarrow stalk division, one draw per line.
    YarrowStalk,
}

impl CastingMethod {
    /// Parse a method from a user-supplied string.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "coin" | "coins" | "three coin" | "three coins" | "threecoin" => Ok(Self::ThreeCoin),
            "yarrow" | "yarrow stalk" | "yarrow stalks" | "stalks" => Ok(Self::YarrowStalk),
            _ => Err(CoreError::UnknownMethod(s.to_string())),
        }
    }

    /// Random integers consumed per line.
    pub fn entropy_per_line(self) -> usize {
        match self {
            Self::ThreeCoin => 3,
            Self::YarrowStalk => 1,
        }
    }

    /// Random integers consumed by a full six-line reading.
    pub fn entropy_for_reading(self) -> usize {
        self.entropy_per_line() * LINES_PER_HEXAGRAM
    }

    /// Theoretical probabilities of each line value.
    pub fn distribution(self) -> LineDistribution {
        match self {
            Self::ThreeCoin => LineDistribution {
                changing_yin: 1.0 / 8.0,
                yang: 3.0 / 8.0,
                yin: 3.0 / 8.0,
                changing_yang: 1.0 / 8.0,
            },
            Self::YarrowStalk => LineDistribution {
                changing_yin: 1.0 / 16.0,
                yang: 5.0 / 16.0,
                yin: 7.0 / 16.0,
                changing_yang: 3.0 / 16.0,
            },
        }
    }
}

impl std::fmt::Display for CastingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThreeCoin => write!(f, "three coins"),
            Self::YarrowStalk => write!(f, "yarrow stalks"),
        }
    }
}

/// Probability of each line kind under a casting method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDistribution {
    /// P(6).
    pub changing_yin: f64,
    /// P(7).
    pub yang: f64,
    /// P(8).
    pub yin: f64,
    /// P(9).
    pub changing_yang: f64,
}

impl LineDistribution {
    /// Probability of a given line kind.
    pub fn probability(&self, kind: LineKind) -> f64 {
        match kind {
            LineKind::ChangingYin => self.changing_yin,
            LineKind::Yang => self.yang,
            LineKind::Yin => self.yin,
            LineKind::ChangingYang => self.changing_yang,
        }
    }
}

/// Cast a line from three coin draws. Even = heads.
pub fn line_from_coins(position: u8, coins: [u64; 3]) -> CoreResult<Line> {
    let heads = coins.iter().filter(|c| *c % 2 == 0).count();
    let kind = match heads {
        3 => LineKind::ChangingYang,
        2 => LineKind::Yang,
        1 => LineKind::Yin,
        _ => LineKind::ChangingYin,
    };
    Line::new(position, kind)
}

/// Cast a line from a single yarrow draw, reduced modulo 16.
pub fn line_from_yarrow(position: u8, draw: u64) -> CoreResult<Line> {
    let kind = match draw % 16 {
        0 => LineKind::ChangingYin,
        1..=7 => LineKind::Yin,
        8..=12 => LineKind::Yang,
        _ => LineKind::ChangingYang,
    };
    Line::new(position, kind)
}

/// Cast one line, consuming exactly `method.entropy_per_line()` values
/// from the front of `entropy`.
pub fn cast_line(method: CastingMethod, position: u8, entropy: &[u64]) -> CoreResult<Line> {
    let needed = method.entropy_per_line();
    if entropy.len() < needed {
        return Err(CoreError::InsufficientEntropy {
            needed,
            got: entropy.len(),
        });
    }
    match method {
        CastingMethod::ThreeCoin => {
            line_from_coins(position, [entropy[0], entropy[1], entropy[2]])
        }
        CastingMethod::YarrowStalk => line_from_yarrow(position, entropy[0]),
    }
}

/// Cast all six lines bottom to top from one prefetched batch.
pub fn cast_all_lines(method: CastingMethod, entropy: &[u64]) -> CoreResult<[Line; 6]> {
    let needed = method.entropy_for_reading();
    if entropy.len() < needed {
        return Err(CoreError::InsufficientEntropy {
            needed,
            got: entropy.len(),
        });
    }
    let per_line = method.entropy_per_line();
    let mut lines = Vec::with_capacity(LINES_PER_HEXAGRAM);
    for (i, chunk) in entropy[..needed].chunks(per_line).enumerate() {
        lines.push(cast_line(method, i as u8 + 1, chunk)?);
    }
    lines.try_into().map_err(|v: Vec<Line>| CoreError::InsufficientEntropy {
        needed,
        got: v.len() * per_line,
    })
}
