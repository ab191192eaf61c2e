//! Cast hexagrams and the derivation of the relating hexagram.
//!
//! A cast produces six lines. The primary hexagram is their shape; if any
//! lines are changing, flipping exactly those lines yields the relating
//! hexagram, which describes where the situation is heading.

use serde::Serialize;

use crate::error::CoreResult;
use crate::hexagram::{Hexagram, LinePattern, resolve};
use crate::line::{Line, LineKind};

/// A hexagram together with the concrete lines that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastHexagram {
    /// The resolved hexagram.
    pub hexagram: &'static Hexagram,
    /// The six lines, bottom to top.
    pub lines: [Line; 6],
    /// Positions (1..=6) of the changing lines, ascending.
    pub changing_lines: Vec<u8>,
}

impl CastHexagram {
    /// The six-line shape.
    pub fn pattern(&self) -> LinePattern {
        pattern_of(&self.lines)
    }

    /// Whether any line is changing.
    pub fn has_changing_lines(&self) -> bool {
        !self.changing_lines.is_empty()
    }
}

/// Primary and relating hexagram of one cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// The hexagram as cast.
    pub primary: CastHexagram,
    /// The hexagram after all changing lines have turned, if any changed.
    pub relating: Option<CastHexagram>,
}

fn pattern_of(lines: &[Line; 6]) -> LinePattern {
    LinePattern::from_bools(std::array::from_fn(|i| lines[i].is_yang()))
}

/// Resolve six cast lines to their hexagram.
pub fn cast_hexagram(lines: &[Line; 6]) -> CastHexagram {
    let changing_lines = lines
        .iter()
        .filter(|l| l.is_changing())
        .map(|l| l.position())
        .collect();
    CastHexagram {
        hexagram: resolve(pattern_of(lines)),
        lines: *lines,
        changing_lines,
    }
}

/// Derive the relating hexagram, or `None` when no line is changing.
///
/// The relating pattern is the primary pattern with exactly the changing
/// positions inverted. Its lines are all stable.
pub fn derive_relating(lines: &[Line; 6]) -> Option<CastHexagram> {
    let changing: Vec<u8> = lines
        .iter()
        .filter(|l| l.is_changing())
        .map(|l| l.position())
        .collect();
    if changing.is_empty() {
        return None;
    }

    let pattern = pattern_of(lines).flip(&changing);
    let relating_lines = stable_lines(pattern).ok()?;
    Some(CastHexagram {
        hexagram: resolve(pattern),
        lines: relating_lines,
        changing_lines: Vec::new(),
    })
}

/// Fresh, non-changing lines for a pattern.
fn stable_lines(pattern: LinePattern) -> CoreResult<[Line; 6]> {
    let bools = pattern.to_bools();
    let mut lines = [Line::new(1, LineKind::Yin)?; 6];
    for (i, yang) in bools.iter().enumerate() {
        let kind = if *yang { LineKind::Yang } else { LineKind::Yin };
        lines[i] = Line::new(i as u8 + 1, kind)?;
    }
    Ok(lines)
}

/// Resolve the primary and relating hexagram of a cast.
pub fn read(lines: &[Line; 6]) -> Reading {
    Reading {
        primary: cast_hexagram(lines),
        relating: derive_relating(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casting::{CastingMethod, cast_all_lines};
    use proptest::prelude::*;

    fn lines_of(kinds: [LineKind; 6]) -> [Line; 6] {
        std::array::from_fn(|i| Line::new(i as u8 + 1, kinds[i]).unwrap())
    }

    fn kind_strategy() -> impl Strategy<Value = LineKind> {
        prop_oneof![
            Just(LineKind::Yin),
            Just(LineKind::Yang),
            Just(LineKind::ChangingYin),
            Just(LineKind::ChangingYang),
        ]
    }

    #[test]
    fn all_heads_gives_creative_turning_receptive() {
        // even draws are heads: every line is three heads
        let lines = cast_all_lines(CastingMethod::ThreeCoin, &[0; 18]).unwrap();
        let reading = read(&lines);

        assert_eq!(reading.primary.pattern().to_bools(), [true; 6]);
        assert_eq!(reading.primary.hexagram.number, 1);
        assert_eq!(reading.primary.hexagram.name, "The Creative");
        assert_eq!(reading.primary.changing_lines, vec![1, 2, 3, 4, 5, 6]);

        let relating = reading.relating.unwrap();
        assert_eq!(relating.hexagram.number, 2);
        assert_eq!(relating.hexagram.name, "The Receptive");
        assert!(relating.lines.iter().all(|l| !l.is_changing()));
    }

    #[test]
    fn no_changing_lines_means_no_relating() {
        let lines = lines_of([LineKind::Yang, LineKind::Yin, LineKind::Yang, LineKind::Yin, LineKind::Yang, LineKind::Yin]);
        assert!(derive_relating(&lines).is_none());
        let primary = cast_hexagram(&lines);
        assert!(!primary.has_changing_lines());
        assert_eq!(primary.hexagram.number, 63);
    }

    #[test]
    fn single_changing_line() {
        // Peace (#11) with the top line changing becomes Great Accumulating (#26)
        let lines = lines_of([
            LineKind::Yang,
            LineKind::Yang,
            LineKind::Yang,
            LineKind::Yin,
            LineKind::Yin,
            LineKind::ChangingYin,
        ]);
        let reading = read(&lines);
        assert_eq!(reading.primary.hexagram.number, 11);
        assert_eq!(reading.primary.changing_lines, vec![6]);
        assert_eq!(reading.relating.unwrap().hexagram.number, 26);
    }

    #[test]
    fn relating_line_positions_are_ordered() {
        let lines = lines_of([LineKind::ChangingYin; 6]);
        let relating = derive_relating(&lines).unwrap();
        for (i, line) in relating.lines.iter().enumerate() {
            assert_eq!(line.position() as usize, i + 1);
            assert_eq!(line.kind(), LineKind::Yang);
        }
    }

    proptest! {
        #[test]
        fn relating_flips_exactly_the_changing_positions(
            kinds in proptest::array::uniform6(kind_strategy())
        ) {
            let lines = lines_of(kinds);
            let primary = cast_hexagram(&lines);
            let changing: Vec<u8> = lines.iter().filter(|l| l.is_changing()).map(|l| l.position()).collect();
            prop_assert_eq!(&primary.changing_lines, &changing);

            match derive_relating(&lines) {
                None => prop_assert!(changing.is_empty()),
                Some(relating) => {
                    prop_assert!(!changing.is_empty());
                    let before = primary.pattern().to_bools();
                    let after = relating.pattern().to_bools();
                    for pos in 1..=6u8 {
                        let i = usize::from(pos - 1);
                        if changing.contains(&pos) {
                            prop_assert_ne!(before[i], after[i]);
                        } else {
                            prop_assert_eq!(before[i], after[i]);
                        }
                    }
                    prop_assert!(relating.lines.iter().all(|l| !l.is_changing()));
                    prop_assert!(relating.changing_lines.is_empty());
                    prop_assert_eq!(relating.hexagram.pattern(), relating.pattern());
                }
            }
        }

        #[test]
        fn relating_matches_transformed_lines(
            kinds in proptest::array::uniform6(kind_strategy())
        ) {
            let lines = lines_of(kinds);
            if let Some(relating) = derive_relating(&lines) {
                for (orig, turned) in lines.iter().zip(relating.lines.iter()) {
                    prop_assert_eq!(orig.kind().transformed().settled(), turned.kind());
                }
            }
        }
    }
}
