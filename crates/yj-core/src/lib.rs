//! Core of the I Ching divination engine.
//!
//! Provides the eight trigrams, the 64 hexagrams in King Wen order, the two
//! traditional casting methods (three coins and yarrow stalks), pattern
//! resolution and the derivation of the relating hexagram from changing
//! lines. Everything here is pure and synchronous; entropy is supplied by
//! the caller as raw integers.

pub mod casting;
pub mod error;
pub mod hexagram;
pub mod line;
pub mod transform;
pub mod trigram;

pub use casting::{CastingMethod, LINES_PER_HEXAGRAM, LineDistribution, cast_all_lines, cast_line};
pub use error::{CoreError, CoreResult};
pub use hexagram::{Hexagram, LinePattern, by_number, resolve, try_resolve};
pub use line::{Line, LineKind};
pub use transform::{CastHexagram, Reading, cast_hexagram, derive_relating, read};
pub use trigram::{Element, Trigram};
