//! I Ching reading sessions.
//!
//! Sequences a divination from question to finished reading: batch entropy
//! from a [`RandomSource`], six cast lines, the primary and relating
//! hexagram, an interpretation from a [`TextGenerator`] (validated, with a
//! deterministic static fallback) and optional persistence through a
//! [`ReadingStore`].

pub mod cancel;
pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod interpretation;
pub mod persistence;
pub mod runner;
pub mod session;

pub use cancel::CancelToken;
pub use config::{GeneratorConfig, ReadingConfig};
pub use entropy::{
    EntropyError, FailingSource, FallbackSource, RandomSource, ScriptedSource, SeededSource,
    SystemSource,
};
pub use error::{ReadingError, ReadingResult};
pub use generator::{
    CompletionRequest, GenerationError, OfflineGenerator, OpenAiCompatibleGenerator, TextGenerator,
};
pub use interpretation::{
    DetailLevel, Interpretation, InterpretationResult, InterpretationSource, Interpreter,
    ReadingContext, ResponseFormat,
};
pub use persistence::{JsonFileStore, MemoryStore, ReadingStore, SavedReading, StoreError, UserId};
pub use runner::{ReadingRunner, SaveOutcome};
pub use session::{ReadingSession, SessionSlot, SessionStep};
