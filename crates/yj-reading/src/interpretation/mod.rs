//! The interpretation pipeline.
//!
//! [`Interpreter::interpret`] always yields a result: a validated answer
//! from the generator when one arrives, otherwise a static interpretation
//! built by [`fallback::synthesize`]. Every reason for falling back is kept
//! on the result and logged.

pub mod context;
pub mod fallback;
pub mod prompt;
pub mod schema;
pub mod validate;

pub use context::{HexagramView, ReadingContext};
pub use schema::{Interpretation, InterpretationV1, InterpretationV2, ToneV1, ToneV2};
pub use validate::Validation;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cancel::CancelToken;
use crate::generator::{CompletionRequest, TextGenerator};

/// Requested interpretation depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Short answer.
    Concise,
    /// Standard answer.
    #[default]
    Detailed,
    /// Long answer.
    Comprehensive,
}

impl DetailLevel {
    /// Parse from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "concise" | "short" => Some(Self::Concise),
            "detailed" | "standard" => Some(Self::Detailed),
            "comprehensive" | "long" => Some(Self::Comprehensive),
            _ => None,
        }
    }

    /// Output budget passed to the generator, in tokens.
    pub fn max_output_length(self) -> usize {
        match self {
            Self::Concise => 600,
            Self::Detailed => 1200,
            Self::Comprehensive => 2400,
        }
    }

    /// Accepted length of a free-text answer, in characters.
    pub fn text_bounds(self) -> (usize, usize) {
        match self {
            Self::Concise => (150, 2000),
            Self::Detailed => (300, 5000),
            Self::Comprehensive => (600, 10_000),
        }
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Concise => write!(f, "concise"),
            Self::Detailed => write!(f, "detailed"),
            Self::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

/// Response contract requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Plain text.
    Legacy,
    /// Structured, snake_case.
    V1,
    /// Structured, camelCase with reflection prompts.
    #[default]
    V2,
}

impl ResponseFormat {
    /// Parse from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "legacy" | "text" => Some(Self::Legacy),
            "v1" => Some(Self::V1),
            "v2" => Some(Self::V2),
            _ => None,
        }
    }

    /// Whether the generator is asked for JSON.
    pub fn is_structured(self) -> bool {
        !matches!(self, Self::Legacy)
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

/// Where an interpretation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationSource {
    /// The generative service.
    Ai,
    /// Synthesized from local data.
    Static,
}

impl std::fmt::Display for InterpretationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ai => write!(f, "ai"),
            Self::Static => write!(f, "static"),
        }
    }
}

/// An interpretation tagged with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationResult {
    /// Where the content came from.
    pub source: InterpretationSource,
    /// The interpretation itself.
    pub content: Interpretation,
    /// Why the generator's answer was not used, empty for AI results.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallback_reasons: Vec<String>,
}

impl InterpretationResult {
    /// A result accepted from the generator.
    pub fn ai(content: Interpretation) -> Self {
        Self {
            source: InterpretationSource::Ai,
            content,
            fallback_reasons: Vec::new(),
        }
    }

    /// A static result for `ctx`, recording why it was needed.
    pub fn fallback(ctx: &ReadingContext, reasons: Vec<String>) -> Self {
        Self {
            source: InterpretationSource::Static,
            content: fallback::synthesize(ctx),
            fallback_reasons: reasons,
        }
    }
}

/// Asks a [`TextGenerator`] for an interpretation and validates the answer.
#[derive(Debug, Clone)]
pub struct Interpreter<G> {
    generator: G,
    detail: DetailLevel,
    format: ResponseFormat,
}

impl<G: TextGenerator> Interpreter<G> {
    /// Create an interpreter.
    pub fn new(generator: G, detail: DetailLevel, format: ResponseFormat) -> Self {
        Self {
            generator,
            detail,
            format,
        }
    }

    /// The requested depth.
    pub fn detail(&self) -> DetailLevel {
        self.detail
    }

    /// The requested response contract.
    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Interpret a reading. Never fails.
    pub async fn interpret(&self, ctx: &ReadingContext, cancel: &CancelToken) -> InterpretationResult {
        let request = CompletionRequest {
            prompt: prompt::build_prompt(ctx, self.detail, self.format),
            max_output_length: self.detail.max_output_length(),
            json: self.format.is_structured(),
        };

        let raw = match self.generator.complete(request, cancel).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    hexagram = ctx.primary.hexagram.number,
                    error = %err,
                    "interpretation service failed, using static interpretation"
                );
                return InterpretationResult::fallback(ctx, vec![format!("service failure: {err}")]);
            }
        };

        match validate::validate_response(
            &raw,
            self.format,
            self.detail,
            ctx.has_changing_lines(),
        ) {
            Validation::Ok(content) => {
                info!(
                    hexagram = ctx.primary.hexagram.number,
                    format = %self.format,
                    "interpretation accepted"
                );
                InterpretationResult::ai(content)
            }
            Validation::Invalid(reasons) => {
                warn!(
                    hexagram = ctx.primary.hexagram.number,
                    reasons = ?reasons,
                    "interpretation rejected, using static interpretation"
                );
                InterpretationResult::fallback(ctx, reasons)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GenerationError, OfflineGenerator};
    use async_trait::async_trait;
    use serde_json::json;
    use yj_core::{CastingMethod, cast_all_lines, read};

    struct Canned(String);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn complete(
            &self,
            _request: CompletionRequest,
            _cancel: &CancelToken,
        ) -> Result<String, GenerationError> {
            Ok(self.0.clone())
        }
    }

    fn ctx() -> ReadingContext {
        let lines = cast_all_lines(CastingMethod::ThreeCoin, &[0; 18]).unwrap();
        ReadingContext::new("Is this the right path?", CastingMethod::ThreeCoin, &read(&lines))
    }

    fn valid_v2() -> serde_json::Value {
        let Interpretation::V2(v2) = fallback::synthesize(&ctx()) else {
            panic!("expected V2");
        };
        serde_json::to_value(v2).unwrap()
    }

    #[test]
    fn detail_levels() {
        assert_eq!(DetailLevel::Concise.max_output_length(), 600);
        assert_eq!(DetailLevel::Comprehensive.text_bounds(), (600, 10_000));
        assert_eq!(DetailLevel::parse("DETAILED"), Some(DetailLevel::Detailed));
        assert_eq!(DetailLevel::parse("verbose"), None);
        assert_eq!(DetailLevel::default(), DetailLevel::Detailed);
    }

    #[test]
    fn response_formats() {
        assert_eq!(ResponseFormat::parse("V1"), Some(ResponseFormat::V1));
        assert_eq!(ResponseFormat::parse("text"), Some(ResponseFormat::Legacy));
        assert!(!ResponseFormat::Legacy.is_structured());
        assert!(ResponseFormat::V2.is_structured());
    }

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&InterpretationSource::Ai).unwrap(), "\"ai\"");
        assert_eq!(serde_json::to_string(&InterpretationSource::Static).unwrap(), "\"static\"");
    }

    #[tokio::test]
    async fn valid_answer_is_ai_sourced() {
        let interpreter = Interpreter::new(Canned(valid_v2().to_string()), DetailLevel::Detailed, ResponseFormat::V2);
        let result = interpreter.interpret(&ctx(), &CancelToken::new()).await;
        assert_eq!(result.source, InterpretationSource::Ai);
        assert!(result.fallback_reasons.is_empty());
    }

    #[tokio::test]
    async fn answer_quoting_the_question_stays_ai_sourced() {
        let mut doc = valid_v2();
        let overview = doc["overview"].as_str().unwrap().to_string();
        doc["overview"] = json!(format!("\"I am unable to sleep at night.\" {overview}"));
        let interpreter = Interpreter::new(Canned(doc.to_string()), DetailLevel::Detailed, ResponseFormat::V2);
        let result = interpreter.interpret(&ctx(), &CancelToken::new()).await;
        assert_eq!(result.source, InterpretationSource::Ai, "{:?}", result.fallback_reasons);
    }

    #[tokio::test]
    async fn missing_key_insight_falls_back_to_static() {
        let mut doc = valid_v2();
        doc.as_object_mut().unwrap().remove("keyInsight");
        let interpreter = Interpreter::new(Canned(doc.to_string()), DetailLevel::Detailed, ResponseFormat::V2);
        let result = interpreter.interpret(&ctx(), &CancelToken::new()).await;
        assert_eq!(result.source, InterpretationSource::Static);
        assert!(result.fallback_reasons.iter().any(|r| r.contains("keyInsight")));
        assert!(matches!(result.content, Interpretation::V2(_)));
    }

    #[tokio::test]
    async fn moving_cast_without_transformation_falls_back() {
        let mut doc = valid_v2();
        doc["transformation"] = json!(null);
        let interpreter = Interpreter::new(Canned(doc.to_string()), DetailLevel::Detailed, ResponseFormat::V2);
        let result = interpreter.interpret(&ctx(), &CancelToken::new()).await;
        assert_eq!(result.source, InterpretationSource::Static);
        assert!(result.fallback_reasons.iter().any(|r| r.contains("transformation")));
    }

    #[tokio::test]
    async fn unknown_tone_falls_back_to_static() {
        let mut doc = valid_v2();
        doc["tone"] = json!("Ominous");
        let interpreter = Interpreter::new(Canned(doc.to_string()), DetailLevel::Detailed, ResponseFormat::V2);
        let result = interpreter.interpret(&ctx(), &CancelToken::new()).await;
        assert_eq!(result.source, InterpretationSource::Static);
    }

    #[tokio::test]
    async fn service_failure_falls_back_to_static() {
        let interpreter = Interpreter::new(OfflineGenerator, DetailLevel::Concise, ResponseFormat::Legacy);
        let result = interpreter.interpret(&ctx(), &CancelToken::new()).await;
        assert_eq!(result.source, InterpretationSource::Static);
        assert_eq!(result.fallback_reasons.len(), 1);
        assert!(result.fallback_reasons[0].starts_with("service failure"));
    }

    #[tokio::test]
    async fn legacy_text_is_accepted_within_bounds() {
        let text = "The Creative is moving toward the Receptive. ".repeat(10);
        let interpreter = Interpreter::new(Canned(text), DetailLevel::Detailed, ResponseFormat::Legacy);
        let result = interpreter.interpret(&ctx(), &CancelToken::new()).await;
        assert_eq!(result.source, InterpretationSource::Ai);
        assert!(matches!(result.content, Interpretation::Legacy(_)));
    }

    #[test]
    fn static_result_round_trips_through_json() {
        let result = InterpretationResult::fallback(&ctx(), vec!["offline".into()]);
        let json = serde_json::to_string(&result).unwrap();
        let back: InterpretationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
