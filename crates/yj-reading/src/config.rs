//! Configuration for readings and the generation client.

use std::time::Duration;

use yj_core::CastingMethod;

use crate::interpretation::{DetailLevel, ResponseFormat};

/// Shortest accepted question, in characters after trimming.
pub const MIN_QUESTION_LEN: usize = 3;

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// Casting method for new sessions.
    pub method: CastingMethod,
    /// Requested interpretation depth.
    pub detail: DetailLevel,
    /// Response contract requested from the generator.
    pub format: ResponseFormat,
    /// RNG seed for reproducible casts; `None` uses the system source.
    pub seed: Option<u64>,
    /// Minimum trimmed question length; values below [`MIN_QUESTION_LEN`]
    /// are raised to it.
    pub min_question_len: usize,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            method: CastingMethod::ThreeCoin,
            detail: DetailLevel::Detailed,
            format: ResponseFormat::V2,
            seed: None,
            min_question_len: MIN_QUESTION_LEN,
        }
    }
}

impl ReadingConfig {
    /// Set the casting method.
    pub fn with_method(mut self, method: CastingMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the detail level.
    pub fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }

    /// Set the response format.
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Connection settings for an OpenAI-compatible completion endpoint.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Bearer token, if the endpoint needs one.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Sampling temperature.
    pub temperature: f32,
}

impl GeneratorConfig {
    /// Settings for `base_url` and `model` with default timeout.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            timeout: Duration::from_secs(60),
            temperature: 0.7,
        }
    }

    /// Set the bearer token.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ReadingConfig::default();
        assert_eq!(cfg.method, CastingMethod::ThreeCoin);
        assert_eq!(cfg.detail, DetailLevel::Detailed);
        assert_eq!(cfg.format, ResponseFormat::V2);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.min_question_len, 3);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReadingConfig::default()
            .with_method(CastingMethod::YarrowStalk)
            .with_detail(DetailLevel::Concise)
            .with_format(ResponseFormat::Legacy)
            .with_seed(7);
        assert_eq!(cfg.method, CastingMethod::YarrowStalk);
        assert_eq!(cfg.detail, DetailLevel::Concise);
        assert_eq!(cfg.format, ResponseFormat::Legacy);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn generator_config() {
        let cfg = GeneratorConfig::new("http://localhost:11434/v1", "llama3")
            .with_api_key("secret")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(cfg.model, "llama3");
        assert_eq!(cfg.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }
}
