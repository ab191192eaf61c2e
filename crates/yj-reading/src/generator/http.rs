//! Client for OpenAI-compatible chat completion endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use super::{CompletionRequest, GenerationError, TextGenerator};
use crate::cancel::CancelToken;
use crate::config::GeneratorConfig;

const SYSTEM_PROMPT: &str = "You interpret I Ching readings faithfully to the classical texts.";

/// Posts completion requests to `{base_url}/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleGenerator {
    client: Client,
    config: GeneratorConfig,
}

impl OpenAiCompatibleGenerator {
    /// Create a client with the configured timeout.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Unavailable(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// The configured connection settings.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        let mut body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": request.prompt },
            ],
            "max_tokens": request.max_output_length,
            "temperature": self.config.temperature,
        });
        if request.json {
            body["response_format"] = json!({ "type": "json_object" });
        }
        body
    }

    async fn send(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        let mut builder = self.client.post(self.endpoint()).json(&self.request_body(request));
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport_error)?;
        let json: Value = response.json().await.map_err(decode_error)?;
        parse_response(&json)
    }
}

fn transport_error(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Http(err.to_string())
    }
}

fn decode_error(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::InvalidResponse(err.to_string())
    }
}

/// Extract the first choice's message content.
fn parse_response(json: &Value) -> Result<String, GenerationError> {
    if let Some(message) = json.pointer("/error/message").and_then(Value::as_str) {
        return Err(GenerationError::InvalidResponse(message.to_string()));
    }
    json.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| GenerationError::InvalidResponse("no message content in response".into()))
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleGenerator {
    async fn complete(
        &self,
        request: CompletionRequest,
        cancel: &CancelToken,
    ) -> Result<String, GenerationError> {
        tracing::debug!(model = %self.config.model, json = request.json, "requesting completion");
        // dropping the send future aborts the request
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(GenerationError::Cancelled),
            result = self.send(&request) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generator() -> OpenAiCompatibleGenerator {
        OpenAiCompatibleGenerator::new(
            GeneratorConfig::new("http://localhost:9/v1/", "test-model").with_api_key("k"),
        )
        .unwrap()
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        assert_eq!(generator().endpoint(), "http://localhost:9/v1/chat/completions");
    }

    #[test]
    fn body_requests_json_object_when_structured() {
        let request = CompletionRequest {
            prompt: "interpret".into(),
            max_output_length: 1200,
            json: true,
        };
        let body = generator().request_body(&request);
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["max_tokens"], 1200);
        assert_eq!(body["messages"][1]["content"], "interpret");
        assert_eq!(body["response_format"]["type"], "json_object");
    }

    #[test]
    fn body_omits_response_format_for_text() {
        let request = CompletionRequest {
            prompt: "interpret".into(),
            max_output_length: 600,
            json: false,
        };
        assert!(generator().request_body(&request).get("response_format").is_none());
    }

    #[test]
    fn parses_first_choice() {
        let json = json!({ "choices": [ { "message": { "role": "assistant", "content": "hello" } } ] });
        assert_eq!(parse_response(&json).unwrap(), "hello");
    }

    #[test]
    fn reports_error_payloads() {
        let json = json!({ "error": { "message": "quota exceeded" } });
        assert_eq!(
            parse_response(&json),
            Err(GenerationError::InvalidResponse("quota exceeded".into()))
        );
        assert!(parse_response(&json!({ "choices": [] })).is_err());
    }

    // --- Against a local server ---

    fn text_request() -> CompletionRequest {
        CompletionRequest {
            prompt: "interpret".into(),
            max_output_length: 600,
            json: false,
        }
    }

    fn served(server: &MockServer, timeout: Duration) -> OpenAiCompatibleGenerator {
        let config = GeneratorConfig::new(format!("{}/v1", server.uri()), "test-model")
            .with_api_key("k")
            .with_timeout(timeout);
        OpenAiCompatibleGenerator::new(config).unwrap()
    }

    #[tokio::test]
    async fn posts_with_bearer_auth_and_reads_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [ { "message": { "role": "assistant", "content": "the reading" } } ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = served(&server, Duration::from_secs(5))
            .complete(text_request(), &CancelToken::new())
            .await;
        assert_eq!(result, Ok("the reading".to_string()));
    }

    #[tokio::test]
    async fn error_status_is_http_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = served(&server, Duration::from_secs(5))
            .complete(text_request(), &CancelToken::new())
            .await;
        match result {
            Err(GenerationError::Http(msg)) => assert!(msg.contains("503"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "choices": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let result = served(&server, Duration::from_millis(100))
            .complete(text_request(), &CancelToken::new())
            .await;
        assert_eq!(result, Err(GenerationError::Timeout));
    }

    #[tokio::test]
    async fn non_json_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let result = served(&server, Duration::from_secs(5))
            .complete(text_request(), &CancelToken::new())
            .await;
        assert!(matches!(result, Err(GenerationError::InvalidResponse(_))), "{result:?}");
    }

    #[tokio::test]
    async fn error_payload_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "error": { "message": "quota exceeded" } })),
            )
            .mount(&server)
            .await;

        let result = served(&server, Duration::from_secs(5))
            .complete(text_request(), &CancelToken::new())
            .await;
        assert_eq!(result, Err(GenerationError::InvalidResponse("quota exceeded".into())));
    }

    #[tokio::test]
    async fn cancelled_token_aborts_request() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let request = CompletionRequest {
            prompt: "p".into(),
            max_output_length: 600,
            json: false,
        };
        let result = generator().complete(request, &cancel).await;
        assert_eq!(result, Err(GenerationError::Cancelled));
    }
}
