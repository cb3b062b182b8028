//! Gemini API client implementing [`GenerationPort`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, GenerateContentRequest, GenerateContentResponse, InsightsPayload};
use crate::domain::entities::{NoteContent, NoteInsights};
use crate::domain::errors::GenerationError;
use crate::domain::ports::GenerationPort;
use crate::infrastructure::config::AiConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_TAGS: usize = 5;

/// Gemini `generateContent` client.
///
/// Built explicitly from configuration and handed to the use cases that
/// need it; there is no shared global instance.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Creates client from configuration and an API key.
    ///
    /// # Errors
    /// Returns error if the key is blank or the HTTP client cannot be built.
    pub fn new(config: &AiConfig, api_key: impl Into<String>) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::not_configured("API key is empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                GenerationError::not_configured(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Creates client reading the API key from the variable named in `config`.
    ///
    /// # Errors
    /// Returns error if the variable is unset or the client cannot be built.
    pub fn from_env(config: &AiConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            GenerationError::not_configured(format!("{} is not set", config.api_key_env))
        })?;
        Self::new(config, api_key)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn handle_error_response(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> GenerationError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) if !body.error.message.is_empty() => body.error.message,
            _ => format!("HTTP {status}"),
        };
        warn!(status = status.as_u16(), %message, "AI request rejected");
        GenerationError::api(status.as_u16(), message)
    }
}

/// Builds the summarization prompt for a note.
#[must_use]
pub fn build_prompt(note: &NoteContent) -> String {
    format!(
        "Summarize the following note in at most three sentences and suggest up to \
         {MAX_TAGS} short topical tags.\n\
         Reply with a JSON object of the form {{\"summary\": string, \"tags\": [string]}} \
         and nothing else.\n\n\
         Title: {}\n\n{}",
        note.title.trim(),
        note.content.trim()
    )
}

/// Parses the model's reply, tolerating a Markdown code fence around the JSON.
///
/// # Errors
/// Returns error if the reply is not the expected JSON object.
pub fn parse_insights(text: &str) -> Result<NoteInsights, GenerationError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    let payload: InsightsPayload = serde_json::from_str(body)
        .map_err(|e| GenerationError::invalid_response(format!("reply is not valid JSON: {e}")))?;

    if payload.summary.trim().is_empty() {
        return Err(GenerationError::invalid_response("summary is empty"));
    }

    let mut tags = payload.tags;
    tags.truncate(MAX_TAGS);
    Ok(NoteInsights::new(payload.summary, tags))
}

#[async_trait]
impl GenerationPort for GeminiClient {
    async fn summarize(&self, note: &NoteContent) -> Result<NoteInsights, GenerationError> {
        debug!(model = %self.model, "Sending summarization request");

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::json_prompt(build_prompt(note)))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach AI service");
                if e.is_timeout() {
                    GenerationError::network("request timed out")
                } else if e.is_connect() {
                    GenerationError::network("failed to connect to AI service")
                } else {
                    GenerationError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_error_response(status, response).await);
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::invalid_response(format!("failed to parse response: {e}"))
        })?;

        let text = body
            .first_text()
            .ok_or_else(|| GenerationError::invalid_response("response has no text"))?;

        parse_insights(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> AiConfig {
        AiConfig {
            base_url: base_url.to_string(),
            model: "gemini-test".to_string(),
            ..AiConfig::default()
        }
    }

    fn note() -> NoteContent {
        NoteContent::new("Trip", "Book train tickets to Kyoto and reserve a ryokan.")
    }

    #[test]
    fn test_blank_key_rejected() {
        let result = GeminiClient::new(&AiConfig::default(), "  ");
        assert!(matches!(result, Err(GenerationError::NotConfigured { .. })));
    }

    #[test]
    fn test_parse_insights_with_code_fence() {
        let reply = "```json\n{\"summary\": \"Travel plan\", \"tags\": [\"travel\"]}\n```";
        let insights = parse_insights(reply).unwrap();
        assert_eq!(insights.summary, "Travel plan");
        assert_eq!(insights.tags, vec!["travel"]);
    }

    #[test]
    fn test_parse_insights_limits_tags() {
        let reply = r#"{"summary":"s","tags":["a","b","c","d","e","f","g"]}"#;
        assert_eq!(parse_insights(reply).unwrap().tags.len(), MAX_TAGS);
    }

    #[test]
    fn test_parse_insights_rejects_prose() {
        let result = parse_insights("Here is your summary!");
        assert!(matches!(result, Err(GenerationError::InvalidResponse { .. })));
    }

    #[test]
    fn test_prompt_contains_note() {
        let prompt = build_prompt(&note());
        assert!(prompt.contains("Title: Trip"));
        assert!(prompt.contains("ryokan"));
    }

    #[tokio::test]
    async fn test_summarize_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:generateContent"))
            .and(header(API_KEY_HEADER, "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "{\"summary\": \"Kyoto trip prep\", \"tags\": [\"travel\", \"japan\"]}"}]
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config(&server.uri()), "test-key").unwrap();
        let insights = client.summarize(&note()).await.unwrap();

        assert_eq!(insights.summary, "Kyoto trip prep");
        assert_eq!(insights.tags, vec!["travel", "japan"]);
    }

    #[tokio::test]
    async fn test_summarize_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config(&server.uri()), "test-key").unwrap();
        let error = client.summarize(&note()).await.unwrap_err();

        match error {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Resource has been exhausted");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_summarize_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config(&server.uri()), "test-key").unwrap();
        let error = client.summarize(&note()).await.unwrap_err();

        assert!(matches!(error, GenerationError::InvalidResponse { .. }));
    }
}
