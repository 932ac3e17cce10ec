//! Gemini `generateContent` client

use crate::description::TextGenerator;
use crate::description::error::DescriptionError;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Configuration for the Gemini text generator
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Checked at call time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Single-shot Gemini client. No retries, no streaming.
pub struct GeminiGenerator {
    config: GeminiConfig,
    client: Client,
}

impl GeminiGenerator {
    /// Build the HTTP client. A missing API key is not an error here.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!(DescriptionError::Config("missing API key".to_string())))
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key()?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("API error ({}): {}", status, error_text));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        response.text()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    /// A candidate without any text (e.g. a blocked reply) is an error.
    fn text(self) -> Result<String> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No candidates in Gemini API response"))?;

        let text: String = candidate
            .content
            .into_iter()
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(anyhow!("No text in Gemini API response"));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Upstream {
        seen: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
    }

    async fn generate_content(
        State(upstream): State<Upstream>,
        Path(model_action): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let key = headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        upstream
            .seen
            .lock()
            .unwrap()
            .push((model_action, key.clone(), body));

        if key.as_deref() == Some("bad-key") {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": { "message": "API key not valid" } })),
            );
        }

        (
            StatusCode::OK,
            Json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "  Hello" }, { "text": " world  " }] }
                }]
            })),
        )
    }

    async fn spawn_upstream() -> (String, Upstream) {
        let upstream = Upstream::default();
        let app = Router::new()
            .route("/v1beta/models/{model_action}", post(generate_content))
            .with_state(upstream.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/v1beta", addr), upstream)
    }

    fn config(base_url: &str, api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.map(str::to_string),
            base_url: base_url.to_string(),
            ..GeminiConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(config.api_key.is_none());
    }

    #[tokio::test]
    async fn test_missing_key_fails_at_call_not_construction() {
        let generator = GeminiGenerator::new(GeminiConfig::default()).unwrap();

        let err = generator.generate("prompt").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DescriptionError>(),
            Some(DescriptionError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_concatenates_parts() {
        let (base_url, upstream) = spawn_upstream().await;
        let generator = GeminiGenerator::new(config(&base_url, Some("test-key"))).unwrap();

        let text = generator.generate("Describe a bolt").await.unwrap();
        assert_eq!(text, "  Hello world  ");

        let seen = upstream.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (model_action, key, body) = &seen[0];
        assert_eq!(model_action, "gemini-2.5-flash:generateContent");
        assert_eq!(key.as_deref(), Some("test-key"));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Describe a bolt");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let (base_url, upstream) = spawn_upstream().await;
        let generator = GeminiGenerator::new(config(&base_url, Some("bad-key"))).unwrap();

        let err = generator.generate("Describe a bolt").await.unwrap_err();
        assert!(err.to_string().contains("403"));
        assert_eq!(upstream.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_response_without_candidates_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_err());
    }

    #[test]
    fn test_candidate_without_text_is_an_error() {
        let replies = [
            json!({ "candidates": [{ "finishReason": "SAFETY" }] }),
            json!({ "candidates": [{ "content": { "role": "model" } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "inlineData": {} }] } }] }),
        ];
        for reply in replies {
            let response: GenerateContentResponse = serde_json::from_value(reply).unwrap();
            assert!(response.text().is_err());
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeminiConfig::default().with_api_key("secret-key-123");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-key-123"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("gemini-2.5-flash"));
    }
}
