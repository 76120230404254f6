//! LLM Client — the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the generative-AI provider directly.
//! Both generators go through `CompletionProvider`; `GeminiClient` is the only implementation
//! that talks HTTP.
//!
//! Model: hardcoded below, not configurable.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all generation calls.
pub const MODEL: &str = "gemini-2.0-flash-exp";
/// Per-call ceiling. Calls are never retried.
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned no candidates")]
    NoCandidates,

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sampling parameters forwarded as `generationConfig`. `None` fields are omitted
/// so the provider applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        *self == GenerationConfig::default()
    }
}

/// A text-completion backend. Carried in `AppState` as `Arc<dyn CompletionProvider>`
/// so tests can script responses without a network.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one combined prompt and returns the first candidate's text.
    async fn complete(&self, prompt: &str, config: &GenerationConfig) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "GenerationConfig::is_empty")]
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Extracts the text of the first part of the first candidate.
    pub fn first_text(&self) -> Result<&str, LlmError> {
        let candidate = self.candidates.first().ok_or(LlmError::NoCandidates)?;
        candidate
            .content
            .as_ref()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .ok_or(LlmError::EmptyContent)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The Gemini `generateContent` client shared by every generator.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, MODEL)
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, prompt: &str, config: &GenerationConfig) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: config,
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed.first_text().map(str::to_string)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_body_carries_generation_config() {
        let config = GenerationConfig {
            temperature: Some(0.7),
            top_k: Some(1),
            top_p: Some(1.0),
            max_output_tokens: Some(3000),
        };
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
            generation_config: &config,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 3000);
        assert_eq!(value["generationConfig"]["topK"], 1);
    }

    #[test]
    fn test_default_config_is_omitted() {
        let config = GenerationConfig::default();
        let body = GenerateContentRequest {
            contents: vec![],
            generation_config: &config,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_first_text_reads_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r##"{"candidates":[{"content":{"parts":[{"text":"# Roadmap"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}]}"##,
        )
        .unwrap();
        assert_eq!(response.first_text().unwrap(), "# Roadmap");
    }

    #[test]
    fn test_first_text_without_candidates_is_error() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.first_text(), Err(LlmError::NoCandidates)));
    }

    #[test]
    fn test_first_text_without_parts_is_empty_content() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(response.first_text(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_endpoint_uses_hardcoded_model() {
        let client =
            GeminiClient::new("k".to_string(), format!("{DEFAULT_GEMINI_API_URL}/")).unwrap();
        assert_eq!(
            client.endpoint(),
            format!("{DEFAULT_GEMINI_API_URL}/models/{MODEL}:generateContent")
        );
    }
}
