//! Gemini client — wraps the `generateContent` REST endpoint with a fixed
//! model and a JSON response schema.
//!
//! Unlike a batch pipeline, every call here is tied to an explicit user
//! action, so a failed call is surfaced immediately and retried only by the
//! user pressing generate again. No retry or backoff happens in-process.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::gateway::prompts::{build_prompt, response_schema};
use crate::gateway::{ContentGenerator, GeneratedContent};
use crate::models::input::UserInput;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// The model used for all generation calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API credential configured — set GEMINI_API_KEY and restart")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no content")]
    EmptyContent,

    #[error("Model response did not match the expected schema: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first text part.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.text.as_deref()))
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

/// The single Gemini client used by the service. The credential is passed
/// in at construction so tests can run against a substitute endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE.to_string())
    }

    /// Overridable base URL, used by tests to point at a fake transport.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    /// Makes one `generateContent` call and parses the candidate text as
    /// the schema-constrained payload. A single attempt per invocation.
    async fn call(&self, prompt: &str) -> Result<GeneratedContent, GenerationError> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::MissingCredential);
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, MODEL
        );

        let request_body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload.text().ok_or(GenerationError::EmptyContent)?;

        debug!(bytes = text.len(), "generation call returned a candidate");

        let content: GeneratedContent = serde_json::from_str(strip_json_fences(text))?;
        Ok(content)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, input: &UserInput) -> Result<GeneratedContent, GenerationError> {
        let prompt = build_prompt(input);
        self.call(&prompt).await
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
/// The JSON response mime type makes fences unlikely, but not impossible.
fn strip_json_fences(text: &str) -> &str {
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
    use crate::models::resume::PersonalInfo;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"summary\": \"ok\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"summary\": \"ok\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"summary\": \"ok\"}";
        assert_eq!(strip_json_fences(input), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn test_candidate_text_extraction() {
        let json = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "{\"summary\":\"s\",\"experience\":[]}" }] }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.text(),
            Some("{\"summary\":\"s\",\"experience\":[]}")
        );
    }

    #[test]
    fn test_empty_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_network_call() {
        let client = GeminiClient::new(String::new());
        let input = UserInput {
            personal_info: PersonalInfo {
                name: "N".to_string(),
                title: String::new(),
                email: String::new(),
                phone: String::new(),
                location: String::new(),
                linkedin: None,
                certificates_url: None,
                profile_picture_url: None,
            },
            summary_keywords: String::new(),
            experience: vec![],
            education: vec![],
            skills: vec![],
        };

        let err = client.generate(&input).await.unwrap_err();
        assert!(matches!(err, GenerationError::MissingCredential));
        assert!(!err.to_string().is_empty());
    }
}
