//! Gemini provider backed by the Vertex AI `generateContent` endpoint.
//!
//! Unlike the ChatGPT provider, each request carries only the latest user
//! message; conversational context is a provider-side concern here. See the
//! [Vertex AI docs](https://cloud.google.com/vertex-ai/generative-ai/docs/model-reference/inference)
//! for the request/response schemas.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{GEMINI_CHAT_TEMPERATURE, GEMINI_MODEL};
use crate::conversation::Conversation;
use crate::errors::ChatError;
use crate::provider::ChatProvider;

const PROVIDER_NAME: &str = "Gemini";

/// A `generateContent` content item
#[derive(Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A single text part of a content item
#[derive(Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

/// A `generateContent` request body
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// A `generateContent` response candidate
#[derive(Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}

/// A `generateContent` response body
#[derive(Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// Gemini client bound to a Vertex AI project and region.
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: String,
    url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, project_id: &str, region: &str) -> Self {
        let url = format!(
            "https://{region}-aiplatform.googleapis.com/v1/projects/{project_id}/locations/{region}/publishers/google/models/{GEMINI_MODEL}:generateContent"
        );
        GeminiClient {
            client: reqwest::blocking::Client::new(),
            api_key,
            url,
        }
    }
}

/// Build a request carrying only the latest user message.
fn build_request(message: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart {
                text: message.to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: GEMINI_CHAT_TEMPERATURE,
        },
    }
}

/// Extract the first candidate's first text part.
fn first_candidate_text(resp: GeminiResponse) -> Option<String> {
    resp.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
}

impl ChatProvider for GeminiClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn complete(&self, conversation: &Conversation) -> Result<String, ChatError> {
        println!("> Waiting for {}..", PROVIDER_NAME);

        let message = conversation.latest_user_message().unwrap_or_default();
        let req_body = build_request(message);
        debug!(model = GEMINI_MODEL, "sending generateContent request");

        let provider_err = |source| ChatError::Provider {
            provider: PROVIDER_NAME,
            source,
        };
        let body = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()
            .map_err(provider_err)?
            .error_for_status()
            .map_err(provider_err)?
            .text()
            .map_err(provider_err)?;

        let parsed: GeminiResponse =
            serde_json::from_str(&body).map_err(|source| ChatError::MalformedResponse {
                provider: PROVIDER_NAME,
                source,
            })?;
        first_candidate_text(parsed).ok_or(ChatError::EmptyReply {
            provider: PROVIDER_NAME,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_single_message_and_temperature() {
        let json = serde_json::to_value(build_request("hello")).unwrap();
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        // wire format is camelCase
        assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn parses_first_candidate_first_part() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "pong"}, {"text": "extra"}]}}
            ]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(first_candidate_text(parsed), Some("pong".to_string()));
    }

    #[test]
    fn missing_candidates_yields_none() {
        let parsed: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(first_candidate_text(parsed), None);

        let parsed: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(first_candidate_text(parsed), None);
    }
}
