//! ChatGPT provider backed by the OpenAI chat completions endpoint.
//!
//! For specific details on request/response schemas, see the [OpenAI API chat
//! completions docs](https://platform.openai.com/docs/api-reference/chat/create).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OPENAI_MODEL;
use crate::conversation::Conversation;
use crate::errors::ChatError;
use crate::provider::ChatProvider;

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

const PROVIDER_NAME: &str = "ChatGPT";

/// A `chat/completions` `messages` item
#[derive(Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// A `chat/completions` request body
#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

/// A `chat/completions` response choice
#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// A `chat/completions` response body
#[derive(Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// ChatGPT client. Sends the full conversation on every request.
pub struct OpenAiClient {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        OpenAiClient {
            client: reqwest::blocking::Client::new(),
            api_key,
        }
    }
}

/// Map the conversation to `chat/completions` message items, oldest first.
fn build_request(conversation: &Conversation) -> ChatRequest {
    let messages = conversation
        .turns()
        .iter()
        .map(|turn| ChatMessage {
            role: turn.role.as_api_str().to_string(),
            content: turn.content.clone(),
        })
        .collect();
    ChatRequest {
        model: OPENAI_MODEL.to_string(),
        messages,
        stream: false,
    }
}

impl ChatProvider for OpenAiClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn complete(&self, conversation: &Conversation) -> Result<String, ChatError> {
        println!("> Waiting for {}..", PROVIDER_NAME);

        let req_body = build_request(conversation);
        debug!(model = OPENAI_MODEL, turns = conversation.len(), "sending chat completion request");

        let provider_err = |source| ChatError::Provider {
            provider: PROVIDER_NAME,
            source,
        };
        let body = self
            .client
            .post(OPENAI_URL)
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()
            .map_err(provider_err)?
            .error_for_status()
            .map_err(provider_err)?
            .text()
            .map_err(provider_err)?;

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|source| ChatError::MalformedResponse {
                provider: PROVIDER_NAME,
                source,
            })?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ChatError::EmptyReply {
                provider: PROVIDER_NAME,
            })?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_replays_full_history() {
        let mut conv = Conversation::new();
        conv.push_user("hello");
        conv.push_assistant("hi there");
        conv.push_user("and now?");

        let req = build_request(&conv);
        assert_eq!(req.model, OPENAI_MODEL);
        assert!(!req.stream);
        assert_eq!(req.messages.len(), 3);
        assert_eq!(req.messages[0].role, "user");
        assert_eq!(req.messages[1].role, "assistant");
        assert_eq!(req.messages[2].content, "and now?");
    }

    #[test]
    fn request_serializes_expected_json() {
        let mut conv = Conversation::new();
        conv.push_user("hello");

        let json = serde_json::to_value(build_request(&conv)).unwrap();
        assert_eq!(json["model"], OPENAI_MODEL);
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn parses_first_choice_content() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "42"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "42");
    }

    #[test]
    fn empty_choices_parses_to_empty_vec() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
