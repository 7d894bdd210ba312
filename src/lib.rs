//! # chat-ai
//! Chat with ChatGPT or Gemini from your terminal!
//!
//! A command line program that reads one message per line, forwards it to the
//! selected AI provider, and prints the reply. Supports the OpenAI chat
//! completions API and the Vertex AI Gemini API.
//!
//! ## Usage
//! These are the library crate documentation for `chat-ai`. For usage of the
//! binary install the local binary crate (`cargo install chat-ai`) and see
//! ```shell
//! $ chat-ai --help
//! ```
//!
//! ## Environment Variables:
//! - `API_KEY`: Required. The API key for the OpenAI provider, or an access
//!   token for the Vertex AI Gemini provider.
//! - `VAI_PROJECT_ID`: Required for `gemini`. The Google Cloud project id.
//! - `VAI_REGION`: Required for `gemini`. The Vertex AI region (e.g. `us-central1`).
//! - `CHAT_AI_LOG`: Optional. Transcript log path (default: `/tmp/chat-ai.log`).
//!
//! ## Notes:
//! - Reserved inputs: `q` quits the chat, `h` shows help. Anything else is
//!   sent to the provider as-is.
//! - The ChatGPT provider receives the full conversation so far on each turn.
//!   The Gemini provider receives only the latest message.
//! - The transcript log is append-only and is never truncated or rotated.
//!   Delete it manually when the history is no longer needed.
//!
pub mod cli;
pub mod conversation;
pub mod errors;
pub mod gemini;
pub mod openai;
pub mod provider;
pub mod repl;
pub mod transcript;
