//! The provider seam between the REPL and the remote completion APIs.

use crate::conversation::Conversation;
use crate::errors::ChatError;

/// A remote text-completion service.
///
/// Each provider decides how much of the conversation it consumes: ChatGPT
/// replays the full history, Gemini sends only the latest user message.
pub trait ChatProvider {
    /// Provider name shown in the prompt tag and waiting notice.
    fn name(&self) -> &'static str;

    /// Request a completion for the conversation so far. The latest turn is
    /// the pending user message. Errors are fatal to the chat; there is no
    /// retry.
    fn complete(&self, conversation: &Conversation) -> Result<String, ChatError>;
}
