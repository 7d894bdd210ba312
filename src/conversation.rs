//! Conversation bookkeeping for multi-turn chats.
//!
//! The REPL owns one [`Conversation`] per process run. The ChatGPT provider
//! replays the whole history on every request; the Gemini provider only reads
//! the latest message. History is never persisted and never truncated.

/// The speaker of a [`Turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// The role string used by the OpenAI chat completions API.
    pub fn as_api_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in the conversation, immutable once pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Ordered sequence of turns, alternating User/Assistant starting with User.
#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Conversation::default()
    }

    /// Append a user turn. Must be called when the next expected role is User.
    pub fn push_user(&mut self, content: impl Into<String>) {
        debug_assert!(self.turns.len() % 2 == 0, "user turn out of order");
        self.turns.push(Turn {
            role: Role::User,
            content: content.into(),
        });
    }

    /// Append an assistant turn. Must follow a user turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        debug_assert!(self.turns.len() % 2 == 1, "assistant turn out of order");
        self.turns.push(Turn {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    /// All turns so far, in chronological order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent user message, if any.
    pub fn latest_user_message(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role == Role::User)
            .map(|t| t.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_roles_starting_with_user() {
        let mut conv = Conversation::new();
        conv.push_user("hello");
        conv.push_assistant("hi there");
        conv.push_user("how are you?");
        conv.push_assistant("fine");

        assert_eq!(conv.len(), 4);
        for (i, turn) in conv.turns().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(turn.role, expected);
        }
    }

    #[test]
    fn latest_user_message_tracks_most_recent() {
        let mut conv = Conversation::new();
        assert_eq!(conv.latest_user_message(), None);
        conv.push_user("first");
        conv.push_assistant("ack");
        conv.push_user("second");
        assert_eq!(conv.latest_user_message(), Some("second"));
    }
}
