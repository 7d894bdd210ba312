use std::{
    fmt::{self, Display},
    str::FromStr,
};

use clap::{command, Parser};

/// Name used in the prompt tag and the transcript path.
pub const APP_NAME: &str = "chat-ai";
/// Model used by the ChatGPT provider.
// https://platform.openai.com/docs/models
pub const OPENAI_MODEL: &str = "gpt-4o-mini";
/// Model used by the Gemini provider.
pub const GEMINI_MODEL: &str = "gemini-1.5-pro";
/// Sampling temperature for Gemini chat turns.
pub const GEMINI_CHAT_TEMPERATURE: f32 = 0.1;
/// Default transcript log path, overridable with `CHAT_AI_LOG`.
pub const DEFAULT_LOG_PATH: &str = "/tmp/chat-ai.log";

/// The AI providers supported by chat-ai
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    ChatGpt,
    Gemini,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chatgpt" => Ok(ProviderKind::ChatGpt),
            "gemini" => Ok(ProviderKind::Gemini),
            _ => Err(format!(
                "Invalid AI provider: {}. Select 'chatgpt' or 'gemini'.",
                s
            )),
        }
    }
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::ChatGpt => write!(f, "chatgpt"),
            ProviderKind::Gemini => write!(f, "gemini"),
        }
    }
}

/// CLI for `chat-ai`
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// AI provider [chatgpt, gemini]
    #[arg(short = 'p', long = "provider")]
    pub provider: ProviderKind,
}
