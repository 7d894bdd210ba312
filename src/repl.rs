//! The interactive read-evaluate-print loop.
//!
//! One line of input per iteration. `q` quits, `h` prints help, anything
//! else is a chat message. A provider failure ends the loop with an error;
//! a transcript write failure is logged and ignored.

use std::io::{BufRead, Write};

use chrono::Utc;
use tracing::warn;

use crate::cli::{ProviderKind, APP_NAME};
use crate::conversation::Conversation;
use crate::errors::ChatError;
use crate::provider::ChatProvider;
use crate::transcript::TranscriptSink;

/// Classification of one trimmed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Chat(String),
}

/// Classify a raw input line. Reserved commands are exact matches after
/// trimming; everything else, including the empty string, is a chat message.
pub fn classify(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "q" => Command::Quit,
        "h" => Command::Help,
        _ => Command::Chat(trimmed.to_string()),
    }
}

fn display_help<W: Write>(output: &mut W) -> Result<(), ChatError> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  q - quit: Exit the chat.")?;
    writeln!(output, "  h - help: Display this help message.")?;
    Ok(())
}

/// Run the chat loop until the user quits, input ends, or a provider call
/// fails. The conversation accumulates one User and one Assistant turn per
/// successful chat message.
pub fn run_repl<R: BufRead, W: Write>(
    provider: &dyn ChatProvider,
    kind: ProviderKind,
    input: &mut R,
    output: &mut W,
    conversation: &mut Conversation,
    mut transcript: Option<&mut TranscriptSink>,
) -> Result<(), ChatError> {
    let mut line = String::new();
    loop {
        write!(
            output,
            "{} [{}:{}]: ",
            Utc::now().format("%a, %d %b %Y %H:%M:%S UTC"),
            APP_NAME,
            kind
        )?;
        output.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            // EOF ends the chat like `q`
            Ok(0) => {
                writeln!(output, "Exiting chat. bye!")?;
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                writeln!(output, "Error reading command: {}", e)?;
                continue;
            }
        }

        match classify(&line) {
            Command::Quit => {
                writeln!(output, "Exiting chat. bye!")?;
                return Ok(());
            }
            Command::Help => {
                display_help(output)?;
            }
            Command::Chat(message) => {
                conversation.push_user(message.clone());
                let reply = provider.complete(conversation)?;
                writeln!(output, "{}", reply)?;
                if let Some(sink) = transcript.as_deref_mut() {
                    if let Err(e) = sink
                        .append_user(&message)
                        .and_then(|()| sink.append_reply(&reply))
                    {
                        warn!(error = %e, "failed to write transcript entry");
                    }
                }
                conversation.push_assistant(reply);
            }
        }
    }
}
