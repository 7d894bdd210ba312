//! Append-only transcript log of chat lines.
//!
//! The log is opened in append-create mode, held open for the process
//! lifetime, and never truncated or rotated. Write failures are reported to
//! the caller, which logs and continues; a broken transcript never aborts
//! the chat.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Append-only writer of human-readable chat lines.
#[derive(Debug)]
pub struct TranscriptSink {
    file: File,
}

impl TranscriptSink {
    /// Open the transcript log at `path`, creating it if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(TranscriptSink { file })
    }

    /// Append a user message line (`"> <message>"`).
    pub fn append_user(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.file, "> {}", message)?;
        self.file.flush()
    }

    /// Append a reply block followed by a blank separator line.
    pub fn append_reply(&mut self, reply: &str) -> io::Result<()> {
        writeln!(self.file, "{}\n", reply)?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_user_and_reply_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.log");
        let mut sink = TranscriptSink::open(&path).unwrap();

        sink.append_user("hello").unwrap();
        sink.append_reply("hi there").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "> hello\nhi there\n\n");
    }

    #[test]
    fn appends_across_turns_without_truncating() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.log");

        let mut sink = TranscriptSink::open(&path).unwrap();
        sink.append_user("one").unwrap();
        sink.append_reply("first").unwrap();
        drop(sink);

        // reopening must preserve earlier entries
        let mut sink = TranscriptSink::open(&path).unwrap();
        sink.append_user("two").unwrap();
        sink.append_reply("second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "> one\nfirst\n\n> two\nsecond\n\n");
    }
}
