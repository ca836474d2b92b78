//! User interaction abstractions.
//!
//! The selection flow only talks to the console through [`UserInteraction`],
//! so it can run against a real terminal (see `ConsoleInteraction` in the cli
//! module) or against a fixed script of answers.

use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("Input ended before an answer to '{prompt}' was given")]
    InputClosed { prompt: String },
    #[error("Prompt failed. {0}")]
    Prompt(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Trait for user interaction (prompts, messages).
pub trait UserInteraction: Send + Sync {
    /// Show `prompt` and read one line of input.
    ///
    /// The line is returned as typed, only the line terminator is removed.
    /// `Ok(None)` means the input ended before a line was read.
    fn read_line(&self, prompt: &str) -> Result<Option<String>, InteractionError>;

    /// Show a line of output to the user.
    fn notify(&self, message: &str);

    /// Like [`UserInteraction::read_line`], but end of input is an error.
    fn require_line(&self, prompt: &str) -> Result<String, InteractionError> {
        self.read_line(prompt)?
            .ok_or_else(|| InteractionError::InputClosed {
                prompt: prompt.to_string(),
            })
    }
}

/// Remove one trailing `\n`, `\r\n` or `\r`.
pub fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

/// One entry of a [`ScriptedInteraction`] transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Prompt(String),
    Message(String),
}

/// Answers prompts from a fixed list and records everything shown.
///
/// ```rust
/// use textlens::internal::prompts::{ScriptedInteraction, UserInteraction};
///
/// let interaction = ScriptedInteraction::new(["Word Count"]);
/// assert_eq!(Some("Word Count".to_string()), interaction.read_line("Which?").unwrap());
/// assert_eq!(None, interaction.read_line("And?").unwrap());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<TranscriptEntry>>,
}

impl ScriptedInteraction {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Only the messages, in the order they were shown.
    pub fn messages(&self) -> Vec<String> {
        self.transcript()
            .into_iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Message(message) => Some(message),
                TranscriptEntry::Prompt(_) => None,
            })
            .collect()
    }

    /// Only the prompts, in the order they were shown.
    pub fn prompts(&self) -> Vec<String> {
        self.transcript()
            .into_iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Prompt(prompt) => Some(prompt),
                TranscriptEntry::Message(_) => None,
            })
            .collect()
    }

    fn record(&self, entry: TranscriptEntry) {
        if let Ok(mut transcript) = self.transcript.lock() {
            transcript.push(entry);
        }
    }
}

impl UserInteraction for ScriptedInteraction {
    fn read_line(&self, prompt: &str) -> Result<Option<String>, InteractionError> {
        self.record(TranscriptEntry::Prompt(prompt.to_string()));
        let mut answers = self
            .answers
            .lock()
            .map_err(|e| InteractionError::Prompt(e.to_string()))?;
        Ok(answers.pop_front())
    }

    fn notify(&self, message: &str) {
        self.record(TranscriptEntry::Message(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_terminator() {
        assert_eq!("abc", strip_line_terminator("abc\n"));
        assert_eq!("abc", strip_line_terminator("abc\r\n"));
        assert_eq!("abc", strip_line_terminator("abc\r"));
        assert_eq!("abc", strip_line_terminator("abc"));
        assert_eq!("  abc  ", strip_line_terminator("  abc  \n"));
        assert_eq!("abc\n", strip_line_terminator("abc\n\n"));
    }

    #[test]
    fn test_scripted_interaction_records_transcript() {
        let interaction = ScriptedInteraction::new(["first"]);

        interaction.notify("hello");
        let answer = interaction.read_line("question?").unwrap();

        assert_eq!(Some("first".to_string()), answer);
        assert_eq!(
            vec![
                TranscriptEntry::Message("hello".to_string()),
                TranscriptEntry::Prompt("question?".to_string()),
            ],
            interaction.transcript()
        );
    }

    #[test]
    fn test_require_line_fails_when_input_ends() {
        let interaction = ScriptedInteraction::new(Vec::<String>::new());

        let err = interaction.require_line("question?").unwrap_err();

        assert!(matches!(err, InteractionError::InputClosed { prompt } if prompt == "question?"));
    }

    #[test]
    fn test_scripted_interaction_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScriptedInteraction>();
    }
}
