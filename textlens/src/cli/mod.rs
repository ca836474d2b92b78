//! CLI implementations of the interaction traits.
//!
//! [`ConsoleInteraction`] prompts with `inquire` when stdin is a terminal and
//! falls back to plain line reads when input is piped, so scripted runs such
//! as `printf 'Word Count\nhello\n' | textlens` behave the same as typing.

use crate::internal::prompts::{InteractionError, UserInteraction, strip_line_terminator};
use inquire::InquireError;
use std::io::{BufRead, IsTerminal, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleInteraction;

/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
fn decode_line(buf: &[u8]) -> String {
    strip_line_terminator(&String::from_utf8_lossy(buf)).to_string()
}

impl ConsoleInteraction {
    fn read_plain_line(prompt: &str) -> Result<Option<String>, InteractionError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut buf = Vec::new();
        let read = std::io::stdin().lock().read_until(b'\n', &mut buf)?;
        if read == 0 {
            debug!("stdin closed while waiting for '{}'", prompt);
            return Ok(None);
        }

        Ok(Some(decode_line(&buf)))
    }

    fn read_tty_line(prompt: &str) -> Result<Option<String>, InteractionError> {
        match inquire::Text::new(prompt).prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::NotTTY) => Self::read_plain_line(prompt),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(None)
            }
            Err(InquireError::IO(e)) => Err(InteractionError::Io(e)),
            Err(e) => Err(InteractionError::Prompt(e.to_string())),
        }
    }
}

impl UserInteraction for ConsoleInteraction {
    fn read_line(&self, prompt: &str) -> Result<Option<String>, InteractionError> {
        if std::io::stdin().is_terminal() {
            Self::read_tty_line(prompt)
        } else {
            Self::read_plain_line(prompt)
        }
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_interaction_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConsoleInteraction>();
    }

    #[test]
    fn test_decode_line_replaces_invalid_utf8() {
        assert_eq!("caf\u{FFFD}", decode_line(b"caf\xe9\n"));
        assert_eq!("café", decode_line("café\r\n".as_bytes()));
        assert_eq!("no newline", decode_line(b"no newline"));
    }
}
