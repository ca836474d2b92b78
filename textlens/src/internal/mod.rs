//! Console-independent abstractions.
//!
//! - [`prompts`] - user interaction (reading answers, showing messages)
//!
//! The CLI uses `ConsoleInteraction` from the [`crate::cli`] module. Library
//! consumers and tests can drive the same flow with [`ScriptedInteraction`].

pub mod prompts;

pub use prompts::{InteractionError, ScriptedInteraction, TranscriptEntry, UserInteraction};
