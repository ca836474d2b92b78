//! Library entry points for choosing and running an analyzer.
//!
//! [`evaluate_selection`] is the console-free core: given a registry, a label
//! and a text it either runs the analyzer once or reports the label as unknown.
//! [`run_selection`] wraps it with the interactive listing and prompts.
//!
//! ```rust
//! use textlens::analyzer::{BuiltinPlugins, PluginSource};
//! use textlens::select::{SelectionOutcome, evaluate_selection};
//! use textlens::shared::registry::AnalyzerRegistry;
//!
//! let registry = AnalyzerRegistry::from_discovered(BuiltinPlugins.discover());
//! let outcome = evaluate_selection(&registry, "Word Count", "hello world").unwrap();
//!
//! assert_eq!(
//!     SelectionOutcome::Analyzed { label: "Word Count".to_string(), result: 2 },
//!     outcome
//! );
//! ```

use super::error::SelectError;
use crate::internal::prompts::UserInteraction;
use crate::shared::registry::AnalyzerRegistry;
use tracing::{debug, info};

pub const LISTING_HEADER: &str = "Available Text Analyzers:";
pub const CHOOSE_ANALYZER_PROMPT: &str =
    "Please enter the name of the Text Analyzer you would like to use:";
pub const ENTER_TEXT_PROMPT: &str = "Please enter the text you would like to analyze:";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Exiting.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The analyzer ran and produced `result`.
    Analyzed { label: String, result: i64 },
    /// No analyzer is registered under `label`.
    InvalidChoice { label: String },
}

impl SelectionOutcome {
    /// The line shown to the user for this outcome.
    pub fn message(&self) -> String {
        match self {
            SelectionOutcome::Analyzed { result, .. } => {
                format!("The result of the analysis is: {}", result)
            }
            SelectionOutcome::InvalidChoice { .. } => INVALID_CHOICE_MESSAGE.to_string(),
        }
    }

    /// Both outcomes are completed runs. An unknown label ends the run after
    /// [`INVALID_CHOICE_MESSAGE`] and still exits 0; analyzer and input
    /// failures come back as [`SelectError`] instead of an outcome.
    pub fn to_exit_code(&self) -> i32 {
        match self {
            SelectionOutcome::Analyzed { .. } => 0,
            SelectionOutcome::InvalidChoice { .. } => 0,
        }
    }
}

/// Run the analyzer registered as `label` against `text`.
pub fn evaluate_selection(
    registry: &AnalyzerRegistry,
    label: &str,
    text: &str,
) -> Result<SelectionOutcome, SelectError> {
    match registry.analyzer(label) {
        None => {
            info!("No analyzer registered as '{}'", label);
            Ok(SelectionOutcome::InvalidChoice {
                label: label.to_string(),
            })
        }
        Some(analyzer) => {
            debug!("Running analyzer '{}' on {} bytes", label, text.len());
            let result = analyzer
                .analyze(text)
                .map_err(|e| SelectError::AnalyzerFailed {
                    label: label.to_string(),
                    source: e.into(),
                })?;
            Ok(SelectionOutcome::Analyzed {
                label: label.to_string(),
                result,
            })
        }
    }
}

/// Show the available labels, one per line after [`LISTING_HEADER`].
pub fn print_listing<U>(registry: &AnalyzerRegistry, interaction: &U)
where
    U: UserInteraction + ?Sized,
{
    interaction.notify(LISTING_HEADER);
    for label in registry.labels() {
        interaction.notify(&format!("  {}", label));
    }
}

/// The interactive run: list, ask for a label, ask for text, analyze, report.
///
/// An unknown label ends the run after [`INVALID_CHOICE_MESSAGE`] without asking
/// for text.
pub fn run_selection<U>(
    registry: &AnalyzerRegistry,
    interaction: &U,
) -> Result<SelectionOutcome, SelectError>
where
    U: UserInteraction + ?Sized,
{
    print_listing(registry, interaction);

    let choice = interaction.require_line(CHOOSE_ANALYZER_PROMPT)?;
    let outcome = if registry.get(&choice).is_none() {
        SelectionOutcome::InvalidChoice { label: choice }
    } else {
        let text = interaction.require_line(ENTER_TEXT_PROMPT)?;
        evaluate_selection(registry, &choice, &text)?
    };

    interaction.notify(&outcome.message());
    Ok(outcome)
}
