use super::api::{ENTER_TEXT_PROMPT, SelectionOutcome, evaluate_selection, run_selection};
use crate::internal::prompts::UserInteraction;
use crate::shared::prelude::{AnalyzerRegistry, FoundConfig};
use anyhow::Result;
use clap::Args;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Label of the analyzer to run, as shown by `textlens list`
    #[arg(long, short)]
    name: String,

    /// Text to analyze. When omitted one line is read from stdin.
    text: Option<String>,
}

fn build_registry(found_config: &FoundConfig) -> AnalyzerRegistry {
    let registry = AnalyzerRegistry::from_discovered(found_config.discover_analyzers());
    debug!("Registered {} analyzers", registry.len());
    registry
}

/// Interactive selection over every analyzer the config offers.
pub fn select_root<U>(found_config: &FoundConfig, interaction: &U) -> Result<i32>
where
    U: UserInteraction,
{
    let registry = build_registry(found_config);
    let outcome = run_selection(&registry, interaction)?;
    Ok(outcome.to_exit_code())
}

/// Non-interactive run of a single analyzer.
pub fn analyze_root<U>(
    found_config: &FoundConfig,
    args: &AnalyzeArgs,
    interaction: &U,
) -> Result<i32>
where
    U: UserInteraction,
{
    let registry = build_registry(found_config);

    let outcome = if registry.get(&args.name).is_none() {
        SelectionOutcome::InvalidChoice {
            label: args.name.clone(),
        }
    } else {
        let text = match &args.text {
            Some(text) => text.clone(),
            None => interaction.require_line(ENTER_TEXT_PROMPT)?,
        };
        evaluate_selection(&registry, &args.name, &text)?
    };

    interaction.notify(&outcome.message());
    Ok(outcome.to_exit_code())
}
