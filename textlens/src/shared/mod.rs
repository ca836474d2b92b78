use crate::analyzer::AnalyzerOrigin;
use crate::internal::prompts::UserInteraction;
use colored::Colorize;
use std::cmp::max;
use std::path::Path;

mod config_load;
mod logging;
pub mod models;
pub mod registry;

pub const RUN_ID_ENV_VAR: &str = "TEXTLENS_RUN_ID";

pub mod prelude {
    pub use super::config_load::{
        CONFIG_DIR_NAME, ConfigError, ConfigOptions, FoundConfig, build_config_path,
    };
    pub use super::logging::{ConfiguredLogger, LoggingOpts};
    pub use super::models::prelude::*;
    pub use super::print_details;
    pub use super::registry::AnalyzerRegistry;
    pub use super::RUN_ID_ENV_VAR;
}

/// Render `origin` for humans, relative to `working_dir` when possible.
fn display_origin(working_dir: &Path, origin: &AnalyzerOrigin) -> String {
    match origin {
        AnalyzerOrigin::Builtin => origin.to_string(),
        AnalyzerOrigin::Config { file_path } => {
            let mut loc = file_path.clone();
            // byte offset of the 35th char from the end, when there are more
            let tail_start = loc
                .char_indices()
                .rev()
                .nth(34)
                .map(|(idx, _)| idx)
                .filter(|idx| *idx > 0);
            if let Some(diff) = pathdiff::diff_paths(&loc, working_dir) {
                loc = diff.display().to_string();
            } else if let Some(cut) = tail_start {
                loc = format!("...{}", loc.split_off(cut));
            }
            loc
        }
    }
}

/// Print a table of every registered analyzer.
pub fn print_details<U>(working_dir: &Path, registry: &registry::AnalyzerRegistry, interaction: &U)
where
    U: UserInteraction + ?Sized,
{
    let max_label_length = registry.labels().map(str::len).max().unwrap_or(20);
    let max_label_length = max(max_label_length, 20) + 2;

    interaction.notify(&format!(
        "  {:max_label_length$}{:50}{}",
        "Label".white().bold(),
        "Description".white().bold(),
        "Source".white().bold()
    ));
    for (label, analyzer) in registry.iter() {
        let mut description = analyzer.description.clone();
        if description.chars().count() > 45 {
            description = format!("{}...", description.chars().take(45).collect::<String>());
        }

        let loc = display_origin(working_dir, &analyzer.origin);
        interaction.notify(&format!(
            "- {:max_label_length$}{:50}{}",
            label, description, loc
        ));
    }
}
