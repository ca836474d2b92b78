pub mod analyzer;
pub mod cli;
pub mod internal;
pub mod models;
pub mod select;
pub mod shared;

pub mod prelude {
    pub use crate::analyzer::{
        AnalyzerOrigin, BuiltinPlugins, ConfigPlugins, DiscoveredAnalyzer, MockTextAnalyzer,
        PatternAnalyzer, PluginSource, TextAnalyzer, discover_plugins,
    };
    pub use crate::cli::ConsoleInteraction;
    pub use crate::internal::{
        InteractionError, ScriptedInteraction, TranscriptEntry, UserInteraction,
    };
    pub use crate::select::prelude::*;
    pub use crate::select::{SelectError, SelectionOutcome, evaluate_selection, run_selection};
    pub use crate::shared::prelude::*;
}
