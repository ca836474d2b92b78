use crate::internal::prompts::InteractionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error(transparent)]
    Interaction(#[from] InteractionError),
    #[error("Analyzer '{label}' failed. {source}")]
    AnalyzerFailed {
        label: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
