mod api;
mod cli;
mod error;

pub mod prelude {
    pub use super::cli::{AnalyzeArgs, analyze_root, select_root};
}

pub use api::{
    CHOOSE_ANALYZER_PROMPT, ENTER_TEXT_PROMPT, INVALID_CHOICE_MESSAGE, LISTING_HEADER,
    SelectionOutcome, evaluate_selection, print_listing, run_selection,
};
pub use error::SelectError;
