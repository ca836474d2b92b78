use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod text_analyzer;

pub mod prelude {
    pub use super::V1AlphaApiVersion;
    pub use super::text_analyzer::*;
}

#[derive(Serialize, Deserialize, Debug, strum::Display, Clone, PartialEq, JsonSchema)]
pub enum V1AlphaApiVersion {
    /// Current version of the textlens resource API
    #[serde(rename = "textlens.dev/v1alpha")]
    #[strum(serialize = "textlens.dev/v1alpha")]
    TextlensV1Alpha,
}
