use crate::models::core::ModelMetadata;
use crate::models::v1alpha::V1AlphaApiVersion;
use crate::models::{HelpMetadata, InternalTextlensModel, TextlensModel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Definition of a pattern based analyzer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalyzerSpec {
    /// Label shown to the user when choosing an analyzer. Resources without a
    /// label are loaded but never offered for selection.
    #[serde(default)]
    pub label: Option<String>,

    /// A Regex, the analysis result is the number of non-overlapping matches.
    pub pattern: String,

    /// Match the pattern ignoring case.
    #[serde(default)]
    pub case_insensitive: bool,
}

#[derive(Serialize, Deserialize, Debug, strum::Display, Clone, PartialEq, JsonSchema)]
pub enum TextAnalyzerKind {
    #[strum(serialize = "TextAnalyzer")]
    TextAnalyzer,
}

/// Resource used to define a `TextAnalyzer`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct V1AlphaTextAnalyzer {
    /// API version of the resource
    pub api_version: V1AlphaApiVersion,
    /// The type of resource.
    pub kind: TextAnalyzerKind,
    /// Standard set of options including name, description for the resource.
    /// Together `kind` and `metadata.name` are required to be unique. If there are duplicate, the
    /// resources "closest" to the execution dir will take precedence.
    pub metadata: ModelMetadata,
    /// Options for the resource.
    pub spec: TextAnalyzerSpec,
}

impl HelpMetadata for V1AlphaTextAnalyzer {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn full_name(&self) -> String {
        format!("{}/{}", self.kind(), self.name())
    }
}

impl TextlensModel<TextAnalyzerSpec> for V1AlphaTextAnalyzer {
    fn api_version(&self) -> String {
        Self::int_api_version()
    }

    fn kind(&self) -> String {
        Self::int_kind()
    }

    fn spec(&self) -> &TextAnalyzerSpec {
        &self.spec
    }
}

impl InternalTextlensModel<TextAnalyzerSpec, V1AlphaTextAnalyzer> for V1AlphaTextAnalyzer {
    fn int_api_version() -> String {
        V1AlphaApiVersion::TextlensV1Alpha.to_string()
    }

    fn int_kind() -> String {
        TextAnalyzerKind::TextAnalyzer.to_string()
    }
}
