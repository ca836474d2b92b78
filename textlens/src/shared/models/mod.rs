use crate::analyzer::PatternAnalyzer;
use crate::models::prelude::{ModelRoot, V1AlphaTextAnalyzer};
use crate::models::InternalTextlensModel;
use anyhow::{Result, anyhow};
use serde_yaml::Value;

pub mod prelude {
    pub use super::ParsedConfig;
}

/// A config document matched to a known resource kind.
#[derive(Debug, PartialEq)]
pub enum ParsedConfig {
    TextAnalyzer(PatternAnalyzer),
}

#[cfg(test)]
impl ParsedConfig {
    pub fn get_text_analyzer(&self) -> Option<PatternAnalyzer> {
        match self {
            ParsedConfig::TextAnalyzer(root) => Some(root.clone()),
        }
    }
}

impl TryFrom<ModelRoot<Value>> for ParsedConfig {
    type Error = anyhow::Error;

    fn try_from(value: ModelRoot<Value>) -> Result<Self, Self::Error> {
        if let Some(known) = V1AlphaTextAnalyzer::known_type(&value)? {
            return Ok(ParsedConfig::TextAnalyzer(PatternAnalyzer::try_from(known)?));
        }
        Err(anyhow!(
            "{}/{} is not a known resource type",
            value.api_version,
            value.kind
        ))
    }
}

#[cfg(test)]
pub(crate) fn parse_models_from_string(
    file_path: &std::path::Path,
    input: &str,
) -> Result<Vec<ParsedConfig>> {
    use serde_yaml::Deserializer;

    let mut models = Vec::new();
    for doc in Deserializer::from_str(input) {
        if let Some(parsed_model) = crate::shared::config_load::parse_model(doc, file_path) {
            models.push(parsed_model.try_into()?)
        }
    }

    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_unknown_kind_is_an_error() {
        let text = "apiVersion: textlens.dev/v1alpha
kind: Mystery
metadata:
  name: what
spec: {}";

        let err = parse_models_from_string(Path::new("/foo/file.yaml"), text).unwrap_err();

        assert_eq!(
            "textlens.dev/v1alpha/Mystery is not a known resource type",
            err.to_string()
        );
    }
}
