use crate::models::core::ModelRoot;
use anyhow::anyhow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use tracing::warn;

mod core;
mod v1alpha;

pub mod prelude {
    pub use crate::models::core::*;
    pub use crate::models::v1alpha::prelude::*;
    pub use crate::models::{HelpMetadata, InternalTextlensModel, TextlensModel};
}

use self::core::ModelMetadata;

pub trait HelpMetadata {
    fn metadata(&self) -> &ModelMetadata;
    fn full_name(&self) -> String;
    fn name(&self) -> &str {
        &self.metadata().name
    }
    fn file_path(&self) -> String {
        self.metadata().file_path()
    }
    fn description(&self) -> String {
        self.metadata().description()
    }
}

pub trait TextlensModel<S>: HelpMetadata {
    fn api_version(&self) -> String;
    fn kind(&self) -> String;
    fn spec(&self) -> &S;
}

/// Typed view over a raw [`ModelRoot`]. A resource is "known" when both
/// `apiVersion` and `kind` match, compared case-insensitively.
pub trait InternalTextlensModel<S, R>:
    JsonSchema + Serialize + for<'a> Deserialize<'a> + TextlensModel<S>
where
    R: for<'a> Deserialize<'a>,
{
    fn int_api_version() -> String;
    fn int_kind() -> String;
    fn known_type(input: &ModelRoot<Value>) -> anyhow::Result<Option<R>> {
        if Self::int_api_version().to_lowercase() == input.api_version.to_lowercase()
            && Self::int_kind().to_lowercase() == input.kind.to_lowercase()
        {
            let value = serde_json::to_value(input)?;
            if let Err(e) = Self::validate_resource(&value) {
                warn!(target: "user", "Resource '{}' didn't match the schema for {}. {}", input.full_name(), Self::int_kind(), e);
            }
            return Ok(Some(serde_json::from_value::<R>(value)?));
        }
        Ok(None)
    }

    fn validate_resource(input: &serde_json::Value) -> anyhow::Result<()> {
        let schema = schemars::schema_for!(Self);
        let schema_json = serde_json::to_value(&schema)?;
        let validator = jsonschema::validator_for(&schema_json)
            .map_err(|e| anyhow!("internal json schema is invalid. {}", e))?;

        if validator.is_valid(input) {
            return Ok(());
        }

        let error_messages = validator
            .iter_errors(input)
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Err(anyhow!(error_messages))
    }
}

#[cfg(test)]
mod schema_gen {
    use crate::models::InternalTextlensModel;
    use crate::models::v1alpha::prelude::*;
    use serde::Deserialize;

    #[test]
    fn fixture_resources_match_schema() {
        let text = std::fs::read_to_string(format!(
            "{}/tests/test-cases/pattern-analyzers/.textlens/analyzers.yaml",
            env!("CARGO_MANIFEST_DIR")
        ))
        .unwrap();

        for doc in serde_yaml::Deserializer::from_str(&text) {
            let value = serde_yaml::Value::deserialize(doc).unwrap();
            let parsed: V1AlphaTextAnalyzer = serde_yaml::from_value(value).unwrap();
            let parsed_json = serde_json::to_value(&parsed).unwrap();

            V1AlphaTextAnalyzer::validate_resource(&parsed_json).unwrap();
        }
    }

    #[test]
    fn missing_pattern_fails_validation() {
        let resource = serde_json::json!({
            "apiVersion": "textlens.dev/v1alpha",
            "kind": "TextAnalyzer",
            "metadata": { "name": "broken" },
            "spec": { "label": "Broken" }
        });

        assert!(V1AlphaTextAnalyzer::validate_resource(&resource).is_err());
    }
}
