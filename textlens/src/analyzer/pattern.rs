use super::{AnalyzerOrigin, DiscoveredAnalyzer, PluginSource, TextAnalyzer};
use crate::models::prelude::{HelpMetadata, ModelMetadata, V1AlphaTextAnalyzer};
use derivative::Derivative;
use regex::{Regex, RegexBuilder};
use std::sync::Arc;
use tracing::debug;

/// Analyzer loaded from a `TextAnalyzer` resource. The result is the number of
/// non-overlapping matches of `pattern`.
#[derive(Derivative)]
#[derivative(PartialEq)]
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    pub full_name: String,
    pub metadata: ModelMetadata,
    pub label: Option<String>,
    pub pattern: String,
    #[derivative(PartialEq = "ignore")]
    pub regex: Regex,
}

impl HelpMetadata for PatternAnalyzer {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn full_name(&self) -> String {
        self.full_name.to_string()
    }
}

impl TryFrom<V1AlphaTextAnalyzer> for PatternAnalyzer {
    type Error = anyhow::Error;

    fn try_from(value: V1AlphaTextAnalyzer) -> Result<Self, Self::Error> {
        let regex = RegexBuilder::new(&value.spec.pattern)
            .case_insensitive(value.spec.case_insensitive)
            .build()?;
        Ok(PatternAnalyzer {
            full_name: value.full_name(),
            metadata: value.metadata,
            label: value.spec.label,
            pattern: value.spec.pattern,
            regex,
        })
    }
}

impl TextAnalyzer for PatternAnalyzer {
    fn analyze(&self, text: &str) -> anyhow::Result<i64> {
        Ok(self.regex.find_iter(text).count() as i64)
    }
}

/// Analyzers declared in config files, in load order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPlugins {
    analyzers: Vec<PatternAnalyzer>,
}

impl ConfigPlugins {
    pub fn new<I>(analyzers: I) -> Self
    where
        I: IntoIterator<Item = PatternAnalyzer>,
    {
        Self {
            analyzers: analyzers.into_iter().collect(),
        }
    }
}

impl PluginSource for ConfigPlugins {
    fn discover(&self) -> Vec<DiscoveredAnalyzer> {
        self.analyzers
            .iter()
            .map(|analyzer| {
                debug!("Discovered {} in {}", analyzer.full_name(), analyzer.file_path());
                DiscoveredAnalyzer {
                    label: analyzer.label.clone(),
                    description: analyzer.description(),
                    origin: AnalyzerOrigin::Config {
                        file_path: analyzer.file_path(),
                    },
                    analyzer: Arc::new(analyzer.clone()),
                }
            })
            .collect()
    }
}
