use crate::analyzer::{DiscoveredAnalyzer, TextAnalyzer};
use colored::Colorize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::{debug, warn};

/// Label to analyzer lookup, built fresh for every run.
///
/// Analyzers without a label are skipped. When two analyzers share a label the
/// one discovered last replaces the earlier one, and a warning is emitted so the
/// collision does not go unnoticed.
#[derive(Debug, Default)]
pub struct AnalyzerRegistry {
    entries: BTreeMap<String, DiscoveredAnalyzer>,
}

impl AnalyzerRegistry {
    pub fn from_discovered<I>(discovered: I) -> Self
    where
        I: IntoIterator<Item = DiscoveredAnalyzer>,
    {
        let mut registry = Self::default();
        for analyzer in discovered {
            registry.register(analyzer);
        }
        registry
    }

    /// Register `analyzer` under its label, returning the analyzer it replaced.
    pub fn register(&mut self, analyzer: DiscoveredAnalyzer) -> Option<DiscoveredAnalyzer> {
        let Some(label) = analyzer.label.clone() else {
            debug!("Skipping analyzer from {} without a label", analyzer.origin);
            return None;
        };

        match self.entries.entry(label) {
            Entry::Vacant(slot) => {
                slot.insert(analyzer);
                None
            }
            Entry::Occupied(mut slot) => {
                warn!(target: "user", "Duplicate analyzer label {} found, {} replaces {}", slot.key().bold(), analyzer.origin, slot.get().origin);
                Some(slot.insert(analyzer))
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&DiscoveredAnalyzer> {
        self.entries.get(label)
    }

    pub fn analyzer(&self, label: &str) -> Option<&dyn TextAnalyzer> {
        self.get(label).map(|entry| entry.analyzer.as_ref())
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiscoveredAnalyzer)> {
        self.entries.iter().map(|(label, entry)| (label.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AnalyzerOrigin, CharCount, MockTextAnalyzer, WordCount};
    use std::sync::Arc;

    fn from_config(label: Option<&str>, file_path: &str, result: i64) -> DiscoveredAnalyzer {
        let mut analyzer = MockTextAnalyzer::new();
        analyzer.expect_analyze().returning(move |_| Ok(result));

        DiscoveredAnalyzer {
            label: label.map(str::to_string),
            description: "mock".to_string(),
            origin: AnalyzerOrigin::Config {
                file_path: file_path.to_string(),
            },
            analyzer: Arc::new(analyzer),
        }
    }

    #[test]
    fn test_each_label_registered_once() {
        let registry = AnalyzerRegistry::from_discovered(vec![
            DiscoveredAnalyzer::builtin("Word Count", "words", WordCount),
            DiscoveredAnalyzer::builtin("Char Count", "chars", CharCount),
        ]);

        assert_eq!(2, registry.len());
        assert_eq!(vec!["Char Count", "Word Count"], registry.labels().collect::<Vec<_>>());
        assert_eq!(2, registry.analyzer("Word Count").unwrap().analyze("hello world").unwrap());
        assert_eq!(11, registry.analyzer("Char Count").unwrap().analyze("hello world").unwrap());
    }

    #[test]
    fn test_unlabeled_analyzers_are_skipped() {
        let registry = AnalyzerRegistry::from_discovered(vec![
            from_config(None, "/a.yaml", 1),
            from_config(Some("Kept"), "/b.yaml", 2),
        ]);

        assert_eq!(vec!["Kept"], registry.labels().collect::<Vec<_>>());
    }

    #[test]
    fn test_last_discovered_label_wins() {
        let mut registry = AnalyzerRegistry::from_discovered(vec![from_config(
            Some("Same"),
            "/first.yaml",
            1,
        )]);

        let replaced = registry.register(from_config(Some("Same"), "/second.yaml", 2));

        assert_eq!(
            AnalyzerOrigin::Config {
                file_path: "/first.yaml".to_string()
            },
            replaced.unwrap().origin
        );
        assert_eq!(1, registry.len());
        assert_eq!(2, registry.analyzer("Same").unwrap().analyze("x").unwrap());
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = AnalyzerRegistry::from_discovered(vec![DiscoveredAnalyzer::builtin(
            "Word Count",
            "words",
            WordCount,
        )]);

        assert!(registry.get("word count").is_none());
        assert!(registry.get(" Word Count").is_none());
        assert!(registry.get("Word Count").is_some());
    }

    #[test]
    fn test_empty_registry() {
        let registry = AnalyzerRegistry::from_discovered(Vec::new());

        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
    }
}
