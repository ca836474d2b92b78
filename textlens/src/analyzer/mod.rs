//! Text analyzer plugins and the sources they are discovered from.
//!
//! A plugin is anything implementing [`TextAnalyzer`]. Plugins are offered to
//! the user under a label; a [`PluginSource`] yields them together with that
//! label, and plugins without one are never selectable.

use mockall::automock;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

mod builtin;
mod pattern;

pub use builtin::{BuiltinPlugins, CharCount, LineCount, SentenceCount, WordCount};
pub use pattern::{ConfigPlugins, PatternAnalyzer};

/// A single text-to-integer analysis.
#[automock]
pub trait TextAnalyzer: Send + Sync {
    /// Analyze `text` and return the numeric result. Errors are not recovered
    /// by the caller; they end the run.
    fn analyze(&self, text: &str) -> anyhow::Result<i64>;
}

/// Where a discovered analyzer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerOrigin {
    Builtin,
    Config { file_path: String },
}

impl Display for AnalyzerOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerOrigin::Builtin => write!(f, "builtin"),
            AnalyzerOrigin::Config { file_path } => write!(f, "{}", file_path),
        }
    }
}

/// An analyzer as yielded by a [`PluginSource`], before it is registered.
#[derive(Clone)]
pub struct DiscoveredAnalyzer {
    pub label: Option<String>,
    pub description: String,
    pub origin: AnalyzerOrigin,
    pub analyzer: Arc<dyn TextAnalyzer>,
}

impl DiscoveredAnalyzer {
    pub fn builtin<A>(label: &str, description: &str, analyzer: A) -> Self
    where
        A: TextAnalyzer + 'static,
    {
        Self {
            label: Some(label.to_string()),
            description: description.to_string(),
            origin: AnalyzerOrigin::Builtin,
            analyzer: Arc::new(analyzer),
        }
    }
}

impl fmt::Debug for DiscoveredAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveredAnalyzer")
            .field("label", &self.label)
            .field("description", &self.description)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Anything that can list analyzer plugins.
pub trait PluginSource {
    fn discover(&self) -> Vec<DiscoveredAnalyzer>;
}

/// Collect the plugins of every source, keeping source order.
pub fn discover_plugins(sources: &[&dyn PluginSource]) -> Vec<DiscoveredAnalyzer> {
    sources.iter().flat_map(|source| source.discover()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Vec<DiscoveredAnalyzer>);

    impl PluginSource for FixedSource {
        fn discover(&self) -> Vec<DiscoveredAnalyzer> {
            self.0.clone()
        }
    }

    #[test]
    fn test_discover_plugins_keeps_source_order() {
        let first = FixedSource(vec![DiscoveredAnalyzer::builtin("A", "first", WordCount)]);
        let second = FixedSource(vec![
            DiscoveredAnalyzer::builtin("B", "second", CharCount),
            DiscoveredAnalyzer::builtin("A", "third", LineCount),
        ]);

        let sources: Vec<&dyn PluginSource> = vec![&first, &second];
        let found = discover_plugins(&sources);
        let descriptions: Vec<_> = found.iter().map(|d| d.description.as_str()).collect();

        assert_eq!(vec!["first", "second", "third"], descriptions);
    }

    #[test]
    fn test_origin_display() {
        assert_eq!("builtin", AnalyzerOrigin::Builtin.to_string());
        assert_eq!(
            "/a/b.yaml",
            AnalyzerOrigin::Config {
                file_path: "/a/b.yaml".to_string()
            }
            .to_string()
        );
    }
}
