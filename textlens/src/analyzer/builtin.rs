use super::{DiscoveredAnalyzer, PluginSource, TextAnalyzer};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Counts Unicode words, punctuation and whitespace excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCount;

impl TextAnalyzer for WordCount {
    fn analyze(&self, text: &str) -> anyhow::Result<i64> {
        Ok(text.unicode_words().count() as i64)
    }
}

/// Counts user-perceived characters (extended grapheme clusters).
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl TextAnalyzer for CharCount {
    fn analyze(&self, text: &str) -> anyhow::Result<i64> {
        Ok(text.graphemes(true).count() as i64)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineCount;

impl TextAnalyzer for LineCount {
    fn analyze(&self, text: &str) -> anyhow::Result<i64> {
        Ok(text.lines().count() as i64)
    }
}

/// Counts sentences ended by `.`, `!` or `?`. Trailing text without a
/// terminator is still a sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceCount;

impl TextAnalyzer for SentenceCount {
    fn analyze(&self, text: &str) -> anyhow::Result<i64> {
        let count = SENTENCE_END
            .split(text)
            .filter(|segment| !segment.trim().is_empty())
            .count();
        Ok(count as i64)
    }
}

/// The analyzers compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPlugins;

impl PluginSource for BuiltinPlugins {
    fn discover(&self) -> Vec<DiscoveredAnalyzer> {
        vec![
            DiscoveredAnalyzer::builtin("Word Count", "Number of words in the text", WordCount),
            DiscoveredAnalyzer::builtin(
                "Char Count",
                "Number of characters in the text",
                CharCount,
            ),
            DiscoveredAnalyzer::builtin("Line Count", "Number of lines in the text", LineCount),
            DiscoveredAnalyzer::builtin(
                "Sentence Count",
                "Number of sentences in the text",
                SentenceCount,
            ),
        ]
    }
}
