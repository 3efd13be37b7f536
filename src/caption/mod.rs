pub mod lexicon;
pub mod sentiment;
pub mod stopwords;

use crate::content::{Caption, ContentItem, Sentiment};
use regex::Regex;
use sentiment::SentimentAnalyzer;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Word runs (internal apostrophes and hyphens kept) or a single punctuation mark.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]").expect("valid token regex")
});

pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercased, curly apostrophes folded to ASCII.
fn fold(token: &str) -> String {
    token.to_lowercase().replace('’', "'")
}

pub struct CaptionGenerator {
    stopwords: HashSet<String>,
    analyzer: SentimentAnalyzer,
}

impl Default for CaptionGenerator {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl CaptionGenerator {
    pub fn new(extra_stopwords: &[String]) -> Self {
        let stopwords = stopwords::ENGLISH
            .iter()
            .map(|w| w.to_string())
            .chain(extra_stopwords.iter().map(|w| fold(w)))
            .collect();
        Self {
            stopwords,
            analyzer: SentimentAnalyzer::new(),
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&fold(token))
    }

    /// Stopword-filtered description, tokens rejoined with single spaces.
    pub fn filter_text(&self, text: &str) -> String {
        tokenize(text)
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Sentiment is scored on the unfiltered description.
    pub fn caption_for(&self, description: &str) -> Caption {
        let score = self.analyzer.compound(description);
        Caption {
            text: self.filter_text(description),
            sentiment: Sentiment::from_compound(score),
        }
    }

    /// Caption every item in place. Returns the number captioned.
    pub fn generate_captions(&self, items: &mut [ContentItem]) -> usize {
        for (idx, item) in items.iter_mut().enumerate() {
            let caption = self.caption_for(&item.description);
            tracing::debug!(item = idx, sentiment = %caption.sentiment, "captioned");
            item.set_caption(caption.text, caption.sentiment);
        }
        items.len()
    }
}
