/// One article block extracted from a search results page.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Result of parsing one results page.
#[derive(Debug, Default)]
pub struct ParsedPage {
    pub articles: Vec<Article>,
    /// Blocks dropped for missing a heading, paragraph, or link.
    pub skipped: usize,
}
