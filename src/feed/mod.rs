pub mod scraped;
pub mod types;

use crate::error::FetchCause;
use async_trait::async_trait;
use types::Article;

/// Anything that can turn a keyword into a list of articles.
#[async_trait]
pub trait ArticleSource: Send {
    async fn fetch_articles(&mut self, keyword: &str) -> Result<Vec<Article>, FetchCause>;
}
