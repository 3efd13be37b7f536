//! Search-page scraper.
//!
//! Issues `GET {search_url}?{query_param}={keyword}` and pulls one [`Article`]
//! out of every block matching the article selector: the first heading, the
//! first paragraph and the `href` of the first link inside it.

use super::types::*;
use super::ArticleSource;
use crate::config::FetchConfig;
use crate::error::FetchCause;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

/// Compiled CSS selectors for one page layout.
#[derive(Debug, Clone)]
pub struct ArticleSelectors {
    article: Selector,
    heading: Selector,
    paragraph: Selector,
    link: Selector,
}

impl ArticleSelectors {
    pub fn new(article: &str, heading: &str, paragraph: &str, link: &str) -> Result<Self> {
        Ok(Self {
            article: compile(article)?,
            heading: compile(heading)?,
            paragraph: compile(paragraph)?,
            link: compile(link)?,
        })
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        Self::new(
            &config.article_selector,
            &config.heading_selector,
            &config.paragraph_selector,
            &config.link_selector,
        )
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid CSS selector {:?}: {:?}", css, e))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Parse a results page into articles, in document order.
/// Relative links are resolved against `base`.
pub fn parse_articles(html: &str, base: &Url, selectors: &ArticleSelectors) -> ParsedPage {
    let document = Html::parse_document(html);
    let mut page = ParsedPage::default();

    for block in document.select(&selectors.article) {
        let heading = block.select(&selectors.heading).next().map(element_text);
        let paragraph = block.select(&selectors.paragraph).next().map(element_text);
        let href = block
            .select(&selectors.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::trim);

        let (Some(title), Some(description), Some(href)) = (heading, paragraph, href) else {
            page.skipped += 1;
            continue;
        };

        let link = base
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string());

        page.articles.push(Article {
            title,
            description,
            link,
        });
    }

    page
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Transport failures and overloaded-server statuses are worth another try;
/// builder, redirect and body-decode errors are not.
fn should_retry(cause: &FetchCause) -> bool {
    match cause {
        FetchCause::Status { status } => StatusCode::from_u16(*status)
            .map(is_retryable)
            .unwrap_or(false),
        FetchCause::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        FetchCause::InvalidUrl(_) => false,
    }
}

// ── ArticleSource implementation ─────────────────────────────────────

pub struct HtmlSearchSource {
    client: Client,
    search_url: String,
    query_param: String,
    max_retries: u32,
    selectors: ArticleSelectors,
}

impl HtmlSearchSource {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(&config.user_agent)
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            query_param: config.query_param.clone(),
            max_retries: config.max_retries,
            selectors: ArticleSelectors::from_config(config)?,
        })
    }

    pub fn build_url(&self, keyword: &str) -> Result<Url, FetchCause> {
        Url::parse_with_params(&self.search_url, &[(self.query_param.as_str(), keyword)])
            .map_err(|e| FetchCause::InvalidUrl(format!("{}: {}", self.search_url, e)))
    }

    async fn fetch_once(&self, url: &Url) -> Result<String, FetchCause> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchCause::Status {
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl ArticleSource for HtmlSearchSource {
    async fn fetch_articles(&mut self, keyword: &str) -> Result<Vec<Article>, FetchCause> {
        let url = self.build_url(keyword)?;

        let mut attempt = 0;
        let body = loop {
            let err = match self.fetch_once(&url).await {
                Ok(body) => break body,
                Err(e) => e,
            };
            if !should_retry(&err) || attempt >= self.max_retries {
                return Err(err);
            }
            attempt += 1;
            tracing::warn!(attempt, keyword, error = %err, "search request failed, retrying");
            tokio::time::sleep(Duration::from_millis(500 * attempt as u64)).await;
        };

        let page = parse_articles(&body, &url, &self.selectors);
        if page.skipped > 0 {
            tracing::warn!(
                keyword,
                skipped = page.skipped,
                "dropped article blocks missing a heading, paragraph, or link"
            );
        }
        tracing::debug!(keyword, count = page.articles.len(), "parsed search results");
        Ok(page.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> ArticleSelectors {
        ArticleSelectors::new("article", "h2", "p", "a").unwrap()
    }

    fn base() -> Url {
        Url::parse("https://example.com/search?q=python").unwrap()
    }

    fn fixture_html() -> &'static str {
        r#"<html><body>
            <article>
                <h2>  Python 3.13 released </h2>
                <p>The new release is <b>fast</b> and friendly.</p>
                <a href="https://example.com/py313">read</a>
            </article>
            <div class="ad"><h2>Not an article</h2><p>ignored</p><a href="/ad">x</a></div>
            <article>
                <h2>Rust for Pythonistas</h2>
                <p>A gentle introduction.</p>
                <p>Second paragraph is ignored.</p>
                <a href="/rust-for-py">more</a>
                <a href="/other">other</a>
            </article>
        </body></html>"#
    }

    #[test]
    fn test_parse_articles_basic() {
        let page = parse_articles(fixture_html(), &base(), &selectors());
        assert_eq!(page.articles.len(), 2);
        assert_eq!(page.skipped, 0);
    }

    #[test]
    fn test_parse_articles_document_order_and_text() {
        let page = parse_articles(fixture_html(), &base(), &selectors());
        let first = &page.articles[0];
        assert_eq!(first.title, "Python 3.13 released");
        assert_eq!(first.description, "The new release is fast and friendly.");
        assert_eq!(first.link, "https://example.com/py313");
        assert_eq!(page.articles[1].title, "Rust for Pythonistas");
        assert_eq!(page.articles[1].description, "A gentle introduction.");
    }

    #[test]
    fn test_parse_articles_resolves_relative_links() {
        let page = parse_articles(fixture_html(), &base(), &selectors());
        assert_eq!(page.articles[1].link, "https://example.com/rust-for-py");
    }

    #[test]
    fn test_parse_articles_skips_incomplete_blocks() {
        let html = r#"
            <article><h2>No paragraph</h2><a href="/a">a</a></article>
            <article><p>No heading</p><a href="/b">b</a></article>
            <article><h2>No href</h2><p>text</p><a>c</a></article>
            <article><h2>Complete</h2><p>ok</p><a href="/d">d</a></article>
        "#;
        let page = parse_articles(html, &base(), &selectors());
        assert_eq!(page.skipped, 3);
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].title, "Complete");
    }

    #[test]
    fn test_parse_articles_empty_page() {
        let page = parse_articles("<html><body><p>nothing</p></body></html>", &base(), &selectors());
        assert!(page.articles.is_empty());
        assert_eq!(page.skipped, 0);
    }

    #[test]
    fn test_empty_paragraph_is_kept() {
        let html = r#"<article><h2>Blank</h2><p>   </p><a href="/e">e</a></article>"#;
        let page = parse_articles(html, &base(), &selectors());
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].description, "");
    }

    #[test]
    fn test_invalid_selector_rejected() {
        assert!(ArticleSelectors::new("article", "h2[", "p", "a").is_err());
    }

    #[test]
    fn test_build_url_encodes_keyword() {
        let source = HtmlSearchSource::new(&FetchConfig::default()).unwrap();
        let url = source.build_url("rust & c++").unwrap();
        assert_eq!(url.as_str(), "https://example.com/search?q=rust+%26+c%2B%2B");
    }

    #[test]
    fn test_build_url_rejects_bad_base() {
        let config = FetchConfig {
            search_url: "not a url".to_string(),
            ..FetchConfig::default()
        };
        let source = HtmlSearchSource::new(&config).unwrap();
        assert!(matches!(source.build_url("python"), Err(FetchCause::InvalidUrl(_))));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_builder_error_is_not_retried() {
        let err = Client::new().get("http://[::1").build().unwrap_err();
        assert!(err.is_builder());
        assert!(!should_retry(&FetchCause::Request(err)));
    }

    #[test]
    fn test_status_and_url_causes() {
        assert!(should_retry(&FetchCause::Status { status: 503 }));
        assert!(should_retry(&FetchCause::Status { status: 429 }));
        assert!(!should_retry(&FetchCause::Status { status: 404 }));
        assert!(!should_retry(&FetchCause::InvalidUrl("x".to_string())));
    }

    #[tokio::test]
    async fn test_connection_refused_is_retried() {
        // port 1 on loopback has no listener
        let err = Client::new().get("http://127.0.0.1:1/").send().await.unwrap_err();
        assert!(err.is_connect());
        assert!(should_retry(&FetchCause::Request(err)));
    }

    /// Hits the configured search endpoint.
    /// Run with: cargo test search_live --ignored -- --nocapture
    #[tokio::test]
    #[ignore]
    async fn search_live_fetch() {
        let mut source = HtmlSearchSource::new(&FetchConfig::default()).unwrap();
        match source.fetch_articles("python").await {
            Ok(articles) => {
                println!("Got {} articles", articles.len());
                for a in &articles {
                    println!("  {} | {}", a.title, a.link);
                }
            }
            Err(e) => println!("search fetch error: {}", e),
        }
    }
}
