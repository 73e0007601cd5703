//! Scrape orchestration: fetch, scan, extract, resolve, de-duplicate.
//!
//! [`ArticleExtractor`] runs the HTML half of the pipeline and needs no
//! network; [`Scraper`] adds validation and fetching on top of it.
//!
//! # Example
//!
//! ```rust
//! use newscan_core::scrape::extract_articles;
//! use url::Url;
//!
//! let html = r#"<article><h2>Hello</h2><a href="/hello">Read</a></article>"#;
//! let page = Url::parse("https://example.com/news").unwrap();
//! let articles = extract_articles(html, &page).unwrap();
//!
//! assert_eq!(articles[0].link, "https://example.com/hello");
//! assert_eq!(articles[0].author, "Unknown");
//! ```

use url::Url;

use crate::article::Article;
use crate::dedup::ArticleDeduplicator;
use crate::fields::FieldExtractor;
use crate::parse::Document;
use crate::resolve::resolve_url;
use crate::scan::BlockScanner;
use crate::{Result, ScrapeError};

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};
#[cfg(feature = "fetch")]
use std::sync::Arc;

/// Validates raw user input as an absolute `http(s)` URL.
///
/// # Errors
///
/// [`ScrapeError::Validation`] with "URL is required" for blank input and
/// "Invalid URL format" for anything that is not a well-formed web URL.
pub fn validate_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ScrapeError::Validation("URL is required".to_string()));
    }

    let invalid = || ScrapeError::Validation("Invalid URL format".to_string());
    let url = Url::parse(raw).map_err(|_| invalid())?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(url),
        _ => Err(invalid()),
    }
}

/// The network-free half of the pipeline.
#[derive(Debug)]
pub struct ArticleExtractor {
    scanner: BlockScanner,
    fields: FieldExtractor,
}

impl ArticleExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self { scanner: BlockScanner::new()?, fields: FieldExtractor::new()? })
    }

    /// Extracts de-duplicated articles from `html` served at `page_url`.
    ///
    /// Articles keep traversal order: block selector order, then document
    /// order. Returns [`ScrapeError::NotFound`] when nothing survives.
    pub fn extract(&self, html: &str, page_url: &Url) -> Result<Vec<Article>> {
        let doc = Document::parse(html);
        let source = page_url.host_str().unwrap_or_default().to_string();

        let mut dedup = ArticleDeduplicator::new();
        let mut articles = Vec::new();
        let mut candidates = 0usize;

        for node in self.scanner.scan(&doc) {
            candidates += 1;

            let fields = self.fields.extract(&node);
            if fields.headline.is_empty() {
                continue;
            }

            let link = match fields.link.as_deref() {
                Some(href) => resolve_url(page_url, href),
                None => page_url.clone(),
            };

            if !dedup.admit(link.as_str(), &fields.headline) {
                continue;
            }

            articles.push(Article::new(
                fields.headline,
                fields.author,
                fields.date,
                source.clone(),
                link.into(),
            ));
        }

        tracing::info!(
            page = %page_url,
            candidates,
            articles = articles.len(),
            "scan complete"
        );

        if articles.is_empty() {
            return Err(ScrapeError::not_found());
        }

        Ok(articles)
    }
}

/// Runs the HTML half of the pipeline with a one-off extractor.
pub fn extract_articles(html: &str, page_url: &Url) -> Result<Vec<Article>> {
    ArticleExtractor::new()?.extract(html, page_url)
}

/// Fetches listing pages and turns them into articles.
///
/// Cloning is cheap: the HTTP client and the compiled selectors are shared.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct Scraper {
    client: reqwest::Client,
    config: FetchConfig,
    extractor: Arc<ArticleExtractor>,
}

#[cfg(feature = "fetch")]
impl Scraper {
    /// Builds a scraper with its own client.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = config.build_client()?;
        Self::with_client(client, config)
    }

    /// Builds a scraper around an existing client.
    pub fn with_client(client: reqwest::Client, config: FetchConfig) -> Result<Self> {
        Ok(Self { client, config, extractor: Arc::new(ArticleExtractor::new()?) })
    }

    /// Validates, fetches and extracts `raw`.
    ///
    /// All-or-nothing: either the full article list or an error. Dropping
    /// the returned future aborts the fetch.
    pub async fn scrape_url(&self, raw: &str) -> Result<Vec<Article>> {
        let url = validate_url(raw)?;

        tracing::info!(url = %url, "scraping");
        let html = fetch_url(&self.client, &url, &self.config).await.inspect_err(|e| {
            tracing::warn!(url = %url, error = %e, "fetch failed");
        })?;

        self.extractor.extract(&html, &url)
    }

    /// Extracts articles from HTML already in hand, validating `raw` as the page URL.
    pub fn scrape_html(&self, raw: &str, html: &str) -> Result<Vec<Article>> {
        let url = validate_url(raw)?;
        self.extractor.extract(html, &url)
    }
}
