//! Structural scan for repeating article-like blocks.

use scraper::Selector;

use crate::Result;
use crate::parse::{Document, Element, compile_selector};

/// Structural selectors, in the order their matches are emitted.
pub const BLOCK_SELECTORS: [&str; 10] = [
    "article",
    ".article",
    ".post",
    ".news-item",
    ".story",
    ".entry",
    ".item",
    r#"div[class*="article"]"#,
    r#"div[class*="post"]"#,
    r#"div[class*="news"]"#,
];

/// Yields candidate article blocks from a document.
///
/// Every selector is applied to the whole document and all of their matches
/// are emitted, so a node matching several selectors is yielded several
/// times. Callers de-duplicate downstream.
#[derive(Debug)]
pub struct BlockScanner {
    selectors: Vec<Selector>,
}

impl BlockScanner {
    pub fn new() -> Result<Self> {
        let selectors = BLOCK_SELECTORS
            .iter()
            .map(|pattern| compile_selector(pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { selectors })
    }

    /// Lazily walks candidate blocks: selector order first, document order second.
    pub fn scan<'a>(&'a self, doc: &'a Document) -> impl Iterator<Item = Element<'a>> + 'a {
        self.selectors
            .iter()
            .flat_map(move |selector| doc.select_compiled(selector))
    }
}
