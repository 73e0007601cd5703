//! Field extraction from a candidate article block.
//!
//! Each field is described by an ordered list of [`FieldRule`]s. A rule pairs
//! a CSS matcher with a reader; rules are evaluated left to right over the
//! block's descendants and the first non-empty value wins.

use scraper::Selector;

use crate::Result;
use crate::parse::{Element, compile_selector};

/// Attributes that may carry an article link, in priority order.
pub const LINK_ATTRIBUTES: [&str; 4] = ["href", "data-href", "data-url", "data-link"];

const HEADLINE_SELECTORS: &[&str] = &["h1", "h2", "h3", r#"[class*="title"]"#, r#"[class*="headline"]"#];
const AUTHOR_SELECTORS: &[&str] = &[r#"[class*="author"]"#, r#"[class*="byline"]"#];
const DATE_SELECTORS: &[&str] = &["time", r#"[class*="date"]"#, r#"[class*="time"]"#];
const LINK_SELECTORS: &[&str] = &[
    "a[href]",
    r#"[class*="link"][href]"#,
    "[data-href]",
    "[data-url]",
    "[data-link]",
];

/// Reads a value out of a matched element; `None` means "no value here".
pub type FieldReader = fn(&Element<'_>) -> Option<String>;

/// Which descendants matching a rule's selector get read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidates {
    /// Every match, in document order, until one yields a value.
    Every,
    /// Only the first match; if it yields nothing the rule fails.
    First,
}

/// One `(matcher, reader)` pair.
#[derive(Debug)]
pub struct FieldRule {
    selector: Selector,
    candidates: Candidates,
    reader: FieldReader,
}

impl FieldRule {
    pub fn new(pattern: &str, candidates: Candidates, reader: FieldReader) -> Result<Self> {
        Ok(Self { selector: compile_selector(pattern)?, candidates, reader })
    }

    fn apply(&self, node: &Element<'_>) -> Option<String> {
        let mut matches = node.descendants_matching(&self.selector);
        match self.candidates {
            Candidates::Every => matches.find_map(|el| (self.reader)(&el)),
            Candidates::First => matches.next().and_then(|el| (self.reader)(&el)),
        }
    }
}

/// Raw fields pulled from one block. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub headline: String,
    pub author: String,
    pub date: String,
    /// Unresolved link exactly as found in the markup.
    pub link: Option<String>,
}

/// Pulls headline, author, date and link out of candidate blocks.
#[derive(Debug)]
pub struct FieldExtractor {
    headline: Vec<FieldRule>,
    author: Vec<FieldRule>,
    date: Vec<FieldRule>,
    link: Vec<FieldRule>,
}

impl FieldExtractor {
    /// Builds an extractor with the standard rule lists.
    pub fn new() -> Result<Self> {
        Ok(Self {
            headline: rules(HEADLINE_SELECTORS, Candidates::Every, read_text)?,
            author: rules(AUTHOR_SELECTORS, Candidates::Every, read_text)?,
            date: rules(DATE_SELECTORS, Candidates::Every, read_text)?,
            link: rules(LINK_SELECTORS, Candidates::First, extract_href)?,
        })
    }

    /// Extracts every field from `node`.
    pub fn extract(&self, node: &Element<'_>) -> ExtractedFields {
        ExtractedFields {
            headline: first_match(&self.headline, node).unwrap_or_default(),
            author: first_match(&self.author, node).unwrap_or_default(),
            date: first_match(&self.date, node).unwrap_or_default(),
            link: self.extract_link(node),
        }
    }

    /// Each link rule reads only its first match; the node's own
    /// attributes are the last resort.
    fn extract_link(&self, node: &Element<'_>) -> Option<String> {
        first_match(&self.link, node).or_else(|| extract_href(node))
    }
}

fn rules(patterns: &[&str], candidates: Candidates, reader: FieldReader) -> Result<Vec<FieldRule>> {
    patterns
        .iter()
        .map(|pattern| FieldRule::new(pattern, candidates, reader))
        .collect()
}

fn first_match(rules: &[FieldRule], node: &Element<'_>) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(node))
}

/// Trimmed text content, `None` when blank.
pub fn read_text(element: &Element<'_>) -> Option<String> {
    let text = element.trimmed_text();
    if text.is_empty() { None } else { Some(text) }
}

/// First usable link attribute of `element`.
///
/// Checks [`LINK_ATTRIBUTES`] in order and skips values that are blank,
/// a bare `#`, or a `javascript:` pseudo-URL.
pub fn extract_href(element: &Element<'_>) -> Option<String> {
    LINK_ATTRIBUTES
        .iter()
        .filter_map(|name| element.attr(name))
        .map(str::trim)
        .find(|value| is_usable_href(value))
        .map(str::to_string)
}

fn is_usable_href(value: &str) -> bool {
    !value.is_empty()
        && value != "#"
        && !value
            .get(..11)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("javascript:"))
}
