use serde::{Deserialize, Serialize};

use crate::Result;
use crate::article::Article;

/// Wire shape of a successful scrape: `{"articles": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleList {
    pub articles: Vec<Article>,
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Convert articles to the `{"articles": [...]}` JSON document
pub fn convert_to_json(articles: &[Article], config: &JsonConfig) -> Result<String> {
    let output = ArticleList { articles: articles.to_vec() };

    if config.pretty {
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(serde_json::to_string(&output)?)
    }
}
