use crate::article::Article;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap headlines at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Include a summary header with the article count and sources
    pub include_header: bool,
}

/// Convert articles to a numbered plain text listing
///
/// ```text
/// 1. Council approves budget
///    Ana Ruiz · June 7, 2020
///    https://example.com/politics/budget
/// ```
pub fn convert_to_text(articles: &[Article], config: &TextConfig) -> String {
    let mut output = String::new();

    if config.include_header {
        output.push_str(&generate_header(articles));
        output.push_str("\n\n");
    }

    let width = articles.len().to_string().len();
    let indent = " ".repeat(width + 2);

    for (i, article) in articles.iter().enumerate() {
        let number = format!("{:>width$}. ", i + 1, width = width);
        let headline = if config.line_width > 0 {
            wrap_text(&article.headline, config.line_width.saturating_sub(indent.len()).max(1))
        } else {
            vec![article.headline.clone()]
        };

        for (line_no, line) in headline.iter().enumerate() {
            if line_no == 0 {
                output.push_str(&number);
            } else {
                output.push_str(&indent);
            }
            output.push_str(line);
            output.push('\n');
        }

        output.push_str(&indent);
        output.push_str(&format!("{} · {}\n", article.author, article.date));
        output.push_str(&indent);
        output.push_str(&article.link);
        output.push('\n');

        if i + 1 < articles.len() {
            output.push('\n');
        }
    }

    output.trim_end().to_string()
}

/// Generate a header from the article list
fn generate_header(articles: &[Article]) -> String {
    let mut sources: Vec<&str> = articles.iter().map(|a| a.source.as_str()).collect();
    sources.dedup();

    let title = match articles.len() {
        1 => "1 article".to_string(),
        n => format!("{} articles", n),
    };

    let mut header = String::new();
    header.push_str(&title);
    header.push('\n');
    header.push_str(&"=".repeat(title.len()));

    if !sources.is_empty() {
        header.push('\n');
        header.push_str(&format!("Source: {}", sources.join(", ")));
    }

    header
}

/// Wrap text to specified line width
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line.push_str(word);
        } else if current_line.chars().count() + 1 + word.chars().count() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}
