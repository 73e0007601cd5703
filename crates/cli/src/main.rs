use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use newscan_core::{
    Article, ArticleRanker, FetchConfig, FilterSet, JsonConfig, Scraper, SortMode, TextConfig, convert_to_json,
    convert_to_text,
};
use owo_colors::OwoColorize;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the article list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// List the articles found on a news page
#[derive(Parser, Debug)]
#[command(name = "newscan")]
#[command(author = "newscan Contributors")]
#[command(version)]
#[command(about = "List the articles found on a news page", long_about = None)]
struct Args {
    /// URL of the listing page
    #[arg(value_name = "URL")]
    url: String,

    /// Read the page from a saved HTML file ("-" for stdin) instead of fetching URL
    #[arg(long, value_name = "FILE")]
    html: Option<String>,

    /// Keep only articles whose headline or author contains KEYWORD (repeatable)
    #[arg(short = 'k', long = "filter", value_name = "KEYWORD")]
    filters: Vec<String>,

    /// Sort order (newest, oldest, relevance)
    #[arg(short, long, default_value = "newest", value_name = "MODE")]
    sort: SortMode,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print a summary header above the text listing
    #[arg(long)]
    summary: bool,

    /// Wrap headlines at this width (0 = no wrapping)
    #[arg(long, default_value = "0", value_name = "COLS")]
    width: usize,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_saved_page(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
    }
}

async fn collect_articles(args: &Args, scraper: &Scraper) -> anyhow::Result<Vec<Article>> {
    match &args.html {
        Some(path) => {
            if args.verbose {
                echo::print_step(1, 3, &format!("Reading saved page {}", path.bright_white()));
            }
            let html = read_saved_page(path)?;
            if args.verbose {
                eprintln!("  {} {}\n", "Size:".dimmed(), echo::format_size(html.len()).bright_white());
            }
            Ok(scraper.scrape_html(&args.url, &html)?)
        }
        None => {
            if args.verbose {
                echo::print_step(1, 3, &format!("Fetching {}", args.url.bright_white().underline()));
            }
            Ok(scraper.scrape_url(&args.url).await?)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("newscan_core=debug")
            .with_writer(io::stderr)
            .init();
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
        ..Default::default()
    };
    let scraper = Scraper::new(config).context("Failed to build HTTP client")?;

    let started = Instant::now();
    let mut timings = Vec::new();

    let articles = collect_articles(&args, &scraper).await.context("Failed to scrape page")?;
    timings.push(("Scrape".to_string(), started.elapsed()));

    if args.verbose {
        echo::print_step(2, 3, "Ranking articles");
        eprintln!("  {} {}", "Found:".dimmed(), articles.len().to_string().bright_white());
    }

    let rank_started = Instant::now();
    let filters: FilterSet = args.filters.iter().collect();
    let ranked = ArticleRanker::new().rank(&articles, &filters, args.sort);
    timings.push(("Rank".to_string(), rank_started.elapsed()));

    if args.verbose {
        eprintln!("  {} {}", "Filters:".dimmed(), filters.len().to_string().bright_white());
        eprintln!("  {} {}", "Kept:".dimmed(), ranked.len().to_string().bright_white());
        eprintln!("  {} {}\n", "Sort:".dimmed(), args.sort.to_string().bright_white());
    }

    if ranked.is_empty() {
        echo::print_warning("No articles match the given filters");
    }

    let output = match args.format {
        OutputFormat::Text => {
            let config = TextConfig { line_width: args.width, include_header: args.summary };
            convert_to_text(&ranked, &config)
        }
        OutputFormat::Json => {
            convert_to_json(&ranked, &JsonConfig { pretty: args.pretty }).context("Failed to convert to JSON")?
        }
    };

    if args.verbose {
        echo::print_step(3, 3, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format).bright_white());
        echo::print_timing_summary(started.elapsed(), &timings);
    }

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", output))
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
