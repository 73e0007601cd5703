//! Styled stderr output for verbose runs.

use std::time::Duration;

use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "newscan".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "List the articles found on a news page\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Network-bound stages dominate, so the bands are wider than for pure parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speed {
    Fast,
    Moderate,
    Slow,
}

impl Speed {
    fn of(duration: Duration) -> Self {
        match duration.as_millis() {
            0..=250 => Speed::Fast,
            251..=1500 => Speed::Moderate,
            _ => Speed::Slow,
        }
    }
}

/// Print one timing line, colored by how long the stage took
pub fn print_timing(label: &str, duration: Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let label = format!("{}:", label);

    match Speed::of(duration) {
        Speed::Fast => eprintln!("  {} {:>9.2}ms ({})", label.dimmed(), ms, "fast".dimmed()),
        Speed::Moderate => eprintln!("  {} {:>9.2}ms ({})", label.dimmed(), ms, "moderate".bright_yellow()),
        Speed::Slow => eprintln!("  {} {:>9.2}ms ({})", label.dimmed(), ms, "slow".bright_red()),
    }
}

/// Print timing summary
pub fn print_timing_summary(total: Duration, timings: &[(String, Duration)]) {
    eprintln!("\n{}", "─".repeat(48).dimmed());
    eprintln!("{}", "Timing".bold().cyan());

    for (label, duration) in timings {
        print_timing(label, *duration);
    }

    eprintln!(
        "  {} {:>9.2}ms\n",
        "Total:".bold().dimmed(),
        total.as_secs_f64() * 1000.0
    );
}

/// Format byte counts for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
