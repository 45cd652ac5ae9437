// Colored terminal output for sentiment reports.
//
// This module handles all terminal-specific formatting: colors, bars,
// column alignment. main.rs delegates here for `--format pretty`.

use colored::Colorize;

use crate::models::{LocationSentiment, SentimentReport};

const BAR_WIDTH: usize = 20;

/// Display a full report in the terminal.
pub fn display_report(report: &SentimentReport) {
    println!("\n{}", "=== Review Sentiment Report ===".bold());
    println!();

    let overall = report.overall_sentiment;
    println!(
        "  Overall sentiment: {} {:.2}",
        colorize_bar(overall, bar(overall)),
        overall
    );

    let b = &report.sentiment_breakdown;
    println!(
        "  Breakdown: {} positive  {} negative  {} neutral",
        format!("{:.1}%", b.positive * 100.0).green(),
        format!("{:.1}%", b.negative * 100.0).red(),
        format!("{:.1}%", b.neutral * 100.0).dimmed(),
    );

    if report.skipped_reviews > 0 {
        println!(
            "  {} {} reviews could not be scored and were left out",
            "Warning:".yellow(),
            report.skipped_reviews
        );
    }

    display_keywords(report);
    display_locations(&report.geographical_data);
    println!();
}

fn display_keywords(report: &SentimentReport) {
    println!(
        "\n{}",
        format!("  Top keywords ({})", report.top_keywords.len()).bold()
    );
    if report.top_keywords.is_empty() {
        println!("    {}", "(none)".dimmed());
        return;
    }
    for (i, kw) in report.top_keywords.iter().enumerate() {
        println!("    {:>2}. {:<24} {:>5}", i + 1, kw.word, kw.count);
    }
}

/// Locations are shown sorted by name; the report keeps first-seen order.
fn display_locations(locations: &[LocationSentiment]) {
    println!(
        "\n{}",
        format!("  Sentiment by location ({})", locations.len()).bold()
    );

    let mut sorted: Vec<&LocationSentiment> = locations.iter().collect();
    sorted.sort_by(|a, b| a.location.cmp(&b.location));

    for loc in sorted {
        let name = if loc.location.is_empty() {
            "(unknown)".to_string()
        } else {
            super::truncate_chars(&loc.location, 28)
        };
        // Location means are raw [-1, 1]; remap only for the bar
        let unit = (loc.sentiment + 1.0) / 2.0;
        println!(
            "    {:<32} {} {:>+.3}",
            name,
            colorize_bar(unit, bar(unit)),
            loc.sentiment
        );
    }
}

/// A fixed-width bar for a value in [0, 1].
fn bar(value: f64) -> String {
    let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

fn colorize_bar(value: f64, bar: String) -> colored::ColoredString {
    if value >= 0.6 {
        bar.bright_green()
    } else if value <= 0.4 {
        bar.bright_red()
    } else {
        bar.bright_yellow()
    }
}
