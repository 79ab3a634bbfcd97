//! Output formatting helpers for the CLI

use crate::search::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Format a rate in [0, 1] as a percentage
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Name a minimax score from the searching player's side
pub fn describe_score(score: i32) -> &'static str {
    match score {
        WIN_SCORE => "win",
        DRAW_SCORE => "draw",
        LOSS_SCORE => "loss",
        _ => "unknown",
    }
}
