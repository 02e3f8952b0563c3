// Colored terminal output for counter rankings and timings.
//
// This module handles all terminal-specific formatting. The main.rs flow
// computes reports and delegates rendering here.

use colored::Colorize;

use crate::counters::CounterReport;

/// Display one counter's ranked top-N with its pass timing.
pub fn display_report(report: &CounterReport) {
    println!(
        "\n{}",
        format!(
            "=== {} ({} distinct tracked) ===",
            report.label, report.distinct_tracked
        )
        .bold()
    );

    if report.top.is_empty() {
        println!("  (no tokens)");
    } else {
        println!(
            "  {:>4}  {:<24} {:>8}",
            "Rank".dimmed(),
            "Token".dimmed(),
            "Count".dimmed()
        );
        println!("  {}", "-".repeat(40).dimmed());
        for (i, (token, count)) in report.top.iter().enumerate() {
            println!("  {:>4}. {:<24} {:>8}", i + 1, token, count);
        }
    }

    println!("  {} {:?}", "elapsed:".dimmed(), report.elapsed);
}

/// Display a one-line-per-counter summary after all passes ran.
pub fn display_summary(total_tokens: usize, reports: &[CounterReport]) {
    if reports.is_empty() {
        return;
    }

    println!("\n{}", "=== Summary ===".bold());
    println!("  Stream length: {total_tokens} tokens");
    for report in reports {
        let leader = report
            .top
            .first()
            .map(|(token, count)| format!("{token} ({count})"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<14} {:>8} tracked  {:>12?}  top: {}",
            report.label, report.distinct_tracked, report.elapsed, leader,
        );
    }
}
