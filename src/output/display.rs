//! Display functions for command results

use super::formatters::{share_bar, tree_outline};
use crate::commands::{PrecomputeSummary, ReplayStatistics, SolveSummary};
use crate::tree::{Replay, VerifyReport};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of a solve run
pub fn print_solve_summary(summary: &SolveSummary, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checked {} starting {} against {} answers",
        summary.reports.len(),
        if summary.reports.len() == 1 { "word" } else { "words" },
        summary.answers
    );
    println!("{}", "─".repeat(60).cyan());

    if let [report] = summary.reports.as_slice() {
        let start = report.start.text().to_uppercase();
        match report.outcome.tree() {
            Some(tree) => {
                let mode = report.mode.map(|m| m.to_string()).unwrap_or_default();
                println!(
                    "\n{}",
                    format!("✅ {start} always wins ({mode} mode)").green().bold()
                );
                println!(
                    "   Worst case: {} guesses | {} nodes | {} evaluations",
                    tree.depth(),
                    tree.node_count(),
                    report.evaluations
                );
                if verbose {
                    println!("\n{}", tree_outline(tree, 3));
                }
            }
            None => {
                println!(
                    "\n{}",
                    format!("❌ {start} cannot guarantee a solve").red().bold()
                );
                println!("   {} evaluations", report.evaluations);
            }
        }
    } else {
        let solved = summary.solved().count();
        println!(
            "\n{} of {} starting words always win",
            solved.to_string().bright_green().bold(),
            summary.reports.len()
        );
        if verbose {
            for report in summary.solved() {
                let depth = report.outcome.tree().map_or(0, |t| t.depth());
                println!("   {} (worst case {depth})", report.start.text().to_uppercase());
            }
        }
    }

    println!(
        "\nSearch time: {:.2}s | Write time: {:.2}s | Output: {}",
        summary.search_time.as_secs_f64(),
        summary.write_time.as_secs_f64(),
        summary.output.display()
    );
}

/// Print the result of a precompute run
pub fn print_precompute_summary(summary: &PrecomputeSummary, output: &std::path::Path) {
    println!(
        "{} {} patterns for {} words",
        "Precomputed".green().bold(),
        summary.entries,
        summary.words
    );
    println!(
        "Build time: {:.2}s | Write time: {:.2}s | Output: {}",
        summary.build_time.as_secs_f64(),
        summary.write_time.as_secs_f64(),
        output.display()
    );
}

/// Print one answer's path through a tree
pub fn print_replay(game: &Replay) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {}",
        game.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, pattern)) in game.steps.iter().enumerate() {
        println!(
            "Turn {}: {} {}",
            i + 1,
            guess.text().to_uppercase(),
            pattern.to_emoji()
        );
    }
    println!(
        "\n{}",
        format!("✅ Solved in {} guesses!", game.attempts())
            .green()
            .bold()
    );
}

/// Print the statistics of replaying every answer
pub fn print_replay_statistics(stats: &ReplayStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "REPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.total_words);
    println!(
        "   Solved:           {}",
        stats.solved().to_string().green()
    );
    println!(
        "   Failed:           {}",
        if stats.failures.is_empty() {
            "0".green()
        } else {
            stats.failures.len().to_string().red()
        }
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    print_distribution(&stats.guess_distribution, stats.total_words);

    let worst = stats.worst_words(5);
    if !worst.is_empty() {
        println!("\n🐢 {}", "Hardest answers:".bright_cyan().bold());
        for (word, guesses) in worst {
            println!("   {} ({guesses})", word.text().to_uppercase());
        }
    }

    print_failures(stats.failures.iter().map(|(w, e)| (w.text(), e.to_string())));
}

/// Print the outcome of verifying a tree
pub fn print_verify_report(report: &VerifyReport, hard_mode: bool) {
    let rules = if hard_mode { "hard mode" } else { "standard rules" };
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({rules}) ",
        "TREE VERIFICATION".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.is_sound() {
        println!(
            "\n{}",
            format!("✅ All {} answers solved", report.checked).green().bold()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "❌ {} of {} answers not solved",
                report.failures.len(),
                report.checked
            )
            .red()
            .bold()
        );
    }
    println!("   Average guesses:  {:.3}", report.average_attempts());
    if let Some(worst) = report.worst_case() {
        println!("   Worst case:       {worst}");
    }

    print_distribution(&report.distribution, report.checked);
    print_failures(report.failures.iter().map(|(w, e)| (w.text(), e.to_string())));
}

fn print_distribution(distribution: &BTreeMap<usize, usize>, total: usize) {
    if distribution.is_empty() || total == 0 {
        return;
    }
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in distribution {
        let pct = (count as f64 / total as f64) * 100.0;
        let bar = share_bar(count as f64 / total as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

fn print_failures<'a>(failures: impl Iterator<Item = (&'a str, String)>) {
    let mut failures = failures.peekable();
    if failures.peek().is_none() {
        return;
    }
    println!("\n⚠️  {}", "Failures:".red().bold());
    for (word, reason) in failures.take(20) {
        println!("   {}: {reason}", word.to_uppercase());
    }
}
