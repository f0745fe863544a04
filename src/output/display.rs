//! Terminal formatting for solve and analysis results

use colored::Colorize;

use crate::commands::AnalysisReport;
use crate::solver::{RejectReason, SolveOutcome};

/// Print a solve session, one line per guess
pub fn print_solve_outcome(outcome: &SolveOutcome, target: &str, verbose: bool) {
    match outcome {
        SolveOutcome::Rejected {
            reason: RejectReason::NotRecognized,
            ..
        } => {
            println!("{} '{}' is not in the dictionary", "✗".red(), target.bold());
            return;
        }
        SolveOutcome::Rejected { reason, .. } => {
            println!("{} solve failed: {reason}", "✗".red());
            return;
        }
        SolveOutcome::Solved { .. } | SolveOutcome::Exhausted { .. } => {}
    }

    for (turn, record) in outcome.history().iter().enumerate() {
        let word = record.word.as_str().to_uppercase();
        if verbose {
            println!(
                "  {}. {} {}  {:.2} bits, {} → {} candidates",
                turn + 1,
                word.bold(),
                record.feedback.to_emoji(),
                record.score,
                record.candidates_before,
                record.candidates_after,
            );
        } else {
            println!("  {}. {} {}", turn + 1, word.bold(), record.feedback.to_emoji());
        }
    }

    let turns = outcome.history().len();
    if outcome.is_solved() {
        println!(
            "\n{} solved '{}' in {turns} {}",
            "✓".green(),
            target.bold(),
            if turns == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!(
            "\n{} guess budget spent without finding '{}'",
            "✗".red(),
            target.bold()
        );
    }
}

/// Print an analysis report for one word
pub fn print_analysis(report: &AnalysisReport) {
    let word = report.word.as_str().to_uppercase();
    println!("\nAnalysis of {}", word.bold());
    println!(
        "  Entropy:            {} bits",
        format!("{:.3}", report.metrics.entropy).bright_yellow()
    );
    println!(
        "  Expected remaining: {:.1} candidates",
        report.metrics.expected_remaining
    );
    println!(
        "  Worst case:         {} candidates",
        report.metrics.worst_bucket
    );
    println!(
        "  Rank:               {} of {}",
        report.rank.to_string().bold(),
        report.total_guesses
    );
    println!(
        "  Possible answer:    {}",
        if report.is_answer {
            "yes".green()
        } else {
            "no".red()
        }
    );
}
