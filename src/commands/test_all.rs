//! Whole-dictionary regression run
//!
//! Solves every answer word and reports pass rate within the guess budget,
//! average guesses and the guess distribution. The pass rate is the
//! regression baseline for solver changes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::solver::{GuessPool, Recommender, SolveConfig, SolveOutcome, solve};

/// Options for a regression run
#[derive(Debug, Clone, Default)]
pub struct RegressionConfig {
    /// Test only the first N words (after shuffling, if enabled)
    pub limit: Option<usize>,
    /// Fixed first guess; computed once from the full candidate set when
    /// absent
    pub opener: Option<Word>,
    /// Use the letter-frequency heuristic instead of entropy ranking
    pub easy_mode: bool,
    /// Keep dictionary order instead of shuffling the test words
    pub no_shuffle: bool,
}

/// Aggregated results of a regression run
#[derive(Debug)]
pub struct RegressionStats {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub total_time: Duration,
    pub opener: Word,
    pub worst_words: Vec<(String, usize)>,
}

impl RegressionStats {
    /// Share of words solved within the budget
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64
    }
}

/// Solve every answer word and collect statistics
///
/// # Panics
/// Panics if the dictionary has no answers to pick an opener from.
#[must_use]
pub fn run_regression(dict: &Dictionary, config: &RegressionConfig) -> RegressionStats {
    let opener = config.opener.unwrap_or_else(|| {
        // On the untouched candidate set the best guess is the same for
        // every target, so compute it once instead of per word.
        let recommender = Recommender {
            hard_mode: !config.easy_mode,
            be_cheaty: false,
            pool: GuessPool::Full,
        };
        recommender
            .recommend(dict, dict.all_answers(), None)
            .first()
            .expect("non-empty answer list")
            .word
    });

    let mut test_words: Vec<Word> = dict.all_answers().to_vec();
    if !config.no_shuffle {
        test_words.shuffle(&mut rand::rng());
    }
    if let Some(limit) = config.limit {
        test_words.truncate(limit);
    }

    let solve_config = SolveConfig {
        hard_mode: !config.easy_mode,
        forced_openers: vec![opener],
        ..SolveConfig::default()
    };

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0usize;
    let mut total_guesses = 0usize;
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut worst_words: Vec<(String, usize)> = Vec::new();

    for (idx, target) in test_words.iter().enumerate() {
        let outcome = solve(dict, &solve_config, target.as_str());
        let guesses = outcome.history().len();

        match outcome {
            SolveOutcome::Solved { .. } => {
                solved += 1;
                total_guesses += guesses;
                *guess_distribution.entry(guesses).or_insert(0) += 1;
                if guesses >= 5 {
                    worst_words.push((target.as_str().to_string(), guesses));
                }
            }
            SolveOutcome::Exhausted { .. } => {
                worst_words.push((target.as_str().to_string(), guesses));
            }
            SolveOutcome::Rejected { reason, .. } => {
                // A valid answer can only be rejected by a solver bug
                pb.abandon_with_message(format!("rejected {target}: {reason}"));
                panic!("regression run rejected valid answer {target}: {reason}");
            }
        }

        if idx % 10 == 0 && solved > 0 {
            let avg = total_guesses as f64 / solved as f64;
            pb.set_message(format!("avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("done");

    worst_words.sort_by_key(|&(_, guesses)| std::cmp::Reverse(guesses));
    worst_words.truncate(10);

    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    RegressionStats {
        total_words: test_words.len(),
        solved,
        failed: test_words.len() - solved,
        guess_distribution,
        average_guesses,
        total_time: start.elapsed(),
        opener,
        worst_words,
    }
}

/// Print regression statistics
pub fn print_regression_stats(stats: &RegressionStats) {
    println!("\n{}", "═".repeat(60));
    println!(" Regression Results ");
    println!("{}", "═".repeat(60));

    println!("\n{}", "Overall".bright_cyan().bold());
    println!("  Opener:          {}", stats.opener.as_str().bold());
    println!("  Words tested:    {}", stats.total_words);
    println!(
        "  Solved:          {} {}",
        stats.solved,
        format!("({:.1}%)", stats.pass_rate() * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed:          {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses: {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Total time:      {:.2}s", stats.total_time.as_secs_f64());

    println!("\n{}", "Guess distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=6 {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let bar_len = if max_count > 0 { count * 40 / max_count } else { 0 };
        println!("  {guesses}: {:<40} {count}", "█".repeat(bar_len));
    }

    if !stats.worst_words.is_empty() {
        println!("\n{}", "Hardest words".bright_cyan().bold());
        for (word, guesses) in &stats.worst_words {
            println!("  {word} ({guesses} guesses)");
        }
    }
}
