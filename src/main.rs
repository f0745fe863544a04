//! Wordle Oracle - CLI
//!
//! Entropy-driven Wordle recommendation engine with solve, analysis,
//! regression, and worker-service modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use wordle_oracle::{
    commands::{RegressionConfig, analyze_word, print_regression_stats, run_regression, run_serve},
    core::Word,
    dictionary::Dictionary,
    output::{print_analysis, print_solve_outcome},
    solver::{GuessPool, SolveConfig, solve},
};

#[derive(Parser)]
#[command(
    name = "wordle_oracle",
    about = "Wordle recommendation engine ranking guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or '<guesses.txt>,<answers.txt>'
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Rank by letter frequency instead of entropy
        #[arg(short, long)]
        easy: bool,

        /// Skip solving and return the target directly
        #[arg(long)]
        cheat: bool,

        /// Guess budget before giving up
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,

        /// Restrict guesses to remaining candidates
        #[arg(long)]
        candidates_only: bool,

        /// Play these words first, before consulting the recommender
        #[arg(short, long)]
        opener: Vec<String>,

        /// Show scores and candidate counts per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Test the solver on every possible answer
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Override first guess (default: computed once from the full list)
        #[arg(short, long)]
        opener: Option<String>,

        /// Rank by letter frequency instead of entropy
        #[arg(short, long)]
        easy: bool,

        /// Keep dictionary order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
    },

    /// Answer solve requests line by line over stdin/stdout
    Serve {
        /// Rank by letter frequency instead of entropy
        #[arg(short, long)]
        easy: bool,

        /// Skip solving and return each target directly
        #[arg(long)]
        cheat: bool,
    },
}

/// Load the dictionary named by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    if wordlist == "embedded" {
        return Dictionary::embedded().context("embedded word lists are malformed");
    }
    let (guesses, answers) = wordlist
        .split_once(',')
        .ok_or_else(|| anyhow!("expected 'embedded' or '<guesses.txt>,<answers.txt>'"))?;
    Dictionary::from_files(guesses, answers)
        .with_context(|| format!("failed to load word lists from '{wordlist}'"))
}

fn parse_openers(openers: &[String], dict: &Dictionary) -> Result<Vec<Word>> {
    openers
        .iter()
        .map(|text| {
            let word = Word::parse(text).map_err(|e| anyhow!("invalid opener '{text}': {e}"))?;
            if dict.contains_guess(word) {
                Ok(word)
            } else {
                Err(anyhow!("opener '{text}' is not in the guess dictionary"))
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dict = load_dictionary(&cli.wordlist)?;

    match cli.command {
        Commands::Solve {
            word,
            easy,
            cheat,
            max_guesses,
            candidates_only,
            opener,
            verbose,
        } => {
            let config = SolveConfig {
                hard_mode: !easy,
                be_cheaty: cheat,
                max_guesses,
                pool: if candidates_only {
                    GuessPool::CandidatesOnly
                } else {
                    GuessPool::Full
                },
                forced_openers: parse_openers(&opener, &dict)?,
            };
            let outcome = solve(&dict, &config, &word);
            print_solve_outcome(&outcome, &word, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let report = analyze_word(&dict, &word).map_err(|e| anyhow!(e))?;
            print_analysis(&report);
            Ok(())
        }
        Commands::TestAll {
            limit,
            opener,
            easy,
            no_shuffle,
        } => {
            let opener = opener
                .as_deref()
                .map(|text| {
                    Word::parse(text).map_err(|e| anyhow!("invalid opener '{text}': {e}"))
                })
                .transpose()?;
            let config = RegressionConfig {
                limit,
                opener,
                easy_mode: easy,
                no_shuffle,
            };
            let stats = run_regression(&dict, &config);
            print_regression_stats(&stats);
            Ok(())
        }
        Commands::Serve { easy, cheat } => run_serve(dict, !easy, cheat).map_err(|e| anyhow!(e)),
    }
}
