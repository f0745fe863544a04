//! Wordle Oracle
//!
//! A Wordle recommendation engine: given feedback from past guesses it narrows
//! the answer pool and ranks the next guess by expected information gain.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_oracle::core::{Feedback, Word};
//!
//! let guess = Word::parse("crane").unwrap();
//! let target = Word::parse("slate").unwrap();
//!
//! let feedback = Feedback::evaluate(guess, target);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Background worker service
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
