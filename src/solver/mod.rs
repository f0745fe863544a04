//! Solving pipeline: constraints, filtering, ranking and the solve driver

pub mod constraint;
pub mod driver;
pub mod entropy;
pub mod filter;
pub mod frequency;
pub mod recommend;

pub use constraint::{Constraint, InvalidFeedback};
pub use driver::{
    DEFAULT_MAX_GUESSES, GuessRecord, RejectReason, SolveConfig, SolveOutcome, solve,
};
pub use filter::{CandidateSet, filter_candidates};
pub use recommend::{GuessPool, Recommender, Suggestion};
