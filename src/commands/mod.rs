//! Command implementations

pub mod analyze;
pub mod serve;
pub mod test_all;

pub use analyze::{AnalysisReport, analyze_word};
pub use serve::run_serve;
pub use test_all::{RegressionConfig, RegressionStats, print_regression_stats, run_regression};
