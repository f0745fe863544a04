//! Terminal output helpers

mod display;

pub use display::{print_analysis, print_solve_outcome};
