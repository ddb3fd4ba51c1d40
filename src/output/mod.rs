//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_precompute_summary, print_replay, print_replay_statistics, print_solve_summary,
    print_verify_report,
};
