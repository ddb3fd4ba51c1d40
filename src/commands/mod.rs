//! Command implementations

pub mod inputs;
pub mod precompute;
pub mod replay;
pub mod simple;
pub mod solve;

pub use inputs::{WordFiles, load_answers, load_lexicon, load_table, load_tree};
pub use precompute::{PrecomputeSummary, run_precompute};
pub use replay::{ReplayStatistics, replay_all, replay_answer, run_verify};
pub use simple::run_simple;
pub use solve::{SolveOptions, SolveSummary, TableSource, run_solve};
