//! Wordle Strategy Prover
//!
//! Decides whether a starting guess can always solve Wordle within the attempt
//! budget, and builds the winning decision tree when it can.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_prover::core::{Comparator, Lexicon, Word};
//! use wordle_prover::solver::{SearchConfig, SearchEngine};
//!
//! let words = ["crane", "trace", "track", "brace", "trick"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let lexicon = Lexicon::new(words, None).unwrap();
//!
//! let engine = SearchEngine::new(Comparator::direct(&lexicon), SearchConfig::default());
//! let report = engine.solve(&Word::new("crane").unwrap()).unwrap();
//!
//! let tree = report.outcome.tree().unwrap();
//! assert!(tree.depth() <= 6);
//! ```

// Core domain types
pub mod core;

// Decision tree search
pub mod solver;

// Decision trees and playback
pub mod tree;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
