//! Core domain types for Wordle
//!
//! Words, feedback patterns, hard-mode constraints, and the interned lexicon
//! with its optional precomputed comparison table.

mod constraints;
mod lexicon;
mod pattern;
mod table;
mod word;

pub use constraints::ConstraintState;
pub use lexicon::{CandidateOrder, Lexicon, LexiconError, WordId};
pub use pattern::{Pattern, Verdict};
pub use table::{Comparator, ComparisonTable, Coverage, TableError};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};
