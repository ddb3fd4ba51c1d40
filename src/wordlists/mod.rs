//! Word list files
//!
//! Vocabulary and answer lists are read from flat files at startup.

pub mod loader;

pub use loader::{LoadError, load_words, parse_words};
