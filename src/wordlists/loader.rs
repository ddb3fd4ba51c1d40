//! Word list loading utilities
//!
//! Flat files with one word per line. Blank lines are skipped, case is folded,
//! and any other malformed entry rejects the whole list.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: invalid word '{text}': {source}")]
    InvalidWord {
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::InvalidWord` for the first entry that is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_prover::wordlists::load_words;
///
/// let words = load_words("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content)?;
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse a newline-separated word list
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` with the 1-based line number of the first
/// malformed entry.
///
/// # Examples
/// ```
/// use wordle_prover::wordlists::parse_words;
///
/// let words = parse_words("crane\n\nSLATE\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
///
/// assert!(parse_words("crane\ncranes\n").is_err());
/// ```
pub fn parse_words(content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            Word::new(line).map_err(|source| LoadError::InvalidWord {
                line: idx + 1,
                text: line.trim().to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_folds_case() {
        let words = parse_words("Crane\n  slate \nIRATE\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let words = parse_words("\ncrane\n\n\nslate\n\n").unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn invalid_entry_reports_line() {
        let err = parse_words("crane\n\ntoolong\nslate\n").unwrap_err();
        match err {
            LoadError::InvalidWord { line, text, source } => {
                assert_eq!(line, 3);
                assert_eq!(text, "toolong");
                assert_eq!(source, WordError::WrongLength(7));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_letters_are_rejected() {
        assert!(matches!(
            parse_words("cr4ne\n"),
            Err(LoadError::InvalidWord { line: 1, .. })
        ));
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(parse_words("").unwrap().is_empty());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("wordle_prover_words_{}.txt", std::process::id()));
        fs::write(&path, "crane\ntrace\n").unwrap();

        let words = load_words(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_words("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
