//! Validated puzzle words
//!
//! Every vocabulary and answer entry is five lowercase ASCII letters. Letter
//! counts are cached at construction since feedback and constraint checks
//! consult them on every comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length shared by every vocabulary and answer entry
pub const WORD_LENGTH: usize = 5;

/// Size of the letter alphabet (`a`..=`z`)
pub const ALPHABET_SIZE: usize = 26;

/// A five-letter word, normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    counts: [u8; ALPHABET_SIZE],
}

/// Why a string was rejected as a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Character count after trimming
    WrongLength(usize),
    /// First character outside `a`..=`z` (after lowercasing)
    InvalidLetter { position: usize, found: char },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "expected {WORD_LENGTH} letters, found {len}")
            }
            Self::InvalidLetter { position, found } => {
                write!(f, "'{found}' at position {} is not a letter a-z", position + 1)
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Alphabet slot of a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl Word {
    /// Validate and normalize a word
    ///
    /// Surrounding whitespace is ignored and uppercase letters are folded.
    ///
    /// # Errors
    /// `WordError::WrongLength` unless exactly five characters remain, and
    /// `WordError::InvalidLetter` for the first character outside `a`..=`z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_prover::core::{Word, WordError};
    ///
    /// assert_eq!(Word::new(" Trace ").unwrap().text(), "trace");
    /// assert_eq!(Word::new("trac"), Err(WordError::WrongLength(4)));
    /// assert!(Word::new("tr4ce").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_lowercase();

        if let Some((position, found)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            let len = text.chars().count();
            if len != WORD_LENGTH {
                return Err(WordError::WrongLength(len));
            }
            return Err(WordError::InvalidLetter { position, found });
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::WrongLength(text.len()))?;

        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &letters {
            counts[letter_index(letter)] += 1;
        }

        Ok(Self {
            text,
            letters,
            counts,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// If `position >= WORD_LENGTH`.
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Occurrences of `letter` in the word
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: u8) -> u8 {
        self.counts[letter_index(letter)]
    }

    /// Per-letter occurrence counts, indexed by `letter_index`
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
