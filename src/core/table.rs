//! Precomputed answer × guess feedback lookup
//!
//! Rows are indexed by answer id, columns by guess id. The table covers every
//! interned word in both directions so any lookup made during search hits.

use super::lexicon::{Lexicon, WordId};
use super::pattern::Pattern;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::time::Instant;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading or saving a comparison table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("comparison table has no entry for answer '{answer}' and guess '{guess}'")]
    MissingEntry { answer: String, guess: String },
    #[error("malformed comparison table: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// How gaps in a loaded table are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coverage {
    /// Missing pairs are computed with the comparator
    #[default]
    Fallback,
    /// Missing pairs are fatal
    Strict,
}

/// On-disk form: `{ "<answer>": { "<guess>": "<pattern>" } }`
type TableFile = BTreeMap<String, BTreeMap<String, Pattern>>;

/// Dense feedback table over a lexicon
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    rows: Vec<Vec<Pattern>>,
}

impl ComparisonTable {
    /// Compute every answer × guess pattern in parallel
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        let start = Instant::now();
        let words = lexicon.words();

        let rows = words
            .par_iter()
            .map(|answer| {
                words
                    .iter()
                    .map(|guess| Pattern::compare(answer, guess))
                    .collect()
            })
            .collect();

        info!(
            words = words.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built comparison table"
        );
        Self { rows }
    }

    /// Look up the pattern for an (answer, guess) pair
    #[inline]
    #[must_use]
    pub fn get(&self, answer: WordId, guess: WordId) -> Option<Pattern> {
        self.rows
            .get(answer.index())
            .and_then(|row| row.get(guess.index()))
            .copied()
    }

    /// Number of answer rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize the table as nested JSON keyed by word text
    ///
    /// # Errors
    /// Returns `TableError::Malformed` if writing fails.
    pub fn write_json<W: Write>(&self, lexicon: &Lexicon, writer: W) -> Result<(), TableError> {
        let words = lexicon.words();
        let file: TableFile = self
            .rows
            .iter()
            .zip(words)
            .map(|(row, answer)| {
                let guesses = row
                    .iter()
                    .zip(words)
                    .map(|(&pattern, guess)| (guess.text().to_string(), pattern))
                    .collect();
                (answer.text().to_string(), guesses)
            })
            .collect();
        serde_json::to_writer(writer, &file)?;
        Ok(())
    }

    /// Load a table written by `write_json` and align it to a lexicon
    ///
    /// Entries for words outside the lexicon are ignored.
    ///
    /// # Errors
    /// Returns `TableError::Malformed` for invalid JSON or patterns, and
    /// `TableError::MissingEntry` for a gap under `Coverage::Strict`.
    pub fn read_json<R: Read>(
        lexicon: &Lexicon,
        reader: R,
        coverage: Coverage,
    ) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_reader(reader)?;
        let words = lexicon.words();

        let rows = words
            .iter()
            .map(|answer| {
                let row = file.get(answer.text());
                words
                    .iter()
                    .map(|guess| match row.and_then(|r| r.get(guess.text())) {
                        Some(&pattern) => Ok(pattern),
                        None if coverage == Coverage::Fallback => {
                            Ok(Pattern::compare(answer, guess))
                        }
                        None => Err(TableError::MissingEntry {
                            answer: answer.text().to_string(),
                            guess: guess.text().to_string(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(words = words.len(), "loaded comparison table");
        Ok(Self { rows })
    }
}

/// Feedback source used by the search: table lookups with a direct fallback
#[derive(Debug, Clone, Copy)]
pub struct Comparator<'a> {
    lexicon: &'a Lexicon,
    table: Option<&'a ComparisonTable>,
}

impl<'a> Comparator<'a> {
    /// Compare words directly on every call
    #[must_use]
    pub const fn direct(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            table: None,
        }
    }

    /// Answer from a precomputed table when it has the pair
    #[must_use]
    pub const fn with_table(lexicon: &'a Lexicon, table: &'a ComparisonTable) -> Self {
        Self {
            lexicon,
            table: Some(table),
        }
    }

    /// The lexicon the ids refer to
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Feedback for `guess` played against hidden `answer`
    #[inline]
    #[must_use]
    pub fn pattern(&self, answer: WordId, guess: WordId) -> Pattern {
        self.table
            .and_then(|table| table.get(answer, guess))
            .unwrap_or_else(|| {
                Pattern::compare(self.lexicon.word(answer), self.lexicon.word(guess))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn lexicon(list: &[&str]) -> Lexicon {
        let words = list.iter().map(|w| Word::new(*w).unwrap()).collect();
        Lexicon::new(words, None).unwrap()
    }

    #[test]
    fn table_matches_direct_comparison() {
        let lexicon = lexicon(&["crane", "trace", "babes", "abbey"]);
        let table = ComparisonTable::build(&lexicon);
        let direct = Comparator::direct(&lexicon);
        let cached = Comparator::with_table(&lexicon, &table);

        for &answer in lexicon.vocabulary() {
            for &guess in lexicon.vocabulary() {
                assert_eq!(direct.pattern(answer, guess), cached.pattern(answer, guess));
            }
        }
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn json_round_trip_preserves_lookups() {
        let lexicon = lexicon(&["crane", "trace", "brace"]);
        let table = ComparisonTable::build(&lexicon);

        let mut buffer = Vec::new();
        table.write_json(&lexicon, &mut buffer).unwrap();
        let loaded = ComparisonTable::read_json(&lexicon, buffer.as_slice(), Coverage::Strict)
            .unwrap();

        let crane = lexicon.id_of("crane").unwrap();
        let trace = lexicon.id_of("trace").unwrap();
        assert_eq!(loaded.get(trace, crane), table.get(trace, crane));
        assert_eq!(loaded.get(trace, crane).unwrap().to_string(), "yggbg");
    }

    #[test]
    fn strict_coverage_rejects_gaps() {
        let lexicon = lexicon(&["crane", "trace"]);
        let partial = r#"{ "crane": { "crane": "ggggg", "trace": "bggyg" } }"#;

        let err = ComparisonTable::read_json(&lexicon, partial.as_bytes(), Coverage::Strict)
            .unwrap_err();
        assert!(matches!(err, TableError::MissingEntry { .. }));

        let filled =
            ComparisonTable::read_json(&lexicon, partial.as_bytes(), Coverage::Fallback).unwrap();
        let crane = lexicon.id_of("crane").unwrap();
        let trace = lexicon.id_of("trace").unwrap();
        assert_eq!(filled.get(trace, crane).unwrap().to_string(), "yggbg");
    }

    #[test]
    fn invalid_pattern_is_malformed() {
        let lexicon = lexicon(&["crane"]);
        let bad = r#"{ "crane": { "crane": "gggxg" } }"#;
        let err = ComparisonTable::read_json(&lexicon, bad.as_bytes(), Coverage::Fallback)
            .unwrap_err();
        assert!(matches!(err, TableError::Malformed(_)));
    }
}
