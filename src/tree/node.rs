//! Decision tree nodes and the solutions file

use crate::core::{Pattern, Word};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors raised while reading, writing or checking decision trees
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("node '{guess}' has a continuation for the solved pattern")]
    TerminalBranch { guess: String },
    #[error("node '{guess}' has no continuation listed for pattern {pattern}")]
    EmptyBranch { guess: String, pattern: Pattern },
}

/// One guess of a strategy and the continuation for each feedback it can get
///
/// Serialized as `{ "guess": "crane", "nextGuesses": { "yggbg": [ ... ] } }`.
/// The solved pattern never appears as a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionNode {
    pub guess: Word,
    #[serde(default)]
    pub next_guesses: BTreeMap<Pattern, Vec<DecisionNode>>,
}

impl DecisionNode {
    /// Node with no continuations yet
    #[must_use]
    pub fn new(guess: Word) -> Self {
        Self {
            guess,
            next_guesses: BTreeMap::new(),
        }
    }

    /// A guess that is the answer itself
    #[must_use]
    pub fn leaf(guess: Word) -> Self {
        Self::new(guess)
    }

    /// Attach the continuation for a feedback pattern
    pub fn insert(&mut self, pattern: Pattern, child: Self) {
        self.next_guesses.entry(pattern).or_default().push(child);
    }

    /// First continuation listed for a pattern
    #[must_use]
    pub fn child(&self, pattern: Pattern) -> Option<&Self> {
        self.next_guesses.get(&pattern).and_then(|c| c.first())
    }

    /// True when no feedback needs a further guess
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.next_guesses.is_empty()
    }

    /// Guesses on the longest path through this node
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .next_guesses
            .values()
            .flatten()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in the subtree
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .next_guesses
            .values()
            .flatten()
            .map(Self::node_count)
            .sum::<usize>()
    }

    /// Check the structural rules of a decision tree
    ///
    /// # Errors
    /// Returns `TreeError` if a node continues the solved pattern or lists an
    /// empty continuation.
    pub fn validate(&self) -> Result<(), TreeError> {
        for (pattern, children) in &self.next_guesses {
            if pattern.is_perfect() {
                return Err(TreeError::TerminalBranch {
                    guess: self.guess.to_string(),
                });
            }
            if children.is_empty() {
                return Err(TreeError::EmptyBranch {
                    guess: self.guess.to_string(),
                    pattern: *pattern,
                });
            }
            children.iter().try_for_each(Self::validate)?;
        }
        Ok(())
    }
}

/// Write solved trees as a pretty-printed JSON array
///
/// # Errors
/// Returns `TreeError::Json` if writing fails.
pub fn write_solutions<'a, W, I>(writer: W, trees: I) -> Result<(), TreeError>
where
    W: Write,
    I: IntoIterator<Item = &'a DecisionNode>,
{
    let trees: Vec<&DecisionNode> = trees.into_iter().collect();
    serde_json::to_writer_pretty(writer, &trees)?;
    Ok(())
}

/// Read and validate a solutions file
///
/// Accepts either an array of trees or a single tree object.
///
/// # Errors
/// Returns `TreeError` for malformed JSON or a structurally invalid tree.
pub fn read_solutions<R: Read>(reader: R) -> Result<Vec<DecisionNode>, TreeError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Solutions {
        Many(Vec<DecisionNode>),
        One(DecisionNode),
    }

    let trees = match serde_json::from_reader(reader)? {
        Solutions::Many(trees) => trees,
        Solutions::One(tree) => vec![tree],
    };
    trees.iter().try_for_each(DecisionNode::validate)?;
    Ok(trees)
}
