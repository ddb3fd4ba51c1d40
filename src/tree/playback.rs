//! Walking a decision tree against feedback
//!
//! `TreeCursor` follows a tree one feedback pattern at a time (used by the
//! interactive commands); `replay` and `verify_tree` drive it with known
//! answers.

use super::node::DecisionNode;
use crate::core::{ConstraintState, Pattern, Word};
use rayon::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

/// Ways a walk through a tree can go wrong
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("no continuation after '{guess}' for feedback {pattern}")]
    NoBranch { guess: String, pattern: Pattern },
    #[error("'{answer}' not solved within {max_attempts} attempts")]
    AttemptsExhausted { answer: String, max_attempts: usize },
    #[error("guess {attempt} '{guess}' ignores earlier feedback")]
    HardModeViolation { guess: String, attempt: usize },
    #[error("the game is already solved")]
    Finished,
}

/// Result of feeding one pattern to a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'t> {
    /// Play this node's guess next
    Next(&'t DecisionNode),
    /// The last guess was the answer
    Solved { attempts: usize },
}

/// Position inside a decision tree
#[derive(Debug, Clone)]
pub struct TreeCursor<'t> {
    root: &'t DecisionNode,
    current: &'t DecisionNode,
    history: Vec<(&'t DecisionNode, Pattern)>,
    solved: bool,
}

impl<'t> TreeCursor<'t> {
    #[must_use]
    pub const fn new(root: &'t DecisionNode) -> Self {
        Self {
            root,
            current: root,
            history: Vec::new(),
            solved: false,
        }
    }

    /// Node whose guess should be played now
    #[must_use]
    pub const fn current(&self) -> &'t DecisionNode {
        self.current
    }

    /// 1-based number of the guess about to be played
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.history.len() + 1
    }

    /// Guesses played so far with the feedback each received
    pub fn history(&self) -> impl Iterator<Item = (&'t Word, Pattern)> + '_ {
        self.history.iter().map(|(node, pattern)| (&node.guess, *pattern))
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Feed the feedback received for the current guess
    ///
    /// # Errors
    /// Returns `PlaybackError::NoBranch` if the tree has no continuation for
    /// the pattern, or `PlaybackError::Finished` after the game was solved.
    pub fn advance(&mut self, pattern: Pattern) -> Result<Step<'t>, PlaybackError> {
        if self.solved {
            return Err(PlaybackError::Finished);
        }
        if pattern.is_perfect() {
            self.history.push((self.current, pattern));
            self.solved = true;
            return Ok(Step::Solved {
                attempts: self.history.len(),
            });
        }

        let next = self
            .current
            .child(pattern)
            .ok_or_else(|| PlaybackError::NoBranch {
                guess: self.current.guess.to_string(),
                pattern,
            })?;
        self.history.push((self.current, pattern));
        self.current = next;
        Ok(Step::Next(next))
    }

    /// Take back the last feedback; false at the root
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((node, _)) => {
                self.current = node;
                self.solved = false;
                true
            }
            None => false,
        }
    }

    /// Return to the root
    pub fn reset(&mut self) {
        *self = Self::new(self.root);
    }
}

/// One answer played through a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub answer: Word,
    pub steps: Vec<(Word, Pattern)>,
}

impl Replay {
    /// Guesses needed, the solving guess included
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }
}

/// Play `answer` through `tree`
///
/// # Errors
/// Returns `PlaybackError` if the tree has no branch for some feedback or the
/// answer is not reached within `max_attempts`.
pub fn replay(
    tree: &DecisionNode,
    answer: &Word,
    max_attempts: usize,
) -> Result<Replay, PlaybackError> {
    play_through(tree, answer, max_attempts, false)
}

fn play_through(
    tree: &DecisionNode,
    answer: &Word,
    max_attempts: usize,
    hard_mode: bool,
) -> Result<Replay, PlaybackError> {
    let mut cursor = TreeCursor::new(tree);
    let mut constraints = ConstraintState::new();
    let mut steps = Vec::new();

    loop {
        if steps.len() >= max_attempts {
            return Err(PlaybackError::AttemptsExhausted {
                answer: answer.to_string(),
                max_attempts,
            });
        }

        let guess = &cursor.current().guess;
        if hard_mode && !constraints.permits(guess) {
            return Err(PlaybackError::HardModeViolation {
                guess: guess.to_string(),
                attempt: cursor.attempt(),
            });
        }

        let pattern = Pattern::compare(answer, guess);
        steps.push((guess.clone(), pattern));
        constraints.absorb(guess, pattern);

        if let Step::Solved { .. } = cursor.advance(pattern)? {
            return Ok(Replay {
                answer: answer.clone(),
                steps,
            });
        }
    }
}

/// Summary of playing every answer through a tree
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checked: usize,
    /// Answers solved per number of attempts
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<(Word, PlaybackError)>,
}

impl VerifyReport {
    /// True when every answer was solved
    #[must_use]
    pub fn is_sound(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.distribution.values().sum()
    }

    /// Mean attempts over solved answers
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let total: usize = self.distribution.iter().map(|(n, count)| n * count).sum();
        total as f64 / solved as f64
    }

    /// Most attempts any solved answer needed
    #[must_use]
    pub fn worst_case(&self) -> Option<usize> {
        self.distribution.keys().next_back().copied()
    }
}

/// Play every answer through `tree`, optionally enforcing hard-mode rules
#[must_use]
pub fn verify_tree(
    tree: &DecisionNode,
    answers: &[Word],
    max_attempts: usize,
    hard_mode: bool,
) -> VerifyReport {
    let results: Vec<Result<Replay, (Word, PlaybackError)>> = answers
        .par_iter()
        .map(|answer| {
            play_through(tree, answer, max_attempts, hard_mode).map_err(|e| (answer.clone(), e))
        })
        .collect();

    let mut report = VerifyReport {
        checked: answers.len(),
        ..VerifyReport::default()
    };
    for result in results {
        match result {
            Ok(game) => *report.distribution.entry(game.attempts()).or_insert(0) += 1,
            Err(failure) => report.failures.push(failure),
        }
    }
    report
}
