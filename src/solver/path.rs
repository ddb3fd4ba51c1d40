//! Per-branch search state

use crate::core::{ConstraintState, Pattern, Word, WordId};

/// Guesses made so far on one branch plus the constraints they revealed
///
/// Every recursive frame derives its own value with `with_guess` or
/// `narrowed`; nothing is shared or undone across siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathState {
    guesses: Vec<WordId>,
    constraints: ConstraintState,
}

impl PathState {
    /// Empty path at the start of a game
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of guesses made on this path
    #[must_use]
    pub fn depth(&self) -> usize {
        self.guesses.len()
    }

    /// Guesses in the order they were made
    #[must_use]
    pub fn guesses(&self) -> &[WordId] {
        &self.guesses
    }

    /// Whether a word was already guessed on this path
    #[must_use]
    pub fn has_used(&self, id: WordId) -> bool {
        self.guesses.contains(&id)
    }

    /// Constraints accumulated from the feedback on this path
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// A copy extended by one more guess
    #[must_use]
    pub fn with_guess(&self, id: WordId) -> Self {
        let mut next = self.clone();
        next.guesses.push(id);
        next
    }

    /// A copy that has absorbed the feedback of `guess`
    #[must_use]
    pub fn narrowed(&self, guess: &Word, pattern: Pattern) -> Self {
        Self {
            guesses: self.guesses.clone(),
            constraints: self.constraints.with(guess, pattern),
        }
    }
}
