//! Decision tree search
//!
//! Depth-first, first-success search for a guessing strategy that solves every
//! candidate answer within the attempt budget. Each recursive frame owns its
//! own `PathState`, so a failed attempt never leaks into its siblings.

use super::config::SearchConfig;
use super::partition::{Bucket, BucketOrder, partition};
use super::path::PathState;
use super::strategy::{CandidatePool, Mode, PoolContext, SearchPolicy};
use crate::core::{Comparator, Lexicon, Word, WordId};
use crate::tree::DecisionNode;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info_span};

/// Errors raised before a search can start
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("starting word '{0}' is not in the vocabulary")]
    UnknownStart(String),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result of evaluating one guess against a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A strategy exists; the node is its root
    Solved(DecisionNode),
    /// No strategy within the budget starts with this guess
    Failed,
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The strategy tree, if one was found
    #[must_use]
    pub const fn tree(&self) -> Option<&DecisionNode> {
        match self {
            Self::Solved(node) => Some(node),
            Self::Failed => None,
        }
    }

    #[must_use]
    pub fn into_tree(self) -> Option<DecisionNode> {
        match self {
            Self::Solved(node) => Some(node),
            Self::Failed => None,
        }
    }
}

/// Outcome of a search from one starting word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub start: Word,
    pub outcome: Outcome,
    /// Mode of the pass that found the strategy
    pub mode: Option<Mode>,
    /// Guesses evaluated across all passes
    pub evaluations: u64,
}

impl SearchReport {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// Search driver over a fixed lexicon and configuration
pub struct SearchEngine<'a> {
    comparator: Comparator<'a>,
    config: SearchConfig,
    passes: Vec<SearchPolicy>,
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub fn new(comparator: Comparator<'a>, config: SearchConfig) -> Self {
        let passes = config.passes();
        Self {
            comparator,
            config,
            passes,
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.comparator.lexicon()
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a strategy that opens with `start`
    ///
    /// # Errors
    /// Returns `SearchError::UnknownStart` if `start` is not in the vocabulary.
    pub fn solve(&self, start: &Word) -> Result<SearchReport, SearchError> {
        let id = self
            .lexicon()
            .require_guessable(start)
            .map_err(|_| SearchError::UnknownStart(start.text().to_string()))?;
        Ok(self.solve_id(id))
    }

    /// Search from an interned starting word, running passes until one solves
    #[must_use]
    pub fn solve_id(&self, start: WordId) -> SearchReport {
        let lexicon = self.lexicon();
        let word = lexicon.word(start);
        let mut evaluations = 0;

        for policy in &self.passes {
            let span = info_span!("pass", start = %word, mode = %policy.mode);
            let _guard = span.enter();

            let mut search = Search {
                comparator: self.comparator,
                policy,
                max_attempts: self.config.max_attempts,
                bucket_order: self.config.bucket_order,
                evaluations: 0,
            };
            let outcome = search.evaluate(start, lexicon.answers(), &PathState::new());
            evaluations += search.evaluations;
            debug!(
                evaluations = search.evaluations,
                solved = outcome.is_solved(),
                "pass finished"
            );

            if outcome.is_solved() {
                return SearchReport {
                    start: word.clone(),
                    outcome,
                    mode: Some(policy.mode),
                    evaluations,
                };
            }
        }

        SearchReport {
            start: word.clone(),
            outcome: Outcome::Failed,
            mode: None,
            evaluations,
        }
    }
}

/// State of one pass
struct Search<'a, 'p> {
    comparator: Comparator<'a>,
    policy: &'p SearchPolicy,
    max_attempts: usize,
    bucket_order: BucketOrder,
    evaluations: u64,
}

impl Search<'_, '_> {
    /// Play `guess` against `candidates` and resolve every bucket it leaves open
    fn evaluate(&mut self, guess: WordId, candidates: &[WordId], parent: &PathState) -> Outcome {
        self.evaluations += 1;

        let lexicon = self.comparator.lexicon();
        let path = parent.with_guess(guess);
        let split = partition(&self.comparator, guess, candidates);

        if split.is_degenerate(candidates.len()) {
            return Outcome::Failed;
        }

        let played = lexicon.word(guess);
        let mut node = DecisionNode::new(played.clone());

        for bucket in split.unresolved(self.bucket_order) {
            if path.depth() >= self.max_attempts {
                return Outcome::Failed;
            }

            let branch = path.narrowed(played, bucket.pattern);
            match self.resolve(bucket, &branch) {
                Some(child) => node.insert(bucket.pattern, child),
                None => return Outcome::Failed,
            }
        }

        Outcome::Solved(node)
    }

    /// First follow-up guess that solves the whole bucket
    fn resolve(&mut self, bucket: &Bucket, branch: &PathState) -> Option<DecisionNode> {
        let lexicon = self.comparator.lexicon();
        let ctx = PoolContext {
            lexicon,
            bucket: &bucket.words,
            path: branch,
        };

        // Only the answer itself avoids a degenerate split of a singleton
        if let [only] = bucket.words.as_slice() {
            let admitted = self.policy.tiers.iter().any(|tier| tier.admits(&ctx, *only));
            return admitted.then(|| DecisionNode::leaf(lexicon.word(*only).clone()));
        }

        // With one guess left at most one of several words can be hit
        if self.max_attempts.saturating_sub(branch.depth()) < 2 {
            return None;
        }

        let mut tried = FxHashSet::default();
        let policy = self.policy;
        for tier in &policy.tiers {
            for candidate in tier.candidates(&ctx) {
                if !tried.insert(candidate) {
                    continue;
                }
                if let Outcome::Solved(child) = self.evaluate(candidate, &bucket.words, branch) {
                    return Some(child);
                }
            }
        }
        None
    }
}
