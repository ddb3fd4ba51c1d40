//! Grouping candidate answers by the feedback a guess would produce

use crate::core::{Comparator, Pattern, WordId};
use rustc_hash::FxHashMap;

/// Words that share one feedback pattern for a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub pattern: Pattern,
    pub words: Vec<WordId>,
}

impl Bucket {
    /// True for the solved (all-hit) bucket
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.pattern.is_perfect()
    }
}

/// Order in which non-terminal buckets are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketOrder {
    /// Ascending pattern value
    #[default]
    Pattern,
    /// Largest bucket first, ties by pattern value
    LargestFirst,
}

/// A candidate set split by feedback pattern
///
/// Buckets are pairwise disjoint, never empty, and together hold exactly the
/// partitioned candidates. Words inside a bucket keep the candidate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    buckets: Vec<Bucket>,
}

/// Split `candidates` by the pattern each would show for `guess`
#[must_use]
pub fn partition(comparator: &Comparator<'_>, guess: WordId, candidates: &[WordId]) -> Partition {
    let mut groups: FxHashMap<Pattern, Vec<WordId>> = FxHashMap::default();

    for &answer in candidates {
        groups
            .entry(comparator.pattern(answer, guess))
            .or_default()
            .push(answer);
    }

    let mut buckets: Vec<Bucket> = groups
        .into_iter()
        .map(|(pattern, words)| Bucket { pattern, words })
        .collect();
    buckets.sort_unstable_by_key(|bucket| bucket.pattern);

    Partition { buckets }
}

impl Partition {
    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when nothing was partitioned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// All buckets in ascending pattern order
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Bucket for a given pattern, if any candidate produced it
    #[must_use]
    pub fn bucket(&self, pattern: Pattern) -> Option<&Bucket> {
        self.buckets
            .binary_search_by_key(&pattern, |bucket| bucket.pattern)
            .ok()
            .map(|i| &self.buckets[i])
    }

    /// Whether the guess was one of the candidates
    #[must_use]
    pub fn has_terminal(&self) -> bool {
        self.buckets.iter().any(Bucket::is_terminal)
    }

    /// Buckets that still need a follow-up guess, in the requested order
    #[must_use]
    pub fn unresolved(&self, order: BucketOrder) -> Vec<&Bucket> {
        let mut open: Vec<&Bucket> = self.buckets.iter().filter(|b| !b.is_terminal()).collect();
        if order == BucketOrder::LargestFirst {
            open.sort_by_key(|bucket| std::cmp::Reverse(bucket.words.len()));
        }
        open
    }

    /// True when the guess reveals nothing about the candidate set
    ///
    /// A single non-terminal bucket holding the whole set can never reduce
    /// ambiguity, so the guess is rejected without further search.
    #[must_use]
    pub fn is_degenerate(&self, candidate_count: usize) -> bool {
        match self.buckets.as_slice() {
            [only] => !only.is_terminal() && only.words.len() >= candidate_count,
            _ => false,
        }
    }
}
