//! Candidate pools for follow-up guesses
//!
//! Defines the `CandidatePool` trait, the concrete pool tiers, and the ordered
//! tier lists (`SearchPolicy`) the engine walks for every unresolved bucket.

use super::path::PathState;
use crate::core::{Lexicon, WordId};
use std::fmt;
use std::str::FromStr;

/// What a pool may look at when proposing guesses for one bucket
pub struct PoolContext<'a> {
    pub lexicon: &'a Lexicon,
    /// Answers still possible in the bucket being resolved
    pub bucket: &'a [WordId],
    /// Path state after the bucket's feedback was absorbed
    pub path: &'a PathState,
}

/// A source of candidate next guesses
pub trait CandidatePool {
    /// Candidate guesses in enumeration order, excluding words already used
    fn candidates(&self, ctx: &PoolContext<'_>) -> Vec<WordId>;

    /// Whether the pool would offer `word`
    fn admits(&self, ctx: &PoolContext<'_>, word: WordId) -> bool {
        self.candidates(ctx).contains(&word)
    }
}

/// Enum wrapper for all pool tiers
///
/// Allows runtime configuration of the tier list while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolTier {
    /// The bucket's own remaining answers
    Bucket(BucketPool),
    /// Vocabulary words consistent with the path's constraints
    Constrained(ConstrainedPool),
    /// Any vocabulary word
    Open(OpenPool),
}

impl PoolTier {
    pub const BUCKET: Self = Self::Bucket(BucketPool);
    pub const CONSTRAINED: Self = Self::Constrained(ConstrainedPool);
    pub const OPEN: Self = Self::Open(OpenPool);

    /// Whether every guess this tier offers obeys hard-mode rules
    #[must_use]
    pub const fn is_hard_mode_legal(self) -> bool {
        !matches!(self, Self::Open(_))
    }
}

impl CandidatePool for PoolTier {
    fn candidates(&self, ctx: &PoolContext<'_>) -> Vec<WordId> {
        match self {
            Self::Bucket(p) => p.candidates(ctx),
            Self::Constrained(p) => p.candidates(ctx),
            Self::Open(p) => p.candidates(ctx),
        }
    }

    fn admits(&self, ctx: &PoolContext<'_>, word: WordId) -> bool {
        match self {
            Self::Bucket(p) => p.admits(ctx, word),
            Self::Constrained(p) => p.admits(ctx, word),
            Self::Open(p) => p.admits(ctx, word),
        }
    }
}

impl fmt::Display for PoolTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bucket(_) => "bucket",
            Self::Constrained(_) => "constrained",
            Self::Open(_) => "open",
        };
        f.write_str(name)
    }
}

impl FromStr for PoolTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bucket" => Ok(Self::BUCKET),
            "constrained" => Ok(Self::CONSTRAINED),
            "open" => Ok(Self::OPEN),
            other => Err(format!(
                "unknown pool tier '{other}' (expected bucket, constrained or open)"
            )),
        }
    }
}

/// Guesses drawn from the bucket's remaining answers
///
/// Every such word is consistent with all feedback on the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketPool;

impl CandidatePool for BucketPool {
    fn candidates(&self, ctx: &PoolContext<'_>) -> Vec<WordId> {
        ctx.bucket
            .iter()
            .copied()
            .filter(|&id| !ctx.path.has_used(id))
            .collect()
    }

    fn admits(&self, ctx: &PoolContext<'_>, word: WordId) -> bool {
        !ctx.path.has_used(word) && ctx.bucket.contains(&word)
    }
}

/// Vocabulary words that satisfy every accumulated constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstrainedPool;

impl CandidatePool for ConstrainedPool {
    fn candidates(&self, ctx: &PoolContext<'_>) -> Vec<WordId> {
        let constraints = ctx.path.constraints();
        ctx.lexicon
            .vocabulary()
            .iter()
            .copied()
            .filter(|&id| !ctx.path.has_used(id) && constraints.permits(ctx.lexicon.word(id)))
            .collect()
    }

    fn admits(&self, ctx: &PoolContext<'_>, word: WordId) -> bool {
        ctx.lexicon.is_guessable(word)
            && !ctx.path.has_used(word)
            && ctx.path.constraints().permits(ctx.lexicon.word(word))
    }
}

/// Any vocabulary word not yet played, ignoring feedback history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenPool;

impl CandidatePool for OpenPool {
    fn candidates(&self, ctx: &PoolContext<'_>) -> Vec<WordId> {
        ctx.lexicon
            .vocabulary()
            .iter()
            .copied()
            .filter(|&id| !ctx.path.has_used(id))
            .collect()
    }

    fn admits(&self, ctx: &PoolContext<'_>, word: WordId) -> bool {
        ctx.lexicon.is_guessable(word) && !ctx.path.has_used(word)
    }
}

/// Rule set a search pass runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every follow-up guess must respect all revealed feedback
    Hard,
    /// Follow-up guesses may be any vocabulary word
    Open,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hard => f.write_str("hard"),
            Self::Open => f.write_str("open"),
        }
    }
}

/// One search pass: a mode and the ordered tiers tried for every bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    pub mode: Mode,
    pub tiers: Vec<PoolTier>,
}

impl SearchPolicy {
    /// Hard-mode pass: bucket answers first, then other consistent words
    #[must_use]
    pub fn hard() -> Self {
        Self {
            mode: Mode::Hard,
            tiers: vec![PoolTier::BUCKET, PoolTier::CONSTRAINED],
        }
    }

    /// Open pass: bucket answers first, then the whole vocabulary
    #[must_use]
    pub fn open() -> Self {
        Self {
            mode: Mode::Open,
            tiers: vec![PoolTier::BUCKET, PoolTier::OPEN],
        }
    }

    /// Replace the tier list
    ///
    /// A hard pass given any tier that ignores revealed feedback runs in open
    /// mode instead.
    #[must_use]
    pub fn with_tiers(mut self, tiers: Vec<PoolTier>) -> Self {
        if !tiers.iter().all(|tier| tier.is_hard_mode_legal()) {
            self.mode = Mode::Open;
        }
        self.tiers = tiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn setup() -> Lexicon {
        let vocabulary = ["crane", "trace", "track", "brace", "trick", "fuzzy"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        Lexicon::new(vocabulary, None).unwrap()
    }

    fn names(lexicon: &Lexicon, ids: &[WordId]) -> Vec<String> {
        ids.iter()
            .map(|&id| lexicon.word(id).text().to_string())
            .collect()
    }

    #[test]
    fn bucket_pool_skips_used_words() {
        let lexicon = setup();
        let trace = lexicon.id_of("trace").unwrap();
        let brace = lexicon.id_of("brace").unwrap();
        let path = PathState::new().with_guess(trace);
        let bucket = [trace, brace];
        let ctx = PoolContext {
            lexicon: &lexicon,
            bucket: &bucket,
            path: &path,
        };

        assert_eq!(BucketPool.candidates(&ctx), vec![brace]);
        assert!(!BucketPool.admits(&ctx, trace));
    }

    #[test]
    fn constrained_pool_follows_feedback() {
        let lexicon = setup();
        let crane = lexicon.id_of("crane").unwrap();
        let path = PathState::new()
            .with_guess(crane)
            .narrowed(lexicon.word(crane), "yggbg".parse().unwrap());
        let ctx = PoolContext {
            lexicon: &lexicon,
            bucket: &[],
            path: &path,
        };

        assert_eq!(
            names(&lexicon, &ConstrainedPool.candidates(&ctx)),
            vec!["trace", "brace"]
        );
    }

    #[test]
    fn open_pool_offers_every_unused_word() {
        let lexicon = setup();
        let crane = lexicon.id_of("crane").unwrap();
        let path = PathState::new().with_guess(crane);
        let ctx = PoolContext {
            lexicon: &lexicon,
            bucket: &[],
            path: &path,
        };

        let offered = OpenPool.candidates(&ctx);
        assert_eq!(offered.len(), 5);
        assert!(!offered.contains(&crane));
        assert!(OpenPool.admits(&ctx, lexicon.id_of("fuzzy").unwrap()));
    }

    #[test]
    fn tiers_parse_from_names() {
        assert_eq!("bucket".parse::<PoolTier>().unwrap(), PoolTier::BUCKET);
        assert_eq!(" Constrained".parse::<PoolTier>().unwrap(), PoolTier::CONSTRAINED);
        assert_eq!("open".parse::<PoolTier>().unwrap(), PoolTier::OPEN);
        assert!("random".parse::<PoolTier>().is_err());
        for name in ["answers", "hard", "all"] {
            assert!(name.parse::<PoolTier>().is_err());
        }
        assert_eq!(PoolTier::OPEN.to_string(), "open");
    }

    #[test]
    fn default_policies() {
        assert!(SearchPolicy::hard().tiers.iter().all(|t| t.is_hard_mode_legal()));
        assert_eq!(SearchPolicy::open().tiers.last(), Some(&PoolTier::OPEN));
    }

    #[test]
    fn open_tier_turns_hard_pass_open() {
        let policy = SearchPolicy::hard().with_tiers(vec![PoolTier::BUCKET, PoolTier::OPEN]);
        assert_eq!(policy.mode, Mode::Open);

        let policy = SearchPolicy::hard().with_tiers(vec![PoolTier::CONSTRAINED]);
        assert_eq!(policy.mode, Mode::Hard);
    }
}
