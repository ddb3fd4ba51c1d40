//! Search configuration

use super::strategy::{Mode, PoolTier, SearchPolicy};

pub use super::partition::BucketOrder;
pub use crate::core::CandidateOrder;

/// Default attempt budget of a standard game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Tunables for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum guesses on any root-to-leaf path, the starting guess included
    pub max_attempts: usize,
    /// Restrict follow-up guesses to words consistent with all feedback
    pub hard_mode: bool,
    /// After a failed hard-mode pass, retry with the open pass
    pub relax: bool,
    /// Replace the tier list of the primary pass
    pub tiers: Option<Vec<PoolTier>>,
    /// Resolution order of non-terminal buckets
    pub bucket_order: BucketOrder,
    /// Worker count for whole-vocabulary mode; `None` uses all cores
    pub threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hard_mode: false,
            relax: false,
            tiers: None,
            bucket_order: BucketOrder::default(),
            threads: None,
        }
    }
}

impl SearchConfig {
    /// Ordered passes the engine runs until one solves
    #[must_use]
    pub fn passes(&self) -> Vec<SearchPolicy> {
        let primary = if self.hard_mode {
            SearchPolicy::hard()
        } else {
            SearchPolicy::open()
        };
        let primary = match &self.tiers {
            Some(tiers) => primary.with_tiers(tiers.clone()),
            None => primary,
        };

        let relax = self.relax && primary.mode == Mode::Hard;
        let mut passes = vec![primary];
        if relax {
            passes.push(SearchPolicy::open());
        }
        passes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_open_pass() {
        let passes = SearchConfig::default().passes();
        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].mode, Mode::Open);
    }

    #[test]
    fn relax_appends_open_pass() {
        let config = SearchConfig {
            hard_mode: true,
            relax: true,
            ..SearchConfig::default()
        };
        let modes: Vec<Mode> = config.passes().iter().map(|p| p.mode).collect();
        assert_eq!(modes, vec![Mode::Hard, Mode::Open]);
    }

    #[test]
    fn relax_without_hard_mode_is_ignored() {
        let config = SearchConfig {
            relax: true,
            ..SearchConfig::default()
        };
        assert_eq!(config.passes().len(), 1);
    }

    #[test]
    fn tiers_override_primary_only() {
        let config = SearchConfig {
            hard_mode: true,
            relax: true,
            tiers: Some(vec![PoolTier::CONSTRAINED]),
            ..SearchConfig::default()
        };
        let passes = config.passes();
        assert_eq!(passes[0].tiers, vec![PoolTier::CONSTRAINED]);
        assert_eq!(passes[1], SearchPolicy::open());
    }

    #[test]
    fn hard_mode_with_open_tier_is_reported_open() {
        let config = SearchConfig {
            hard_mode: true,
            relax: true,
            tiers: Some(vec![PoolTier::OPEN]),
            ..SearchConfig::default()
        };
        let passes = config.passes();
        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].mode, Mode::Open);
        assert_eq!(passes[0].tiers, vec![PoolTier::OPEN]);
    }
}
