//! Decision tree search
//!
//! Partitioning, per-branch path state, candidate pool tiers, the recursive
//! engine and the parallel whole-vocabulary driver.

pub mod config;
mod engine;
mod explore;
pub mod partition;
mod path;
pub mod strategy;

pub use config::{BucketOrder, CandidateOrder, DEFAULT_MAX_ATTEMPTS, SearchConfig};
pub use engine::{Outcome, SearchEngine, SearchError, SearchReport};
pub use explore::explore_all;
pub use partition::{Bucket, Partition, partition};
pub use path::PathState;
pub use strategy::{
    BucketPool, CandidatePool, ConstrainedPool, Mode, OpenPool, PoolContext, PoolTier,
    SearchPolicy,
};
