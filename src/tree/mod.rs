//! Decision trees produced by the search
//!
//! Node structure, the JSON solutions file, and playback against answers or
//! live feedback.

mod node;
mod playback;

pub use node::{DecisionNode, TreeError, read_solutions, write_solutions};
pub use playback::{PlaybackError, Replay, Step, TreeCursor, VerifyReport, replay, verify_tree};
