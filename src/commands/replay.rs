//! Replay answers through a saved decision tree
//!
//! Plays one answer, or every answer, through the tree and gathers the guess
//! sequences and statistics.

use crate::core::Word;
use crate::tree::{DecisionNode, PlaybackError, Replay, VerifyReport, replay, verify_tree};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from replaying every answer
#[derive(Debug)]
pub struct ReplayStatistics {
    pub total_words: usize,
    pub games: Vec<Replay>,
    pub failures: Vec<(Word, PlaybackError)>,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
}

impl ReplayStatistics {
    #[must_use]
    pub fn solved(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.games.iter().map(Replay::attempts).sum::<usize>() as f64 / self.games.len() as f64
    }

    /// Answers needing the most guesses, up to `limit`
    #[must_use]
    pub fn worst_words(&self, limit: usize) -> Vec<(&Word, usize)> {
        let mut worst: Vec<(&Word, usize)> = self
            .games
            .iter()
            .map(|game| (&game.answer, game.attempts()))
            .collect();
        worst.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        worst.truncate(limit);
        worst
    }
}

/// Play a single answer through the tree
///
/// # Errors
/// Fails if the tree cannot solve the answer within `max_attempts`.
pub fn replay_answer(tree: &DecisionNode, answer: &Word, max_attempts: usize) -> Result<Replay> {
    Ok(replay(tree, answer, max_attempts)?)
}

/// Play every answer through the tree, showing progress
///
/// # Errors
/// Fails only if the progress bar template is invalid.
pub fn replay_all(
    tree: &DecisionNode,
    answers: &[Word],
    max_attempts: usize,
    show_progress: bool,
) -> Result<ReplayStatistics> {
    let pb = if show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();
    let mut games = Vec::with_capacity(answers.len());
    let mut failures = Vec::new();
    let mut guess_distribution = BTreeMap::new();

    for (idx, answer) in answers.iter().enumerate() {
        match replay(tree, answer, max_attempts) {
            Ok(game) => {
                *guess_distribution.entry(game.attempts()).or_insert(0) += 1;
                games.push(game);
            }
            Err(err) => failures.push((answer.clone(), err)),
        }

        if idx % 10 == 0 {
            pb.set_message(format!("Failed: {}", failures.len()));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete!");

    Ok(ReplayStatistics {
        total_words: answers.len(),
        games,
        failures,
        guess_distribution,
        total_time: total_start.elapsed(),
    })
}

/// Check that the tree solves every answer, optionally under hard-mode rules
#[must_use]
pub fn run_verify(
    tree: &DecisionNode,
    answers: &[Word],
    max_attempts: usize,
    hard_mode: bool,
) -> VerifyReport {
    verify_tree(tree, answers, max_attempts, hard_mode)
}
