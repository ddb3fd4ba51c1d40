//! Hard-mode constraints accumulated from feedback history
//!
//! Each absorbed (guess, pattern) pair tightens three kinds of evidence:
//! - per-position excluded letters (a hit excludes every other letter there)
//! - per-letter minimum occurrence counts from hit/present feedback
//! - per-letter exhausted flags from a miss on a letter, capping its count at
//!   the confirmed minimum

use super::pattern::{Pattern, Verdict};
use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};

const ALL_LETTERS: u32 = (1 << ALPHABET_SIZE) - 1;

#[inline]
const fn letter_bit(letter: u8) -> u32 {
    1 << letter_index(letter)
}

/// Cumulative constraint state along one search path
///
/// Monotonically tightens as feedback is absorbed. Values are small and `Copy`,
/// so each branch works on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintState {
    excluded: [u32; WORD_LENGTH],
    min_counts: [u8; ALPHABET_SIZE],
    exhausted: [bool; ALPHABET_SIZE],
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// A state that admits every word
    #[must_use]
    pub const fn new() -> Self {
        Self {
            excluded: [0; WORD_LENGTH],
            min_counts: [0; ALPHABET_SIZE],
            exhausted: [false; ALPHABET_SIZE],
        }
    }

    /// True when no feedback has been absorbed yet
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::new()
    }

    /// Fold the feedback of one guess into the state
    pub fn absorb(&mut self, guess: &Word, pattern: Pattern) {
        let mut confirmed = [0u8; ALPHABET_SIZE];
        let mut missed = [false; ALPHABET_SIZE];

        for (position, (&letter, verdict)) in guess
            .chars()
            .iter()
            .zip(pattern.verdicts())
            .enumerate()
        {
            let idx = letter_index(letter);
            match verdict {
                Verdict::Hit => {
                    self.excluded[position] |= ALL_LETTERS & !letter_bit(letter);
                    confirmed[idx] += 1;
                }
                Verdict::Present => {
                    self.excluded[position] |= letter_bit(letter);
                    confirmed[idx] += 1;
                }
                Verdict::Miss => {
                    self.excluded[position] |= letter_bit(letter);
                    missed[idx] = true;
                }
            }
        }

        for idx in 0..ALPHABET_SIZE {
            self.min_counts[idx] = self.min_counts[idx].max(confirmed[idx]);
            if missed[idx] {
                self.exhausted[idx] = true;
            }
        }
    }

    /// Return a copy with one more guess absorbed
    #[must_use]
    pub fn with(mut self, guess: &Word, pattern: Pattern) -> Self {
        self.absorb(guess, pattern);
        self
    }

    /// Check whether a word is consistent with every absorbed constraint
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        let positions_ok = word
            .chars()
            .iter()
            .zip(&self.excluded)
            .all(|(&letter, &mask)| mask & letter_bit(letter) == 0);

        positions_ok
            && word
                .letter_counts()
                .iter()
                .zip(self.min_counts.iter().zip(&self.exhausted))
                .all(|(&count, (&min, &exhausted))| {
                    count >= min && (!exhausted || count <= min)
                })
    }

    /// Minimum number of times a letter must appear
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_counts[letter_index(letter)]
    }

    /// Whether the letter's count is capped at its minimum
    #[must_use]
    pub const fn is_exhausted(&self, letter: u8) -> bool {
        self.exhausted[letter_index(letter)]
    }

    /// Whether a letter is ruled out at a position
    #[must_use]
    pub const fn excludes(&self, position: usize, letter: u8) -> bool {
        self.excluded[position] & letter_bit(letter) != 0
    }

    /// Filter a pool down to the words this state permits, preserving order
    #[must_use]
    pub fn apply<'w>(&self, pool: impl IntoIterator<Item = &'w Word>) -> Vec<&'w Word> {
        pool.into_iter().filter(|word| self.permits(word)).collect()
    }
}
