//! Feedback between a guess and an answer
//!
//! Each position gets a verdict, written `g` (Hit), `y` (Present) or `b`
//! (Miss). Five verdicts pack into one base-3 byte, position `i` carrying
//! weight `3^i`, so patterns hash and compare as plain integers.

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Miss,
    Present,
    Hit,
}

impl Verdict {
    const fn digit(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Miss,
        }
    }

    /// Serialized character: `g`, `y` or `b`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Hit => 'g',
            Self::Present => 'y',
            Self::Miss => 'b',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `g`/`y`/`b` in either case, the gray aliases `-`/`_`, and the
    /// square emojis 🟩 🟨 ⬜ ⬛.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'g' | 'G' | '🟩' => Some(Self::Hit),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'b' | 'B' | '-' | '_' | '⬜' | '⬛' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Packed feedback for one guess, in `0..243`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern(u8);

impl Pattern {
    /// `ggggg`, the only pattern that ends a game
    pub const PERFECT: Self = Self(242);

    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Wrap a packed value
    ///
    /// # Panics
    /// In debug builds, if `value >= 243`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "packed pattern out of range");
        Self(value)
    }

    /// Build a pattern from per-position verdicts
    #[must_use]
    pub fn from_verdicts(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for verdict in verdicts {
            pattern += verdict.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Packed base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Verdict at a position (0-4)
    #[must_use]
    pub const fn verdict(self, position: usize) -> Verdict {
        let mut val = self.0;
        let mut i = 0;
        while i < position {
            val /= 3;
            i += 1;
        }
        Verdict::from_digit(val % 3)
    }

    /// All five verdicts in position order
    #[must_use]
    pub fn verdicts(self) -> [Verdict; WORD_LENGTH] {
        let mut result = [Verdict::Miss; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Verdict::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Compute the feedback shown when `guess` is played and `answer` is hidden
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as hits and consume them from
    ///    the answer's letter pool
    /// 2. Second pass: scan the remaining guess positions left to right and
    ///    promote each to present while the answer still has that letter left
    ///
    /// The left-to-right promotion decides which copy of a repeated guess letter
    /// is credited.
    ///
    /// # Examples
    /// ```
    /// use wordle_prover::core::{Pattern, Word};
    ///
    /// let answer = Word::new("babes").unwrap();
    /// let guess = Word::new("abbey").unwrap();
    /// assert_eq!(Pattern::compare(&answer, &guess).to_string(), "yyggb");
    /// ```
    #[must_use]
    pub fn compare(answer: &Word, guess: &Word) -> Self {
        let mut result = [Verdict::Miss; WORD_LENGTH];
        let mut remaining: [u8; ALPHABET_SIZE] = *answer.letter_counts();

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Verdict::Hit;
                remaining[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Verdict::Hit {
                continue;
            }
            let slot = &mut remaining[letter_index(g)];
            if *slot > 0 {
                result[i] = Verdict::Present;
                *slot -= 1;
            }
        }

        Self::from_verdicts(result)
    }

    /// Count the number of hit positions
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.verdicts()
            .iter()
            .filter(|&&v| v == Verdict::Hit)
            .count()
    }

    /// Count the number of present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.verdicts()
            .iter()
            .filter(|&&v| v == Verdict::Present)
            .count()
    }

    /// Colored squares, as shared after a game
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.verdicts()
            .iter()
            .map(|v| match v {
                Verdict::Hit => '🟩',
                Verdict::Present => '🟨',
                Verdict::Miss => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.verdicts() {
            write!(f, "{}", verdict.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verdicts: Vec<Verdict> = s
            .trim()
            .chars()
            .map(Verdict::from_char)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("'{s}' contains a character other than g/y/b or a colored square"))?;

        let verdicts: [Verdict; WORD_LENGTH] = verdicts
            .try_into()
            .map_err(|_| format!("'{s}' does not have {WORD_LENGTH} verdicts"))?;

        Ok(Self::from_verdicts(verdicts))
    }
}

impl TryFrom<String> for Pattern {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(answer: &str, guess: &str) -> Pattern {
        Pattern::compare(&Word::new(answer).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_hits(), 5);
        assert_eq!(Pattern::PERFECT.to_string(), "ggggg");
    }

    #[test]
    fn pattern_all_miss() {
        let pattern = compare("fghij", "abcde");
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.to_string(), "bbbbb");
    }

    #[test]
    fn pattern_self_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert_eq!(compare(word, word), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_repeated_letter_left_to_right() {
        // One spare 'b' in the answer after the hit, credited to the first copy
        let pattern = compare("babes", "abbey");
        assert_eq!(pattern.to_string(), "yyggb");
        assert_eq!(pattern.count_present(), 2);
    }

    #[test]
    fn pattern_hit_consumes_before_present() {
        // ROBOT vs FLOOR: the second O is a hit, the first one takes the spare O
        assert_eq!(compare("floor", "robot").to_string(), "yybgb");
        // Answer has a single E which the hit consumes
        assert_eq!(compare("crane", "eerie").to_string(), "bbybg");
    }

    #[test]
    fn pattern_crane_against_trace() {
        assert_eq!(compare("slate", "crane").to_string(), "bbgbg");
        assert_eq!(compare("trace", "crane").to_string(), "yggbg");
    }

    #[test]
    fn pattern_verdict_positions() {
        let pattern: Pattern = "gybbg".parse().unwrap();
        assert_eq!(pattern.verdict(0), Verdict::Hit);
        assert_eq!(pattern.verdict(1), Verdict::Present);
        assert_eq!(pattern.verdict(2), Verdict::Miss);
        assert_eq!(pattern.verdict(4), Verdict::Hit);
    }

    #[test]
    fn pattern_from_str_aliases() {
        let p1: Pattern = "gyg--".parse().unwrap();
        let p2: Pattern = "🟩🟨🟩⬜⬛".parse().unwrap();
        let p3: Pattern = "GYGBB".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!("gybbgb".parse::<Pattern>().is_err());
        assert!("gyb".parse::<Pattern>().is_err());
        assert!("gxbbb".parse::<Pattern>().is_err());
        assert!("".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_display_round_trips_through_serde() {
        let pattern = compare("trick", "crane");
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"ygbbb\"");
        assert_eq!(serde_json::from_str::<Pattern>(&json).unwrap(), pattern);
    }

    #[test]
    fn pattern_emoji() {
        let pattern: Pattern = "gybbb".parse().unwrap();
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜⬜⬜");
    }
}
