//! Vocabulary and answer storage
//!
//! Words are interned once and referred to by `WordId` during search, so
//! candidate sets and path state stay small and comparison lookups are O(1).

use super::word::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Index of an interned word inside a `Lexicon`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    /// Position of the word in the lexicon's interned list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors raised while assembling a lexicon
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("vocabulary is empty")]
    EmptyVocabulary,
    #[error("answer list is empty")]
    EmptyAnswers,
    #[error("word '{0}' is not in the vocabulary")]
    UnknownWord(String),
}

/// Order in which candidate guesses are enumerated during search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateOrder {
    /// Keep the order the words were loaded in
    #[default]
    Listed,
    /// Sort alphabetically
    Alphabetical,
    /// Seeded shuffle, reproducible for a given seed
    Shuffled(u64),
}

/// Guessable vocabulary plus the subset of words that can be answers
///
/// Answers missing from the vocabulary are interned too; they can appear in
/// candidate sets but are never offered as open-mode guesses.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    index: FxHashMap<String, WordId>,
    vocabulary: Vec<WordId>,
    answers: Vec<WordId>,
    guessable: Vec<bool>,
}

impl Lexicon {
    /// Build a lexicon from a vocabulary and an optional answer subset
    ///
    /// Duplicates are dropped keeping the first occurrence. Without an answer
    /// list every vocabulary word is a possible answer.
    ///
    /// # Errors
    /// Returns `LexiconError` if the vocabulary or the answer list is empty.
    pub fn new(vocabulary: Vec<Word>, answers: Option<Vec<Word>>) -> Result<Self, LexiconError> {
        if vocabulary.is_empty() {
            return Err(LexiconError::EmptyVocabulary);
        }

        let mut lexicon = Self {
            words: Vec::with_capacity(vocabulary.len()),
            index: FxHashMap::default(),
            vocabulary: Vec::with_capacity(vocabulary.len()),
            answers: Vec::new(),
            guessable: Vec::with_capacity(vocabulary.len()),
        };

        for word in vocabulary {
            let (id, fresh) = lexicon.intern(word);
            lexicon.guessable[id.index()] = true;
            if fresh {
                lexicon.vocabulary.push(id);
            }
        }

        match answers {
            Some(answers) => {
                if answers.is_empty() {
                    return Err(LexiconError::EmptyAnswers);
                }
                let mut seen = vec![false; lexicon.words.len() + answers.len()];
                for word in answers {
                    let (id, _) = lexicon.intern(word);
                    if !seen[id.index()] {
                        seen[id.index()] = true;
                        lexicon.answers.push(id);
                    }
                }
            }
            None => lexicon.answers.clone_from(&lexicon.vocabulary),
        }

        Ok(lexicon)
    }

    fn intern(&mut self, word: Word) -> (WordId, bool) {
        if let Some(&id) = self.index.get(word.text()) {
            return (id, false);
        }
        let id = WordId(self.words.len() as u32);
        self.index.insert(word.text().to_string(), id);
        self.words.push(word);
        self.guessable.push(false);
        (id, true)
    }

    /// Return a copy whose vocabulary and answers follow the given order
    ///
    /// Word ids are unchanged, so comparison tables built earlier stay valid.
    #[must_use]
    pub fn arranged(mut self, order: CandidateOrder) -> Self {
        match order {
            CandidateOrder::Listed => {}
            CandidateOrder::Alphabetical => {
                let words = &self.words;
                self.vocabulary.sort_by(|a, b| words[a.index()].cmp(&words[b.index()]));
                self.answers.sort_by(|a, b| words[a.index()].cmp(&words[b.index()]));
            }
            CandidateOrder::Shuffled(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.vocabulary.shuffle(&mut rng);
                self.answers.shuffle(&mut rng);
            }
        }
        self
    }

    /// Look up an interned word
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// Find the id of a word by text
    #[must_use]
    pub fn id_of(&self, text: &str) -> Option<WordId> {
        self.index.get(text).copied()
    }

    /// Resolve a word that must be in the vocabulary
    ///
    /// # Errors
    /// Returns `LexiconError::UnknownWord` if the word is not guessable.
    pub fn require_guessable(&self, word: &Word) -> Result<WordId, LexiconError> {
        self.id_of(word.text())
            .filter(|&id| self.is_guessable(id))
            .ok_or_else(|| LexiconError::UnknownWord(word.text().to_string()))
    }

    /// Whether the word may be played as an open-mode guess
    #[inline]
    #[must_use]
    pub fn is_guessable(&self, id: WordId) -> bool {
        self.guessable[id.index()]
    }

    /// Guessable words in enumeration order
    #[must_use]
    pub fn vocabulary(&self) -> &[WordId] {
        &self.vocabulary
    }

    /// Possible answers in enumeration order
    #[must_use]
    pub fn answers(&self) -> &[WordId] {
        &self.answers
    }

    /// Every interned word, indexed by `WordId::index`
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of interned words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed lexicon
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(lexicon: &Lexicon, ids: &[WordId]) -> Vec<String> {
        ids.iter()
            .map(|&id| lexicon.word(id).text().to_string())
            .collect()
    }

    #[test]
    fn answers_default_to_vocabulary() {
        let lexicon = Lexicon::new(words(&["crane", "trace", "brace"]), None).unwrap();
        assert_eq!(lexicon.vocabulary(), lexicon.answers());
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let lexicon = Lexicon::new(words(&["crane", "trace", "crane", "brace"]), None).unwrap();
        assert_eq!(
            texts(&lexicon, lexicon.vocabulary()),
            vec!["crane", "trace", "brace"]
        );
    }

    #[test]
    fn answers_outside_vocabulary_are_not_guessable() {
        let lexicon = Lexicon::new(
            words(&["crane", "trace"]),
            Some(words(&["trace", "brace", "brace"])),
        )
        .unwrap();

        assert_eq!(texts(&lexicon, lexicon.answers()), vec!["trace", "brace"]);
        let brace = lexicon.id_of("brace").unwrap();
        assert!(!lexicon.is_guessable(brace));
        assert!(!lexicon.vocabulary().contains(&brace));
        assert!(matches!(
            lexicon.require_guessable(&Word::new("brace").unwrap()),
            Err(LexiconError::UnknownWord(_))
        ));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(
            Lexicon::new(Vec::new(), None).unwrap_err(),
            LexiconError::EmptyVocabulary
        );
        assert_eq!(
            Lexicon::new(words(&["crane"]), Some(Vec::new())).unwrap_err(),
            LexiconError::EmptyAnswers
        );
    }

    #[test]
    fn alphabetical_order_keeps_ids() {
        let lexicon = Lexicon::new(words(&["trace", "brace", "crane"]), None).unwrap();
        let crane = lexicon.id_of("crane").unwrap();
        let sorted = lexicon.arranged(CandidateOrder::Alphabetical);

        assert_eq!(
            texts(&sorted, sorted.vocabulary()),
            vec!["brace", "crane", "trace"]
        );
        assert_eq!(sorted.id_of("crane"), Some(crane));
    }

    #[test]
    fn shuffle_is_reproducible() {
        let list = words(&["crane", "trace", "track", "brace", "trick", "brick"]);
        let a = Lexicon::new(list.clone(), None)
            .unwrap()
            .arranged(CandidateOrder::Shuffled(7));
        let b = Lexicon::new(list, None)
            .unwrap()
            .arranged(CandidateOrder::Shuffled(7));
        assert_eq!(a.vocabulary(), b.vocabulary());
        assert_eq!(a.vocabulary().len(), 6);
    }
}
