//! Loading the files a command works on

use crate::core::{CandidateOrder, ComparisonTable, Coverage, Lexicon, Word};
use crate::tree::{DecisionNode, read_solutions};
use crate::wordlists::load_words;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// Word list locations shared by every command
#[derive(Debug, Clone)]
pub struct WordFiles {
    /// Guessable vocabulary, one word per line
    pub words: PathBuf,
    /// Possible answers, read only when the answer list is in use
    pub answers: PathBuf,
}

impl Default for WordFiles {
    fn default() -> Self {
        Self {
            words: PathBuf::from("words.txt"),
            answers: PathBuf::from("answers.txt"),
        }
    }
}

/// Build the lexicon for a run
///
/// Without `use_answer_list` every vocabulary word is a possible answer.
///
/// # Errors
/// Fails if a list cannot be read, holds an invalid word, or is empty.
pub fn load_lexicon(
    files: &WordFiles,
    use_answer_list: bool,
    order: CandidateOrder,
) -> Result<Lexicon> {
    let vocabulary = load_words(&files.words)?;
    let answers = if use_answer_list {
        Some(load_words(&files.answers)?)
    } else {
        None
    };

    let lexicon = Lexicon::new(vocabulary, answers)
        .with_context(|| format!("cannot use word list {}", files.words.display()))?
        .arranged(order);

    info!(
        vocabulary = lexicon.vocabulary().len(),
        answers = lexicon.answers().len(),
        "lexicon ready"
    );
    Ok(lexicon)
}

/// Answers a tree should be checked against
///
/// # Errors
/// Fails if the chosen list cannot be read or is empty.
pub fn load_answers(files: &WordFiles, use_answer_list: bool) -> Result<Vec<Word>> {
    let path = if use_answer_list {
        &files.answers
    } else {
        &files.words
    };
    let answers = load_words(path)?;
    if answers.is_empty() {
        bail!("answer list {} is empty", path.display());
    }
    Ok(answers)
}

/// Read a comparison table written by the precompute command
///
/// # Errors
/// Fails if the file cannot be opened, is malformed, or misses a pair under
/// `Coverage::Strict`.
pub fn load_table(path: &Path, lexicon: &Lexicon, coverage: Coverage) -> Result<ComparisonTable> {
    let file = File::open(path)
        .with_context(|| format!("cannot open comparison table {}", path.display()))?;
    ComparisonTable::read_json(lexicon, BufReader::new(file), coverage)
        .with_context(|| format!("cannot load comparison table {}", path.display()))
}

/// Read a solutions file and pick the tree to play
///
/// With a `start` word the tree rooted at that guess is chosen, otherwise the
/// first tree in the file.
///
/// # Errors
/// Fails if the file is unreadable, invalid, empty, or has no tree for `start`.
pub fn load_tree(path: &Path, start: Option<&Word>) -> Result<DecisionNode> {
    let file =
        File::open(path).with_context(|| format!("cannot open tree file {}", path.display()))?;
    let trees = read_solutions(BufReader::new(file))
        .with_context(|| format!("cannot read tree file {}", path.display()))?;

    let tree = match start {
        Some(word) => trees.into_iter().find(|tree| &tree.guess == word),
        None => trees.into_iter().next(),
    };
    match (tree, start) {
        (Some(tree), _) => Ok(tree),
        (None, Some(word)) => bail!("{} has no tree starting with '{word}'", path.display()),
        (None, None) => bail!("{} contains no solved trees", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_prover_inputs_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn answer_list_is_optional() {
        let files = WordFiles {
            words: scratch("words_a.txt", "crane\ntrace\nbrace\n"),
            answers: scratch("answers_a.txt", "trace\n"),
        };

        let all = load_lexicon(&files, false, CandidateOrder::Listed).unwrap();
        let subset = load_lexicon(&files, true, CandidateOrder::Listed).unwrap();

        assert_eq!(all.answers().len(), 3);
        assert_eq!(subset.answers().len(), 1);
        assert_eq!(load_answers(&files, true).unwrap().len(), 1);
    }

    #[test]
    fn empty_vocabulary_is_fatal() {
        let files = WordFiles {
            words: scratch("words_b.txt", "\n\n"),
            answers: PathBuf::from("unused"),
        };
        assert!(load_lexicon(&files, false, CandidateOrder::Listed).is_err());
    }

    #[test]
    fn tree_is_picked_by_start_word() {
        let path = scratch(
            "trees.json",
            r#"[{ "guess": "crane", "nextGuesses": {} }, { "guess": "trace", "nextGuesses": {} }]"#,
        );

        let first = load_tree(&path, None).unwrap();
        assert_eq!(first.guess.text(), "crane");

        let trace = Word::new("trace").unwrap();
        assert_eq!(load_tree(&path, Some(&trace)).unwrap().guess, trace);

        let missing = Word::new("brace").unwrap();
        assert!(load_tree(&path, Some(&missing)).is_err());
    }

    #[test]
    fn empty_solutions_have_no_tree() {
        let path = scratch("empty.json", "[]");
        assert!(load_tree(&path, None).is_err());
    }
}
