//! Strategy search command
//!
//! Proves one starting word (or every vocabulary word) and writes the solved
//! decision trees.

use super::inputs::{WordFiles, load_lexicon, load_table};
use crate::core::{CandidateOrder, Comparator, ComparisonTable, Coverage, Lexicon, Word};
use crate::solver::{SearchConfig, SearchEngine, SearchReport, explore_all};
use crate::tree::write_solutions;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Where pattern lookups come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSource {
    /// Compare words on demand
    #[default]
    Direct,
    /// Build the full table in memory before searching
    Build,
    /// Load a table written by the precompute command
    File { path: PathBuf, coverage: Coverage },
}

/// Everything a solve run needs besides the word lists
#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub starting_word: String,
    /// Search from every vocabulary word instead of one
    pub explore_all: bool,
    pub use_answer_list: bool,
    pub order: CandidateOrder,
    pub table: TableSource,
    pub search: SearchConfig,
    pub output: PathBuf,
    /// Show a progress bar in whole-vocabulary mode
    pub progress: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            starting_word: "crane".to_string(),
            explore_all: false,
            use_answer_list: false,
            order: CandidateOrder::default(),
            table: TableSource::default(),
            search: SearchConfig::default(),
            output: PathBuf::from("output.json"),
            progress: true,
        }
    }
}

/// Result of a solve run
#[derive(Debug)]
pub struct SolveSummary {
    pub reports: Vec<SearchReport>,
    pub answers: usize,
    pub search_time: Duration,
    pub write_time: Duration,
    pub output: PathBuf,
}

impl SolveSummary {
    /// Reports whose search found a strategy
    pub fn solved(&self) -> impl Iterator<Item = &SearchReport> {
        self.reports.iter().filter(|r| r.is_solved())
    }
}

/// Load inputs, search, and write the solved trees
///
/// # Errors
/// Fails on unreadable or invalid inputs, an unknown starting word, or when
/// the output file cannot be written.
pub fn run_solve(files: &WordFiles, options: &SolveOptions) -> Result<SolveSummary> {
    let lexicon = load_lexicon(files, options.use_answer_list, options.order)?;
    let table = prepare_table(&lexicon, &options.table)?;
    let comparator = match &table {
        Some(table) => Comparator::with_table(&lexicon, table),
        None => Comparator::direct(&lexicon),
    };

    let start = Instant::now();
    let reports = search(comparator, options)?;
    let search_time = start.elapsed();

    let start = Instant::now();
    write_output(&options.output, &reports)?;
    let write_time = start.elapsed();

    Ok(SolveSummary {
        reports,
        answers: lexicon.answers().len(),
        search_time,
        write_time,
        output: options.output.clone(),
    })
}

fn prepare_table(lexicon: &Lexicon, source: &TableSource) -> Result<Option<ComparisonTable>> {
    match source {
        TableSource::Direct => Ok(None),
        TableSource::Build => Ok(Some(ComparisonTable::build(lexicon))),
        TableSource::File { path, coverage } => load_table(path, lexicon, *coverage).map(Some),
    }
}

/// Run the search described by `options`
///
/// # Errors
/// Fails for an invalid or unknown starting word, or if the worker pool
/// cannot be created.
pub fn search(comparator: Comparator<'_>, options: &SolveOptions) -> Result<Vec<SearchReport>> {
    let engine = SearchEngine::new(comparator, options.search.clone());

    if options.explore_all {
        let total = engine.lexicon().vocabulary().len() as u64;
        let bar = if options.progress {
            progress_bar(total)?
        } else {
            ProgressBar::hidden()
        };
        let reports = explore_all(&engine, Some(&bar))?;
        bar.finish_with_message("Complete!");
        return Ok(reports);
    }

    let start = Word::new(options.starting_word.as_str())
        .with_context(|| format!("invalid starting word '{}'", options.starting_word))?;
    let report = engine.solve(&start)?;
    info!(
        start = %report.start,
        solved = report.is_solved(),
        evaluations = report.evaluations,
        "search finished"
    );
    Ok(vec![report])
}

fn progress_bar(total: u64) -> Result<ProgressBar> {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed_precise}")?
            .progress_chars("█▓▒░"),
    );
    Ok(bar)
}

/// Write solved trees to `path` as a JSON array
///
/// # Errors
/// Fails if the file cannot be created or written.
pub fn write_output(path: &Path, reports: &[SearchReport]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_solutions(&mut writer, reports.iter().filter_map(|r| r.outcome.tree()))
        .with_context(|| format!("cannot write {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::read_solutions;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_prover_solve_{}_{name}", std::process::id()))
    }

    fn files(tag: &str) -> WordFiles {
        let words = scratch(&format!("{tag}_words.txt"));
        fs::write(&words, "crane\ntrace\ntrack\nbrace\ntrick\n").unwrap();
        WordFiles {
            words,
            answers: scratch("unused.txt"),
        }
    }

    #[test]
    fn single_start_writes_one_tree() {
        let files = files("single");
        let options = SolveOptions {
            output: scratch("single.json"),
            ..SolveOptions::default()
        };

        let summary = run_solve(&files, &options).unwrap();
        assert_eq!(summary.reports.len(), 1);
        assert_eq!(summary.solved().count(), 1);

        let trees = read_solutions(File::open(&options.output).unwrap()).unwrap();
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].guess.text(), "crane");
    }

    #[test]
    fn explore_all_with_built_table() {
        let files = files("all");
        let options = SolveOptions {
            explore_all: true,
            table: TableSource::Build,
            output: scratch("all.json"),
            progress: false,
            ..SolveOptions::default()
        };

        let summary = run_solve(&files, &options).unwrap();
        assert_eq!(summary.reports.len(), 5);

        let trees = read_solutions(File::open(&options.output).unwrap()).unwrap();
        assert_eq!(trees.len(), summary.solved().count());
    }

    #[test]
    fn unknown_start_is_reported() {
        let files = files("unknown");
        let options = SolveOptions {
            starting_word: "fuzzy".to_string(),
            output: scratch("unknown.json"),
            ..SolveOptions::default()
        };
        assert!(run_solve(&files, &options).is_err());
    }

    #[test]
    fn unsolvable_start_writes_empty_array() {
        let path = scratch("empty.json");
        let report = SearchReport {
            start: Word::new("crane").unwrap(),
            outcome: crate::solver::Outcome::Failed,
            mode: None,
            evaluations: 1,
        };
        write_output(&path, &[report]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
