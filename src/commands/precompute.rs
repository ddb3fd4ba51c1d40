//! Comparison table precomputation command

use super::inputs::{WordFiles, load_lexicon};
use crate::core::{CandidateOrder, ComparisonTable};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// What a precompute run produced
#[derive(Debug, Clone, Copy)]
pub struct PrecomputeSummary {
    pub words: usize,
    pub entries: usize,
    pub build_time: Duration,
    pub write_time: Duration,
}

/// Build the full answer × guess table and write it as JSON
///
/// # Errors
/// Fails if the word lists are unusable or the output cannot be written.
pub fn run_precompute(
    files: &WordFiles,
    use_answer_list: bool,
    output: &Path,
) -> Result<PrecomputeSummary> {
    let lexicon = load_lexicon(files, use_answer_list, CandidateOrder::Listed)?;

    let start = Instant::now();
    let table = ComparisonTable::build(&lexicon);
    let build_time = start.elapsed();

    let start = Instant::now();
    let file =
        File::create(output).with_context(|| format!("cannot create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    table
        .write_json(&lexicon, &mut writer)
        .with_context(|| format!("cannot write {}", output.display()))?;
    writer.flush()?;
    let write_time = start.elapsed();

    Ok(PrecomputeSummary {
        words: lexicon.len(),
        entries: lexicon.len() * lexicon.len(),
        build_time,
        write_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::inputs::load_table;
    use crate::core::Coverage;
    use std::fs;

    #[test]
    fn written_table_loads_strictly() {
        let dir = std::env::temp_dir();
        let tag = std::process::id();
        let files = WordFiles {
            words: dir.join(format!("wordle_prover_pre_{tag}_words.txt")),
            answers: dir.join(format!("wordle_prover_pre_{tag}_answers.txt")),
        };
        fs::write(&files.words, "crane\ntrace\n").unwrap();
        fs::write(&files.answers, "brace\n").unwrap();
        let output = dir.join(format!("wordle_prover_pre_{tag}_table.json"));

        let summary = run_precompute(&files, true, &output).unwrap();
        assert_eq!(summary.words, 3);
        assert_eq!(summary.entries, 9);

        let lexicon = load_lexicon(&files, true, CandidateOrder::Listed).unwrap();
        let table = load_table(&output, &lexicon, Coverage::Strict).unwrap();
        let crane = lexicon.id_of("crane").unwrap();
        let brace = lexicon.id_of("brace").unwrap();
        assert_eq!(table.get(brace, crane).unwrap().to_string(), "yggbg");
    }
}
