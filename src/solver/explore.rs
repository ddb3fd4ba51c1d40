//! Whole-vocabulary mode: one independent search per starting word

use super::engine::{SearchEngine, SearchError, SearchReport};
use indicatif::ProgressBar;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::time::Instant;
use tracing::info;

/// Run the engine from every vocabulary word on a fixed-size worker pool
///
/// Reports come back in vocabulary order. Workers share only the read-only
/// lexicon and comparison data; every search owns its path state.
///
/// # Errors
/// Returns `SearchError::ThreadPool` if the worker pool cannot be built.
pub fn explore_all(
    engine: &SearchEngine<'_>,
    progress: Option<&ProgressBar>,
) -> Result<Vec<SearchReport>, SearchError> {
    let mut builder = ThreadPoolBuilder::new();
    if let Some(threads) = engine.config().threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let starts = engine.lexicon().vocabulary();
    let begin = Instant::now();

    let reports: Vec<SearchReport> = pool.install(|| {
        starts
            .par_iter()
            .map(|&start| {
                let report = engine.solve_id(start);
                if let Some(bar) = progress {
                    bar.inc(1);
                }
                report
            })
            .collect()
    });

    let solved = reports.iter().filter(|r| r.is_solved()).count();
    info!(
        starts = reports.len(),
        solved,
        threads = pool.current_num_threads(),
        elapsed_ms = begin.elapsed().as_millis() as u64,
        "explored starting words"
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Comparator, Lexicon, Word};
    use crate::solver::config::SearchConfig;

    #[test]
    fn reports_follow_vocabulary_order() {
        let vocabulary = ["crane", "trace", "track", "brace", "trick"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let lexicon = Lexicon::new(vocabulary, None).unwrap();
        let config = SearchConfig {
            threads: Some(2),
            ..SearchConfig::default()
        };
        let engine = SearchEngine::new(Comparator::direct(&lexicon), config);

        let reports = explore_all(&engine, None).unwrap();

        let starts: Vec<&str> = reports.iter().map(|r| r.start.text()).collect();
        assert_eq!(starts, vec!["crane", "trace", "track", "brace", "trick"]);
        for report in &reports {
            let sequential = engine.solve_id(engine.lexicon().id_of(report.start.text()).unwrap());
            assert_eq!(report, &sequential);
        }
    }

    #[test]
    fn progress_counts_every_start() {
        let vocabulary = ["crane", "trace", "brace"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let lexicon = Lexicon::new(vocabulary, None).unwrap();
        let engine = SearchEngine::new(Comparator::direct(&lexicon), SearchConfig::default());
        let bar = ProgressBar::hidden();

        explore_all(&engine, Some(&bar)).unwrap();
        assert_eq!(bar.position(), 3);
    }
}
