//! End-to-end scenarios: word files in, solutions file out, trees played back.

use std::fs;
use std::path::PathBuf;
use wordle_prover::commands::{SolveOptions, WordFiles, load_tree, replay_all, run_solve};
use wordle_prover::core::{Comparator, Lexicon, Word};
use wordle_prover::solver::{Mode, SearchConfig, SearchEngine, explore_all};
use wordle_prover::tree::{read_solutions, verify_tree};

const SMALL: [&str; 5] = ["crane", "trace", "track", "brace", "trick"];

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(*w).unwrap()).collect()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "wordle_prover_scenario_{}_{name}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_words(dir: &PathBuf, list: &[&str]) -> WordFiles {
    let path = dir.join("words.txt");
    fs::write(&path, list.join("\n") + "\n").unwrap();
    WordFiles {
        words: path,
        answers: dir.join("answers.txt"),
    }
}

#[test]
fn small_vocabulary_end_to_end() {
    let dir = scratch_dir("end_to_end");
    let files = write_words(&dir, &SMALL);
    let options = SolveOptions {
        output: dir.join("output.json"),
        progress: false,
        search: SearchConfig {
            max_attempts: 5,
            ..SearchConfig::default()
        },
        ..SolveOptions::default()
    };

    let summary = run_solve(&files, &options).unwrap();
    assert_eq!(summary.solved().count(), 1);

    let tree = load_tree(&options.output, None).unwrap();
    assert_eq!(tree.guess.text(), "crane");
    assert!(tree.next_guesses.len() >= 2);
    assert!(tree.depth() <= 5);

    let stats = replay_all(&tree, &words(&SMALL), 5, false).unwrap();
    assert_eq!(stats.solved(), SMALL.len());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn solutions_file_uses_guess_and_next_guesses() {
    let dir = scratch_dir("json_shape");
    let files = write_words(&dir, &SMALL);
    let options = SolveOptions {
        output: dir.join("output.json"),
        progress: false,
        ..SolveOptions::default()
    };
    run_solve(&files, &options).unwrap();

    let text = fs::read_to_string(&options.output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let trees = json.as_array().unwrap();
    assert_eq!(trees.len(), 1);

    let root = &trees[0];
    assert_eq!(root["guess"], "crane");
    let branches = root["nextGuesses"].as_object().unwrap();
    assert!(!branches.contains_key("ggggg"));
    for (pattern, children) in branches {
        assert_eq!(pattern.len(), 5);
        assert!(pattern.chars().all(|c| matches!(c, 'g' | 'y' | 'b')));
        assert!(children[0]["guess"].is_string());
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn unsolvable_run_writes_an_empty_array() {
    let dir = scratch_dir("empty");
    let files = write_words(&dir, &SMALL);
    let options = SolveOptions {
        output: dir.join("output.json"),
        progress: false,
        search: SearchConfig {
            max_attempts: 1,
            ..SearchConfig::default()
        },
        ..SolveOptions::default()
    };

    let summary = run_solve(&files, &options).unwrap();
    assert_eq!(summary.solved().count(), 0);

    let trees = read_solutions(fs::File::open(&options.output).unwrap()).unwrap();
    assert!(trees.is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn hard_mode_trees_follow_revealed_feedback() {
    let lexicon = Lexicon::new(words(&SMALL), None).unwrap();
    let config = SearchConfig {
        hard_mode: true,
        ..SearchConfig::default()
    };
    let engine = SearchEngine::new(Comparator::direct(&lexicon), config);

    let report = engine.solve(&Word::new("crane").unwrap()).unwrap();
    assert_eq!(report.mode, Some(Mode::Hard));

    let tree = report.outcome.tree().unwrap();
    let verified = verify_tree(tree, &words(&SMALL), 6, true);
    assert!(verified.is_sound(), "failures: {:?}", verified.failures);
    assert_eq!(verified.solved(), SMALL.len());
}

#[test]
fn repeated_solves_are_identical() {
    let lexicon = Lexicon::new(words(&SMALL), None).unwrap();
    let engine = SearchEngine::new(Comparator::direct(&lexicon), SearchConfig::default());
    let start = Word::new("brace").unwrap();

    let first = engine.solve(&start).unwrap();
    let second = engine.solve(&start).unwrap();
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.evaluations, second.evaluations);
}

#[test]
fn every_start_explored_in_vocabulary_order() {
    let lexicon = Lexicon::new(words(&SMALL), None).unwrap();
    let config = SearchConfig {
        threads: Some(2),
        ..SearchConfig::default()
    };
    let engine = SearchEngine::new(Comparator::direct(&lexicon), config);

    let reports = explore_all(&engine, None).unwrap();

    let starts: Vec<&str> = reports.iter().map(|r| r.start.text()).collect();
    assert_eq!(starts, SMALL);
    assert!(reports.iter().all(|r| r.is_solved()));
    for report in &reports {
        let sequential = engine.solve(&report.start).unwrap();
        assert_eq!(report.outcome, sequential.outcome);
    }
}
