//! Wordle Strategy Prover - CLI
//!
//! Proves that a starting word always wins within the attempt budget, writes
//! the decision trees, and plays them back.

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordle_prover::{
    commands::{
        SolveOptions, TableSource, WordFiles, load_answers, load_tree, replay_all, replay_answer,
        run_precompute, run_simple, run_solve, run_verify,
    },
    core::{CandidateOrder, Coverage, Word},
    output::{
        print_precompute_summary, print_replay, print_replay_statistics, print_solve_summary,
        print_verify_report,
    },
    solver::{BucketOrder, DEFAULT_MAX_ATTEMPTS, PoolTier, SearchConfig},
};

#[derive(Parser)]
#[command(
    name = "wordle_prover",
    about = "Proves a Wordle starting word always wins and builds its decision tree",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments of the default `solve` command
    #[command(flatten)]
    solve: SolveArgs,

    /// Vocabulary file, one word per line
    #[arg(long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Answer list file, used with --use-answer-list
    #[arg(long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a winning strategy (default)
    Solve(SolveArgs),

    /// Precompute the answer × guess comparison table
    Precompute {
        /// Restrict answers to the answer list
        #[arg(short, long)]
        use_answer_list: bool,

        /// Output file
        #[arg(short, long, default_value = "table.json")]
        output: PathBuf,
    },

    /// Replay answers through a saved tree
    Replay {
        #[command(flatten)]
        tree: TreeArgs,

        /// Replay only this answer
        #[arg(long)]
        answer: Option<String>,

        /// Replay the answer list instead of the vocabulary
        #[arg(short, long)]
        use_answer_list: bool,
    },

    /// Check that a saved tree solves every answer
    Verify {
        #[command(flatten)]
        tree: TreeArgs,

        /// Also require every guess to respect earlier feedback
        #[arg(long)]
        hard_mode: bool,

        /// Check the answer list instead of the vocabulary
        #[arg(short, long)]
        use_answer_list: bool,
    },

    /// Walk a saved tree by typing feedback (line mode)
    Play {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Walk a saved tree in a terminal UI
    Browse {
        #[command(flatten)]
        tree: TreeArgs,
    },
}

#[derive(Args, Clone)]
struct SolveArgs {
    /// Starting word to prove
    #[arg(short = 'w', long, default_value = "crane")]
    starting_word: String,

    /// Every guess must respect all revealed feedback
    #[arg(long)]
    hard_mode: bool,

    /// Check every vocabulary word as a starting word
    #[arg(short, long)]
    all: bool,

    /// Restrict possible answers to the answer list
    #[arg(short, long)]
    use_answer_list: bool,

    /// Attempt budget, the starting word included
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    max_attempts: usize,

    /// Worker threads for --all (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Enumeration order of candidate guesses
    #[arg(long, value_enum, default_value_t = OrderArg::Listed)]
    order: OrderArg,

    /// Seed for --order shuffled
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Pool tiers tried for each bucket, in order (bucket, constrained, open);
    /// including `open` runs the pass in open mode
    #[arg(long, value_delimiter = ',')]
    tiers: Option<Vec<PoolTier>>,

    /// With --hard-mode, retry in open mode when hard mode fails
    #[arg(long)]
    relax: bool,

    /// Order in which feedback buckets are resolved
    #[arg(long, value_enum, default_value_t = BucketOrderArg::Pattern)]
    bucket_order: BucketOrderArg,

    /// Comparison table written by `precompute`
    #[arg(long, conflicts_with = "precompute")]
    table: Option<PathBuf>,

    /// Build the comparison table in memory before searching
    #[arg(long)]
    precompute: bool,

    /// Reject a --table that misses any answer/guess pair
    #[arg(long, requires = "table")]
    require_table: bool,

    /// Output file for the solved trees
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,
}

#[derive(Args, Clone)]
struct TreeArgs {
    /// Solutions file written by `solve`
    #[arg(long, default_value = "output.json")]
    tree: PathBuf,

    /// Pick the tree opening with this word (default: the first)
    #[arg(short = 'w', long)]
    start: Option<String>,

    /// Attempt budget
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Listed,
    Alphabetical,
    Shuffled,
}

#[derive(Clone, Copy, ValueEnum)]
enum BucketOrderArg {
    Pattern,
    Largest,
}

impl SolveArgs {
    fn into_options(self) -> SolveOptions {
        let order = match self.order {
            OrderArg::Listed => CandidateOrder::Listed,
            OrderArg::Alphabetical => CandidateOrder::Alphabetical,
            OrderArg::Shuffled => CandidateOrder::Shuffled(self.seed),
        };
        let table = match (self.table, self.precompute) {
            (Some(path), _) => TableSource::File {
                path,
                coverage: if self.require_table {
                    Coverage::Strict
                } else {
                    Coverage::Fallback
                },
            },
            (None, true) => TableSource::Build,
            (None, false) => TableSource::Direct,
        };
        let bucket_order = match self.bucket_order {
            BucketOrderArg::Pattern => BucketOrder::Pattern,
            BucketOrderArg::Largest => BucketOrder::LargestFirst,
        };

        SolveOptions {
            starting_word: self.starting_word,
            explore_all: self.all,
            use_answer_list: self.use_answer_list,
            order,
            table,
            search: SearchConfig {
                max_attempts: self.max_attempts,
                hard_mode: self.hard_mode,
                relax: self.relax,
                tiers: self.tiers,
                bucket_order,
                threads: self.threads,
            },
            output: self.output,
            progress: true,
        }
    }
}

impl TreeArgs {
    fn start_word(&self) -> Result<Option<Word>> {
        Ok(self.start.as_deref().map(Word::new).transpose()?)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let files = WordFiles {
        words: cli.words,
        answers: cli.answers,
    };
    let verbose = cli.verbose > 0;

    // Default to Solve if no command given
    let command = cli.command.unwrap_or(Commands::Solve(cli.solve));

    match command {
        Commands::Solve(args) => run_solve_command(&files, args, verbose),
        Commands::Precompute {
            use_answer_list,
            output,
        } => run_precompute_command(&files, use_answer_list, &output),
        Commands::Replay {
            tree,
            answer,
            use_answer_list,
        } => run_replay_command(&files, &tree, answer.as_deref(), use_answer_list),
        Commands::Verify {
            tree,
            hard_mode,
            use_answer_list,
        } => run_verify_command(&files, &tree, hard_mode, use_answer_list),
        Commands::Play { tree } => {
            let root = load_tree(&tree.tree, tree.start_word()?.as_ref())?;
            run_simple(&root, tree.max_attempts)
        }
        Commands::Browse { tree } => {
            use wordle_prover::interactive::{App, run_tui};

            let root = load_tree(&tree.tree, tree.start_word()?.as_ref())?;
            run_tui(App::new(&root, tree.max_attempts))
        }
    }
}

fn run_solve_command(files: &WordFiles, args: SolveArgs, verbose: bool) -> Result<()> {
    let options = args.into_options();
    let summary = run_solve(files, &options)?;
    print_solve_summary(&summary, verbose);
    Ok(())
}

fn run_precompute_command(files: &WordFiles, use_answer_list: bool, output: &Path) -> Result<()> {
    let summary = run_precompute(files, use_answer_list, output)?;
    print_precompute_summary(&summary, output);
    Ok(())
}

fn run_replay_command(
    files: &WordFiles,
    tree: &TreeArgs,
    answer: Option<&str>,
    use_answer_list: bool,
) -> Result<()> {
    let root = load_tree(&tree.tree, tree.start_word()?.as_ref())?;

    if let Some(answer) = answer {
        let answer = Word::new(answer)?;
        let game = replay_answer(&root, &answer, tree.max_attempts)?;
        print_replay(&game);
        return Ok(());
    }

    let answers = load_answers(files, use_answer_list)?;
    let stats = replay_all(&root, &answers, tree.max_attempts, true)?;
    print_replay_statistics(&stats);
    Ok(())
}

fn run_verify_command(
    files: &WordFiles,
    tree: &TreeArgs,
    hard_mode: bool,
    use_answer_list: bool,
) -> Result<()> {
    let root = load_tree(&tree.tree, tree.start_word()?.as_ref())?;
    let answers = load_answers(files, use_answer_list)?;

    let report = run_verify(&root, &answers, tree.max_attempts, hard_mode);
    print_verify_report(&report, hard_mode);

    if !report.is_sound() {
        anyhow::bail!(
            "tree fails for {} of {} answers",
            report.failures.len(),
            report.checked
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn max_attempts_is_parsed_and_bounded() {
        let cli = Cli::try_parse_from(["wordle_prover", "--max-attempts", "4"]).unwrap();
        assert_eq!(cli.solve.max_attempts, 4);

        let cli = Cli::try_parse_from(["wordle_prover"]).unwrap();
        assert_eq!(cli.solve.max_attempts, DEFAULT_MAX_ATTEMPTS);

        assert!(Cli::try_parse_from(["wordle_prover", "--max-attempts", "0"]).is_err());
    }

    #[test]
    fn tiers_accept_only_tier_names() {
        let cli = Cli::try_parse_from(["wordle_prover", "--tiers", "bucket,open"]).unwrap();
        assert_eq!(cli.solve.tiers, Some(vec![PoolTier::BUCKET, PoolTier::OPEN]));
        assert!(Cli::try_parse_from(["wordle_prover", "--tiers", "all"]).is_err());
    }
}
