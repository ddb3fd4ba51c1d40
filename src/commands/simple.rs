//! Simple interactive CLI mode
//!
//! Walks a saved decision tree with feedback typed on stdin, no TUI.

use crate::core::Pattern;
use crate::tree::{DecisionNode, PlaybackError, Step, TreeCursor};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(tree: &DecisionNode, max_attempts: usize) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(tree, max_attempts, stdin.lock(), stdout.lock())
}

/// Play against a tree, reading commands and feedback line by line
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    tree: &DecisionNode,
    max_attempts: usize,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", "  Wordle Prover - Tree Playback".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;
    writeln!(out, "Play each suggested guess, then enter the feedback:")?;
    writeln!(out, "  - g/G/🟩 for green, y/Y/🟨 for yellow, b/-/_/⬜ for gray")?;
    writeln!(out, "  - 'win' if the guess was right")?;
    writeln!(out, "Commands: 'quit', 'new', 'undo'\n")?;

    let mut cursor = TreeCursor::new(tree);

    loop {
        if !cursor.is_solved() {
            writeln!(out, "{}", "─".repeat(62))?;
            writeln!(
                out,
                "Turn {}: play {}",
                cursor.attempt(),
                cursor.current().guess.text().to_uppercase().bright_yellow().bold()
            )?;
        }

        let Some(line) = prompt(&mut input, &mut out, "Feedback")? else {
            return Ok(());
        };

        let pattern = match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\nBye!")?;
                return Ok(());
            }
            "new" | "n" => {
                cursor.reset();
                writeln!(out, "\nNew game started!\n")?;
                continue;
            }
            "undo" | "u" => {
                if cursor.undo() {
                    writeln!(out, "Undone! Back to turn {}\n", cursor.attempt())?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
                continue;
            }
            "win" | "correct" | "solved" => Pattern::PERFECT,
            text => match text.parse::<Pattern>() {
                Ok(pattern) => pattern,
                Err(err) => {
                    writeln!(out, "{} {err}\n", "Invalid feedback:".red())?;
                    continue;
                }
            },
        };

        match cursor.advance(pattern) {
            Ok(Step::Solved { attempts }) => {
                print_solved(&mut out, &cursor, attempts)?;
            }
            Ok(Step::Next(_)) if cursor.attempt() > max_attempts => {
                writeln!(
                    out,
                    "{}",
                    format!("The tree needs more than {max_attempts} guesses here. 'undo' or 'new'.")
                        .red()
                )?;
            }
            Ok(Step::Next(_)) => {}
            Err(PlaybackError::Finished) => {
                writeln!(out, "Already solved. Type 'new' to play again or 'quit'.")?;
            }
            Err(err) => {
                writeln!(out, "{} Check the feedback or type 'undo'.\n", err.to_string().red())?;
            }
        }
    }
}

fn print_solved<W: Write>(out: &mut W, cursor: &TreeCursor<'_>, attempts: usize) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    )?;
    for (i, (word, pattern)) in cursor.history().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            pattern.to_emoji()
        )?;
    }
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "Type 'new' to play again or 'quit'.\n")?;
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
