//! Tree browser state and event loop

use crate::core::Pattern;
use crate::tree::{DecisionNode, PlaybackError, Step, TreeCursor};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io;

const MESSAGE_LOG: usize = 5;

/// Browser state: the loaded tree and the player's position in it
pub struct App<'a> {
    pub tree: &'a DecisionNode,
    pub cursor: TreeCursor<'a>,
    pub max_attempts: usize,
    pub input: String,
    pub messages: VecDeque<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    Solved,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Games finished in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games: usize,
    /// Games per number of guesses, index 0 unused
    pub by_attempts: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, attempts: usize) {
        self.games += 1;
        if self.by_attempts.len() <= attempts {
            self.by_attempts.resize(attempts + 1, 0);
        }
        self.by_attempts[attempts] += 1;
    }
}

/// A feedback the current node knows how to continue from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub pattern: Pattern,
    pub next_guess: String,
    /// Further guesses needed in the worst case after this one
    pub depth: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(tree: &'a DecisionNode, max_attempts: usize) -> Self {
        let mut app = Self {
            tree,
            cursor: TreeCursor::new(tree),
            max_attempts,
            input: String::new(),
            messages: VecDeque::with_capacity(MESSAGE_LOG),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        };
        app.log(
            &format!(
                "Loaded tree for {}: at most {} guesses, {} nodes",
                tree.guess.text().to_uppercase(),
                tree.depth(),
                tree.node_count()
            ),
            MessageStyle::Info,
        );
        app.log("Type the feedback you got, e.g. 'bygbb'", MessageStyle::Info);
        app
    }

    /// Continuations of the node whose guess is being played
    #[must_use]
    pub fn branches(&self) -> Vec<Branch> {
        self.cursor
            .current()
            .next_guesses
            .iter()
            .filter_map(|(pattern, children)| {
                children.first().map(|child| Branch {
                    pattern: *pattern,
                    next_guess: child.guess.text().to_string(),
                    depth: child.depth(),
                })
            })
            .collect()
    }

    /// Follow the branch for `feedback`, reporting the next guess or the win
    pub fn submit(&mut self, feedback: &str) {
        self.input.clear();
        let Ok(pattern) = feedback.parse::<Pattern>() else {
            self.log(
                &format!("'{feedback}' is not a pattern: use five of g/y/b"),
                MessageStyle::Error,
            );
            return;
        };

        match self.cursor.advance(pattern) {
            Ok(Step::Solved { attempts }) => {
                self.stats.record(attempts);
                self.input_mode = InputMode::Solved;
                self.log(&format!("Solved in {attempts}!"), MessageStyle::Success);
            }
            Ok(Step::Next(node)) => {
                let attempt = self.cursor.attempt();
                if attempt > self.max_attempts {
                    self.log(
                        &format!("Guess {attempt} is past the {}-guess budget", self.max_attempts),
                        MessageStyle::Error,
                    );
                } else {
                    self.log(
                        &format!("Guess {attempt}: {}", node.guess.text().to_uppercase()),
                        MessageStyle::Info,
                    );
                }
            }
            Err(PlaybackError::NoBranch { .. }) => self.log(
                &format!("No answer gives {pattern} here; recheck it or undo"),
                MessageStyle::Error,
            ),
            Err(err) => self.log(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Back to the root guess
    pub fn restart(&mut self) {
        self.cursor.reset();
        self.input.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.log(
            &format!("New game: open with {}", self.tree.guess.text().to_uppercase()),
            MessageStyle::Info,
        );
    }

    pub fn undo(&mut self) {
        if self.cursor.undo() {
            self.input_mode = InputMode::Feedback;
            self.log("Took back the last feedback", MessageStyle::Info);
        } else {
            self.log("Already at the first guess", MessageStyle::Error);
        }
    }

    pub fn log(&mut self, text: &str, style: MessageStyle) {
        if self.messages.len() == MESSAGE_LOG {
            self.messages.pop_front();
        }
        self.messages.push_back(Message {
            text: text.to_string(),
            style,
        });
    }

    /// Apply one key press
    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.input.is_empty() => self.should_quit = true,
            KeyCode::Char('n') if self.input.is_empty() => self.restart(),
            KeyCode::Char('u') if self.input.is_empty() => self.undo(),
            _ if self.input_mode == InputMode::Solved => {}
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let feedback = std::mem::take(&mut self.input);
                self.submit(&feedback);
            }
            _ => {}
        }
    }
}

/// Run the browser until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched into or out of raw
/// mode, or if drawing or reading events fails.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn event_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind == KeyEventKind::Press {
                app.on_key(key);
            }
        }
    }
    Ok(())
}
