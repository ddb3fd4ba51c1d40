//! Tree browser layout

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Draw the whole browser
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌳 WORDLE STRATEGY - Tree Browser")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Current guess
            Constraint::Percentage(60), // Branches
            Constraint::Min(4),         // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_branches(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let node = app.cursor.current();
    let content = if app.cursor.is_solved() {
        vec![Line::from(format!("Solved in {} guesses", app.cursor.attempt() - 1))]
    } else {
        vec![
            Line::from(vec![
                Span::raw(format!("Guess {}: ", app.cursor.attempt())),
                Span::styled(
                    node.guess.text().to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Subtree:  worst case {} more, {} nodes",
                node.depth(),
                node.node_count()
            )),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_branches(f: &mut Frame, app: &App, area: Rect) {
    let branches = app.branches();
    let items: Vec<ListItem> = if app.cursor.is_solved() {
        Vec::new()
    } else if branches.is_empty() {
        vec![ListItem::new("This guess is the answer: enter ggggg")]
    } else {
        branches
            .iter()
            .map(|branch| {
                ListItem::new(Line::from(vec![
                    Span::raw(branch.pattern.to_emoji()),
                    Span::raw(" → "),
                    Span::styled(
                        format!("{:<5}", branch.next_guess.to_uppercase()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!(" (≤{} more)", branch.depth),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Known Feedback ({}) ", branches.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history: Vec<ListItem> = app
        .cursor
        .history()
        .enumerate()
        .map(|(i, (word, pattern))| {
            ListItem::new(format!(
                "{}: {} {}",
                i + 1,
                word.text().to_uppercase(),
                pattern.to_emoji()
            ))
        })
        .collect();

    let list = List::new(history).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let used = app.cursor.history().count();
    let percent = (used * 100 / app.max_attempts.max(1)).min(100) as u16;
    let color = if used >= app.max_attempts {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{}", app.max_attempts));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 SOLVED! | Press 'n' for new game, 'u' to undo, 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (g=green y=yellow b=gray, or emojis) ",
            app.input.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let root = Paragraph::new(format!("Opening: {}", app.tree.guess.text().to_uppercase()))
        .alignment(Alignment::Center);
    f.render_widget(root, chunks[0]);

    let games = Paragraph::new(format!("Games solved: {}", app.stats.games))
        .alignment(Alignment::Center);
    f.render_widget(games, chunks[1]);

    let help = Paragraph::new("q/Esc: Quit | n: New Game | u: Undo | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
