//! TUI rendering with ratatui
//!
//! Layout for the evil hangman game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Slot;
use crate::engine::GameStatus;
use crate::output::formatters::{gallows, letters_display, percent_of};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Guess budget
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
    render_budget(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 EVIL HANGMAN")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    render_word(f, app, chunks[0]);
    render_gallows(f, app, chunks[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let slots: Vec<Span> = match app.game.current_pattern() {
        Ok(pattern) => pattern
            .slots()
            .iter()
            .map(|slot| match slot {
                Slot::Hidden => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                Slot::Revealed(letter) => Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            })
            .collect(),
        Err(_) => vec![Span::raw("No words of this length")],
    };

    let content = vec![
        Line::from(""),
        Line::from(slots),
        Line::from(""),
        Line::from(format!(
            "Guessed: {}",
            letters_display(app.game.guessed_letters())
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.game.status() == GameStatus::Lost {
        Color::Red
    } else {
        Color::White
    };
    let drawing: Vec<Line> = gallows(app.game.wrong_guesses(), app.game.max_guesses())
        .lines()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(drawing)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Gallows ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_history(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            let (mark, color) = if entry.revealed == 0 {
                ("✗", Color::Red)
            } else {
                ("✓", Color::Green)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{mark} "), Style::default().fg(color)),
                Span::raw(format!(
                    "{}  {} → {} words",
                    entry.letter.to_ascii_uppercase(),
                    entry.candidates_before,
                    entry.candidates_after
                )),
            ]))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
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

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let left = app.game.guesses_left();
    let max = app.game.max_guesses();
    let percent = percent_of(left, max);
    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{max}"));
    f.render_widget(gauge, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let length_text = format!("{} letters", app.config.word_length);
    f.render_widget(
        Paragraph::new(length_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "a-z: Guess | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
