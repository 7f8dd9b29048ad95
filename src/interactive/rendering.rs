//! TUI rendering with ratatui
//!
//! Pure projection of app and round state onto the terminal; nothing here
//! mutates game state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::core::LetterFeedback;
use crate::round::LetterStatus;

use super::app::{App, MessageStyle};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Grid
            Constraint::Length(4), // Keyboard
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 GUESSWORD")
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

fn feedback_style(tag: LetterFeedback) -> Style {
    match tag {
        LetterFeedback::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Absent => Style::default().fg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let state = app.round.state();
    let mut lines: Vec<Line> = Vec::with_capacity(state.budget());

    // Committed rows, colored by feedback
    for record in state.history() {
        let spans: Vec<Span> = record
            .guess
            .text()
            .chars()
            .zip(record.feedback.tags())
            .flat_map(|(letter, &tag)| {
                [
                    Span::styled(format!(" {letter} "), feedback_style(tag)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    // Active row with cursor, unless the round is over
    if !state.outcome().is_over() {
        let spans: Vec<Span> = app
            .row_buffer
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let text = cell.map_or(" · ".to_string(), |c| format!(" {c} "));
                let style = if i == app.cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                [Span::styled(text, style), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    // Unrevealed rows
    let shown = state.attempt_index() + usize::from(!state.outcome().is_over());
    for _ in shown..state.budget() {
        let spans: Vec<Span> = (0..state.target().len())
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Grid "),
    );
    f.render_widget(grid, area);
}

fn letter_status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.round.keyboard();

    // Two rows of 13 letters each, A-M and N-Z
    let mut lines = Vec::with_capacity(2);
    for half in keyboard.iter().collect::<Vec<_>>().chunks(13) {
        let spans: Vec<Span> = half
            .iter()
            .flat_map(|&(letter, status)| {
                [
                    Span::styled((letter as char).to_string(), letter_status_style(status)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Letters "),
    );
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(msg.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Messages "),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.round.state();
    let status = format!(
        " {} letters │ attempt {}/{} │ Enter: submit │ Ctrl-N: new │ Esc: quit ",
        state.target().len(),
        state.attempt_index().min(state.budget().saturating_sub(1)) + 1,
        state.budget(),
    );

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(bar, area);
}
