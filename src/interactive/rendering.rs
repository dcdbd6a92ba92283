//! TUI rendering with ratatui
//!
//! Board, keyboard heatmap, message log, and the registration dialog.

use super::app::{App, InputMode, Message, MessageStyle, RegistrationField};
use crate::core::LetterFeedback;
use crate::game::{GameStatus, MAX_ATTEMPTS, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(5),     // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, &app.messages, chunks[3]);
    render_status(f, app, chunks[4]);

    // The registration dialog sits on top of everything while the gate is open
    if app.input_mode() == InputMode::Registration {
        render_registration(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    // Shake feedback: the frame flashes red while an invalid word is rejected
    let color = if app.session.is_shaking() {
        Color::Red
    } else {
        Color::Cyan
    };

    let header = Paragraph::new("🏠 PROPERTY WORDLE - Daily Challenge")
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(header, area);
}

fn feedback_style(feedback: LetterFeedback) -> Style {
    let bg = match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    };
    Style::default().fg(Color::White).bg(bg)
}

fn tile_spans(text: &str, styles: &[Style]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, style) in styles.iter().enumerate() {
        let letter = text.as_bytes().get(i).copied().map_or(' ', char::from);
        spans.push(Span::styled(
            format!(" {letter} "),
            style.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines: Vec<Line> = vec![Line::default()];

    // Submitted attempts with their feedback colors
    for (attempt, row) in session.attempts().iter().zip(session.feedback()) {
        let styles: Vec<Style> = row.iter().map(|&fb| feedback_style(fb)).collect();
        lines.push(tile_spans(attempt.text(), &styles));
        lines.push(Line::default());
    }

    let empty_style = Style::default().fg(Color::White).bg(Color::Black);
    let rows_shown = session.attempts().len();

    // The in-progress row
    if rows_shown < MAX_ATTEMPTS && session.status() == GameStatus::InProgress {
        let styles = vec![empty_style; WORD_LENGTH];
        lines.push(tile_spans(session.current_buffer(), &styles));
        lines.push(Line::default());
    }

    // Remaining empty rows
    let filled = rows_shown + usize::from(session.status() == GameStatus::InProgress);
    for _ in filled..MAX_ATTEMPTS {
        let styles = vec![empty_style; WORD_LENGTH];
        lines.push(tile_spans("", &styles));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for letter in row.bytes() {
                let style = match keyboard.classification(letter) {
                    Some(feedback) => feedback_style(feedback),
                    None => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(
                    (letter as char).to_string(),
                    style.add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard_widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard_widget, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
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

    let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let session = &app.session;

    let status_text = match session.status() {
        GameStatus::InProgress => format!("Attempts left: {}", session.attempts_remaining()),
        GameStatus::Won => "Solved! 🎉".to_string(),
        GameStatus::Lost => "Out of attempts".to_string(),
    };
    f.render_widget(
        Paragraph::new(status_text).alignment(Alignment::Center),
        chunks[0],
    );

    let time_text = session.completion_time().map_or_else(
        || {
            if session.dictionary_available() {
                String::new()
            } else {
                "Dictionary offline - all words accepted".to_string()
            }
        },
        |time| format!("Completed in {time}"),
    );
    f.render_widget(
        Paragraph::new(time_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    let help_text = match app.input_mode() {
        InputMode::Board => "Type letters | Enter: Submit | Esc: Quit",
        InputMode::Registration => "Tab: Switch field | Enter: Register",
        InputMode::GameOver => "q / Esc: Quit",
    };
    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_registration(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 11, f.area());
    f.render_widget(Clear, area);

    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::White);

    let (name_style, email_style) = match app.reg_field {
        RegistrationField::Name => (active, inactive),
        RegistrationField::Email => (inactive, active),
    };

    let content = vec![
        Line::default(),
        Line::from("Join the leaderboard to keep playing").alignment(Alignment::Center),
        Line::default(),
        Line::from(vec![
            Span::raw("  Name:  "),
            Span::styled(format!("{}_", app.reg_name), name_style),
        ]),
        Line::default(),
        Line::from(vec![
            Span::raw("  Email: "),
            Span::styled(format!("{}_", app.reg_email), email_style),
        ]),
        Line::default(),
        Line::from("Tab to switch, Enter to register")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
    ];

    let dialog = Paragraph::new(content).block(
        Block::default()
            .title(" Registration ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(dialog, area);
}

/// Center a fixed-height, percentage-width rectangle inside `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
