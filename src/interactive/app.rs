//! TUI application state and logic

use crate::game::{GameSession, MemorySink, ScoreSink, SessionEvent, SubmitResult};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Which widget currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing letters onto the board
    Board,
    /// Filling in the registration dialog
    Registration,
    /// Game over, result on screen
    GameOver,
}

/// Active field of the registration dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub session: GameSession,
    pub sink: MemorySink,
    pub messages: Vec<Message>,
    pub reg_name: String,
    pub reg_email: String,
    pub reg_field: RegistrationField,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            sink: MemorySink::default(),
            messages: Vec::new(),
            reg_name: String::new(),
            reg_email: String::new(),
            reg_field: RegistrationField::Name,
            should_quit: false,
        };

        app.add_message(
            "Guess the property word of the day in 6 attempts.",
            MessageStyle::Info,
        );
        if !app.session.dictionary_available() {
            app.add_message(
                "Dictionary not loaded - accepting any 5-letter word.",
                MessageStyle::Info,
            );
        }
        app
    }

    /// Derive the input mode from the session
    ///
    /// The registration dialog wins whenever the gate is open; otherwise a
    /// finished game shows the result screen.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.session.gate_open() {
            InputMode::Registration
        } else if self.session.status().is_terminal() {
            InputMode::GameOver
        } else {
            InputMode::Board
        }
    }

    pub fn handle_submit(&mut self) {
        match self.session.submit(Instant::now()) {
            SubmitResult::Ignored => {}
            SubmitResult::Incomplete { .. } => {
                self.add_message("Word must be 5 letters!", MessageStyle::Error);
            }
            SubmitResult::Invalid { notify } => {
                if notify {
                    self.add_message("Not a valid word!", MessageStyle::Error);
                }
            }
            SubmitResult::Accepted { outcome, .. } => {
                if let Some(outcome) = outcome {
                    if outcome.won() {
                        let celebration = match self.session.attempts().len() {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two attempts! 🔥",
                            3 => "✨ SPLENDID! Three attempts! ✨",
                            4 => "👏 GREAT JOB! Four attempts! 👏",
                            5 => "🎉 NICE WORK! Five attempts! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                    } else if let Some(target) = self.session.target() {
                        let text = format!("Out of attempts! The word was {}.", target.text());
                        self.add_message(&text, MessageStyle::Error);
                    }
                    if let Some(time) = self.session.completion_time() {
                        let text = format!("Completed in {time}.");
                        self.add_message(&text, MessageStyle::Info);
                    }
                }
            }
        }
    }

    pub fn handle_registration_submit(&mut self) {
        if self.reg_name.trim().is_empty() {
            self.add_message("Please enter a player name.", MessageStyle::Error);
            self.reg_field = RegistrationField::Name;
            return;
        }
        if !looks_like_email(self.reg_email.trim()) {
            self.add_message(
                "That doesn't look like an email address.",
                MessageStyle::Error,
            );
            self.reg_field = RegistrationField::Email;
            return;
        }

        self.session.registration_completed();
        let text = format!("Welcome, {}!", self.reg_name.trim());
        self.add_message(&text, MessageStyle::Success);
    }

    /// Drain session events into messages and the score sink
    pub fn process_events(&mut self) {
        while let Some(event) = self.session.poll_event() {
            match event {
                SessionEvent::GateOpened => {
                    self.add_message(
                        "Join the leaderboard to keep playing!",
                        MessageStyle::Info,
                    );
                }
                SessionEvent::ResultReady(score) => {
                    self.sink.record_result(score);
                    let text = format!(
                        "Score recorded: {}/6 attempts in {}.",
                        score.attempts, score.time
                    );
                    self.add_message(&text, MessageStyle::Success);
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Minimal shape check; real validation belongs to the identity service
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.session.tick(Instant::now());
        app.process_events();

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Short poll keeps the shake and gate deadlines moving
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.should_quit = true;
                    break;
                }

                match app.input_mode() {
                    InputMode::Board => match key.code {
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char(c) => {
                            app.session.append_letter(c);
                        }
                        KeyCode::Backspace => {
                            app.session.delete_letter();
                        }
                        KeyCode::Enter => {
                            app.handle_submit();
                        }
                        _ => {}
                    },
                    InputMode::Registration => match key.code {
                        // No dismiss: the dialog stays until registration
                        KeyCode::Tab => {
                            app.reg_field = match app.reg_field {
                                RegistrationField::Name => RegistrationField::Email,
                                RegistrationField::Email => RegistrationField::Name,
                            };
                        }
                        KeyCode::Char(c) => {
                            let field = match app.reg_field {
                                RegistrationField::Name => &mut app.reg_name,
                                RegistrationField::Email => &mut app.reg_email,
                            };
                            if field.len() < 40 && !c.is_control() {
                                field.push(c);
                            }
                        }
                        KeyCode::Backspace => {
                            let field = match app.reg_field {
                                RegistrationField::Name => &mut app.reg_name,
                                RegistrationField::Email => &mut app.reg_email,
                            };
                            field.pop();
                        }
                        KeyCode::Enter => {
                            app.handle_registration_submit();
                        }
                        _ => {}
                    },
                    InputMode::GameOver => match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        _ => {
                            // Result stays on screen; nothing else to do
                        }
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
