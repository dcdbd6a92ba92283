//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI.

use crate::game::{
    GameOutcome, GameSession, RecordedScore, ScoreSink, SessionEvent, SubmitResult,
};
use crate::output::{buffer_row, keyboard_summary, tile_row};
use colored::Colorize;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Score sink that prints the recorded result
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintSink;

impl ScoreSink for PrintSink {
    fn record_result(&mut self, score: RecordedScore) {
        let verdict = if score.won { "solved" } else { "missed" };
        println!(
            "\n{} {} today's word in {} with {}/6 attempts.\n",
            "Score recorded:".bright_cyan().bold(),
            verdict,
            score.time.to_string().bright_yellow(),
            score.attempts
        );
    }
}

/// Run the simple CLI game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(mut session: GameSession, sink: &mut dyn ScoreSink) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Property Wordle - Daily Challenge              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the property word of the day in 6 attempts.");
    println!("After each guess the tiles show how close you were:\n");
    println!("  - Green:  right letter, right spot");
    println!("  - Yellow: letter is in the word, different spot");
    println!("  - Gray:   letter is not in the word\n");
    println!("Type a 5-letter word and press Enter. 'quit' to exit.\n");

    if !session.dictionary_available() {
        println!(
            "{}",
            "Note: dictionary not loaded - accepting any 5-letter word.\n".bright_black()
        );
    }

    loop {
        if handle_events(&mut session, sink).quit_requested {
            return Ok(());
        }

        if session.status().is_terminal() {
            return finish_game(&mut session, sink);
        }

        print_board(&session);

        let attempt_no = session.attempts().len() + 1;
        let input = get_user_input(&format!("Attempt {attempt_no}/6"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Come back tomorrow for a new word!\n");
                return Ok(());
            }
            word => {
                // Line-based entry: retype the whole word each turn
                while !session.current_buffer().is_empty() {
                    session.delete_letter();
                }
                for ch in word.chars() {
                    session.append_letter(ch);
                }

                let now = Instant::now();
                match session.submit(now) {
                    SubmitResult::Ignored => {}
                    SubmitResult::Incomplete { .. } => {
                        println!("{}\n", "Word must be 5 letters!".red());
                    }
                    SubmitResult::Invalid { notify } => {
                        // The shake: jitter the rejected row in place
                        println!(" ~ {} ~", session.current_buffer().red().bold());
                        if notify {
                            println!("{}\n", "Not a valid word!".red().bold());
                        } else {
                            println!();
                        }
                        session.tick(now + Duration::from_millis(600));
                    }
                    SubmitResult::Accepted { feedback, outcome } => {
                        let attempt = session
                            .attempts()
                            .last()
                            .expect("accepted attempt was recorded");
                        println!("\n  {}\n", tile_row(attempt, &feedback));

                        if let Some(outcome) = outcome {
                            print_outcome(&session, outcome);
                        }
                    }
                }
            }
        }
    }
}

struct EventReport {
    quit_requested: bool,
}

/// Drain session events; a gate opening runs the registration prompt
fn handle_events(session: &mut GameSession, sink: &mut dyn ScoreSink) -> EventReport {
    while let Some(event) = session.poll_event() {
        match event {
            SessionEvent::GateOpened => {
                if !prompt_registration(session) {
                    return EventReport {
                        quit_requested: true,
                    };
                }
            }
            SessionEvent::ResultReady(score) => sink.record_result(score),
        }
    }
    EventReport {
        quit_requested: false,
    }
}

fn print_board(session: &GameSession) {
    println!("────────────────────────────────────────────────────────────");
    for (attempt, feedback) in session.attempts().iter().zip(session.feedback()) {
        println!("  {}", tile_row(attempt, feedback));
    }
    println!("  {}", buffer_row(session.current_buffer()));
    println!("────────────────────────────────────────────────────────────");

    let tried = keyboard_summary(session.keyboard());
    if !tried.is_empty() {
        println!("Letters tried: {tried}");
    }
    println!();
}

fn print_outcome(session: &GameSession, outcome: GameOutcome) {
    match outcome {
        GameOutcome::Won => {
            println!("{}", "═".repeat(62).bright_cyan());
            println!(
                "{}",
                "        🎉 ✨  Y O U   G O T   I T !  ✨ 🎉        "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(62).bright_cyan());

            let attempts = session.attempts().len();
            let performance = match attempts {
                1 => "🏆 Hole in one!",
                2 => "⭐ Outstanding!",
                3 => "💫 Great work!",
                4 => "✨ Nicely done!",
                5 => "👍 Got there!",
                _ => "😅 Phew, just made it!",
            };
            println!("\n  {}", performance.bright_yellow().bold());
        }
        GameOutcome::Lost => {
            println!("{}", "═".repeat(62).red());
            println!("  {}", "Out of attempts!".red().bold());
        }
    }

    if let Some(target) = session.target() {
        println!(
            "  The word was {}",
            target.text().bright_white().bold()
        );
    }
    if let Some(time) = session.completion_time() {
        println!("  Completed in: {}", time.to_string().bright_cyan());
    }
    println!();
}

/// Wrap up after the terminal transition: wait out the win delay, run
/// registration if the gate demands it, and deliver the score
fn finish_game(session: &mut GameSession, sink: &mut dyn ScoreSink) -> Result<(), String> {
    // Let the scheduled gate opening fire for unregistered players
    while !session.is_registered() && !session.gate_open() {
        std::thread::sleep(Duration::from_millis(100));
        session.tick(Instant::now());
    }
    handle_events(session, sink);

    println!("Come back tomorrow for a new word! 👋\n");
    Ok(())
}

/// Registration interstitial; returns `false` if the player quits instead
fn prompt_registration(session: &mut GameSession) -> bool {
    println!("\n{}", "┌──────────────────────────────────────────┐".cyan());
    println!(
        "{}",
        "│   Join the leaderboard to keep playing   │".cyan().bold()
    );
    println!("{}", "└──────────────────────────────────────────┘".cyan());
    println!("('quit' to exit the game)\n");

    loop {
        let Ok(name) = get_user_input("Player name") else {
            return false;
        };
        if name.eq_ignore_ascii_case("quit") {
            return false;
        }
        if name.is_empty() {
            println!("{}", "Please enter a name.".red());
            continue;
        }

        let Ok(email) = get_user_input("Email") else {
            return false;
        };
        if email.eq_ignore_ascii_case("quit") {
            return false;
        }
        if !looks_like_email(&email) {
            println!("{}", "That doesn't look like an email address.".red());
            continue;
        }

        session.registration_completed();
        println!(
            "\n{} Welcome, {}!\n",
            "✓".green().bold(),
            name.bright_white().bold()
        );
        return true;
    }
}

/// Minimal shape check; real validation belongs to the identity service
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
