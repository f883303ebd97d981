//! TUI application state and logic

use crate::core::Feedback;
use crate::solver::{GameConfig, Solver, SolverError, SolverState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub solver: Solver,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    Finished,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_solved: usize,
    pub contradictions: usize,
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `SolverError` if the game parameters are invalid.
    pub fn new(config: GameConfig) -> Result<Self, SolverError> {
        let solver = Solver::from_config(&config)?;

        let mut app = Self {
            config,
            solver,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Play the suggested guess in your game.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback as 'black white' (e.g. '2 1') or pegs ('BBW')"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        };
        app.refresh_mode();
        Ok(app)
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let feedback = match input.parse::<Feedback>() {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&e, MessageStyle::Error);
                return;
            }
        };

        if let Err(e) = self.solver.give(feedback) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        self.input_buffer.clear();
        debug!(target: "tui", "feedback {feedback}: {} remain", self.solver.possible_codes());

        match self.solver.state() {
            SolverState::Solved => {
                self.stats.total_games += 1;
                self.stats.games_solved += 1;
                let message = self.solver.next_guess().map_or_else(String::new, |code| {
                    format!(
                        "🎉 The code is {code}! Found after {} feedback rounds.",
                        self.solver.history().len()
                    )
                });
                self.add_message(&message, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SolverState::Unsolveable => {
                self.stats.total_games += 1;
                self.stats.contradictions += 1;
                self.add_message(
                    "No codes remain - did you mistype feedback? Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            SolverState::Active => {
                self.add_message(
                    &format!("{} possible codes remaining", self.solver.possible_codes()),
                    MessageStyle::Info,
                );
            }
        }
        self.refresh_mode();
    }

    pub fn new_game(&mut self) {
        // Parameters were validated when the app was created
        if let Ok(solver) = Solver::from_config(&self.config) {
            self.solver = solver;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.refresh_mode();
    }

    /// Replay every feedback except the last into a fresh solver
    pub fn undo_last(&mut self) {
        let history = self.solver.history().to_vec();
        let Some((_, kept)) = history.split_last() else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };

        let Ok(mut solver) = Solver::from_config(&self.config) else {
            return;
        };
        for (guess, feedback) in kept {
            if solver.give_feedback_for(guess, *feedback).is_err() {
                break;
            }
        }

        // The undone game no longer counts as finished
        match self.solver.state() {
            SolverState::Solved => {
                self.stats.total_games = self.stats.total_games.saturating_sub(1);
                self.stats.games_solved = self.stats.games_solved.saturating_sub(1);
            }
            SolverState::Unsolveable => {
                self.stats.total_games = self.stats.total_games.saturating_sub(1);
                self.stats.contradictions = self.stats.contradictions.saturating_sub(1);
            }
            SolverState::Active => {}
        }

        self.solver = solver;
        self.input_buffer.clear();
        self.add_message("Undone!", MessageStyle::Info);
        self.refresh_mode();
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

    fn refresh_mode(&mut self) {
        self.input_mode = if self.solver.state() == SolverState::Active {
            InputMode::Feedback
        } else {
            InputMode::Finished
        };
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('u') => self.undo_last(),
            _ if self.input_mode == InputMode::Finished => {}
            KeyCode::Char(c) if c.is_ascii_digit() || " ,/bBwW-·".contains(c) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                let input = self.input_buffer.clone();
                self.handle_feedback(&input);
            }
            _ => {}
        }
    }
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
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameConfig::new("RGBY", 4, false)).unwrap()
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(App::new(GameConfig::new("", 4, false)).is_err());
    }

    #[test]
    fn feedback_narrows_candidates() {
        let mut app = app();
        type_str(&mut app, "0 4");

        assert_eq!(app.solver.possible_codes(), 9);
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn perfect_feedback_finishes_game() {
        let mut app = app();
        type_str(&mut app, "4 0");

        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.games_solved, 1);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn contradiction_then_undo() {
        let mut app = app();
        type_str(&mut app, "3 1");
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.contradictions, 1);

        app.handle_key(KeyCode::Char('u'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.solver.possible_codes(), 24);
        assert_eq!(app.stats.contradictions, 0);
    }

    #[test]
    fn undo_replays_earlier_feedback() {
        let mut app = App::new(GameConfig::new("RGBYOP", 4, false)).unwrap();
        type_str(&mut app, "0 2");
        let after_first = app.solver.possible_codes();
        type_str(&mut app, "1 1");

        app.undo_last();
        assert_eq!(app.solver.possible_codes(), after_first);
        assert_eq!(app.solver.history().len(), 1);
    }

    #[test]
    fn invalid_feedback_keeps_state() {
        let mut app = app();
        app.handle_feedback("abc");

        assert_eq!(app.solver.possible_codes(), 24);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn letters_outside_feedback_are_ignored() {
        let mut app = app();
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "2");

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn new_game_resets() {
        let mut app = app();
        type_str(&mut app, "0 4");
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);

        assert_eq!(app.solver.possible_codes(), 24);
        assert!(app.solver.history().is_empty());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m9");
    }
}
