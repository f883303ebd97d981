//! Simple interactive CLI mode
//!
//! Line-based prompts: read the game parameters, suggest a guess, read the
//! black and white feedback pegs, repeat until the code is known.

use crate::core::Feedback;
use crate::output::formatters::{colorize_code, feedback_pegs};
use crate::solver::{GameConfig, Solver, SolverState};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Input that is not an answer to the current prompt
enum Command {
    Quit,
    New,
    Undo,
}

/// Outcome of reading a prompt
enum Reply<T> {
    Value(T),
    Command(Command),
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// If `preset` is given and valid it is used for the first game, otherwise
/// the game parameters are prompted for.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(preset: Option<GameConfig>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(stdin.lock(), &mut stdout, preset)
}

/// Run the simple interactive mode over arbitrary input and output
///
/// End of input behaves like `quit`.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_simple_with<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    preset: Option<GameConfig>,
) -> Result<(), String> {
    let mut shell = Shell { input, output };
    shell.run(preset).map_err(|e| e.to_string())
}

struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    fn run(&mut self, preset: Option<GameConfig>) -> io::Result<()> {
        self.render_instructions()?;

        let mut preset = preset;
        loop {
            let Some(config) = self.read_game(preset.take())? else {
                return self.goodbye();
            };
            let Ok(mut solver) = Solver::from_config(&config) else {
                continue;
            };

            if !self.play(&config, &mut solver)? {
                return self.goodbye();
            }

            let again = self.prompt("Play again? (Y/N)")?;
            match again.as_deref().map(str::to_ascii_lowercase).as_deref() {
                // Reuse the last parameters
                Some("y" | "yes") => preset = Some(config),
                _ => return self.goodbye(),
            }
        }
    }

    /// Play one game. Returns false if the user quit.
    fn play(&mut self, config: &GameConfig, solver: &mut Solver) -> io::Result<bool> {
        while solver.state() == SolverState::Active {
            self.render_turn(solver)?;

            let feedback = match self.read_feedback()? {
                Reply::Value(feedback) => feedback,
                Reply::Command(Command::Quit) => return Ok(false),
                Reply::Command(Command::New) => {
                    if let Ok(fresh) = Solver::from_config(config) {
                        *solver = fresh;
                    }
                    writeln!(self.output, "\n🔄 New game started!")?;
                    continue;
                }
                Reply::Command(Command::Undo) => {
                    self.undo(config, solver)?;
                    continue;
                }
            };

            if let Err(e) = solver.give(feedback) {
                writeln!(self.output, "{}", e.to_string().red())?;
            }
        }

        self.render_outcome(solver)?;
        Ok(true)
    }

    /// Rebuild the game with every feedback except the last one
    fn undo(&mut self, config: &GameConfig, solver: &mut Solver) -> io::Result<()> {
        let history = solver.history().to_vec();
        let Some((_, kept)) = history.split_last() else {
            writeln!(self.output, "Nothing to undo!")?;
            return Ok(());
        };

        if let Ok(mut replayed) = Solver::from_config(config) {
            for (guess, feedback) in kept {
                if replayed.give_feedback_for(guess, *feedback).is_err() {
                    break;
                }
            }
            *solver = replayed;
            writeln!(self.output, "✓ Undone! Back to turn {}", kept.len() + 1)?;
        }
        Ok(())
    }

    /// Prompt until the parameters construct a valid solver
    fn read_game(&mut self, preset: Option<GameConfig>) -> io::Result<Option<GameConfig>> {
        if let Some(config) = preset {
            match Solver::from_config(&config) {
                Ok(_) => return Ok(Some(config)),
                Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
            }
        }

        loop {
            let colors = loop {
                match self.prompt("\nEnter the possible colours:")? {
                    None => return Ok(None),
                    Some(line) if !line.is_empty() => break line.to_uppercase(),
                    Some(_) => {}
                }
            };

            let code_length = loop {
                match self.prompt("\nEnter the number of pegs:")? {
                    None => return Ok(None),
                    Some(line) => {
                        if let Ok(n) = line.parse::<usize>() {
                            break n;
                        }
                    }
                }
            };

            let allow_duplicates = loop {
                match self.prompt("\nAre duplicate colours allowed? (Y/N)")? {
                    None => return Ok(None),
                    Some(line) if line.eq_ignore_ascii_case("y") => break true,
                    Some(line) if line.eq_ignore_ascii_case("n") => break false,
                    Some(_) => {}
                }
            };

            let config = GameConfig::new(colors, code_length, allow_duplicates);
            match Solver::from_config(&config) {
                Ok(_) => return Ok(Some(config)),
                Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
            }
        }
    }

    /// Read black then white counts, or a whole peg string at the first prompt
    ///
    /// A peg string at the white prompt may only hold white pegs; it is added
    /// to the black count already entered.
    fn read_feedback(&mut self) -> io::Result<Reply<Feedback>> {
        let black = match self.read_count("\nEnter the number of black feedback pegs:")? {
            Reply::Value(Count::Number(n)) => n,
            Reply::Value(Count::Full(feedback)) => return Ok(Reply::Value(feedback)),
            Reply::Command(c) => return Ok(Reply::Command(c)),
        };

        loop {
            match self.read_count("\nEnter the number of white feedback pegs:")? {
                Reply::Value(Count::Number(white)) => {
                    return Ok(Reply::Value(Feedback::new(black, white)));
                }
                Reply::Value(Count::Full(pegs)) if pegs.black == 0 => {
                    return Ok(Reply::Value(Feedback::new(black, pegs.white)));
                }
                Reply::Value(Count::Full(_)) => {
                    writeln!(self.output, "❌ Black pegs were already entered, enter white only")?;
                }
                Reply::Command(c) => return Ok(Reply::Command(c)),
            }
        }
    }

    fn read_count(&mut self, prompt: &str) -> io::Result<Reply<Count>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(Reply::Command(Command::Quit));
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(Reply::Command(Command::Quit)),
                "new" | "n" => return Ok(Reply::Command(Command::New)),
                "undo" | "u" => return Ok(Reply::Command(Command::Undo)),
                _ => {}
            }

            if let Ok(n) = line.parse::<usize>() {
                return Ok(Reply::Value(Count::Number(n)));
            }
            if let Ok(feedback) = line.parse::<Feedback>() {
                return Ok(Reply::Value(Count::Full(feedback)));
            }
            writeln!(self.output, "❌ Enter a number, or pegs such as 'BBW'")?;
        }
    }

    fn render_instructions(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "Welcome to Code Breaker Solver.".bold())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", "How to use:".bold())?;
        writeln!(
            self.output,
            "• Enter the possible colours as a sequence of unique characters. e.g. If the possible colours are Red, Green, Blue and Yellow, enter: RGBY"
        )?;
        writeln!(self.output, "• Enter the number of pegs in the code.")?;
        writeln!(
            self.output,
            "• Indicate whether duplicate colours are allowed within the code."
        )?;
        writeln!(
            self.output,
            "• The solver will suggest a guess. Enter the guess into the game, and then enter the number of black and white \"feedback\" pegs into the solver."
        )?;
        writeln!(self.output, "• Keep doing this until you win!")?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Commands: 'quit' to exit, 'new' to restart the game, 'undo' to undo the last feedback"
        )
    }

    fn render_turn(&mut self, solver: &Solver) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "There are {} possible codes.",
            solver.possible_codes()
        )?;
        if let Some(guess) = solver.next_guess() {
            writeln!(self.output, "Guess: {}", colorize_code(guess))?;
        }
        Ok(())
    }

    fn render_outcome(&mut self, solver: &Solver) -> io::Result<()> {
        writeln!(self.output)?;
        match solver.next_guess() {
            Some(code) if solver.is_solveable() => {
                writeln!(self.output, "The code is {}.", colorize_code(code))?;
                for (i, (guess, feedback)) in solver.history().iter().enumerate() {
                    writeln!(
                        self.output,
                        "  {}. {} {}",
                        i + 1,
                        colorize_code(guess),
                        feedback_pegs(*feedback, solver.code_length())
                    )?;
                }
            }
            _ => writeln!(
                self.output,
                "{}",
                "The code is not solveable. Did you make a mistake entering feedback?".red()
            )?,
        }
        Ok(())
    }

    fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n👋 Thanks for playing!")
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// A single count, or a complete feedback written as pegs
enum Count {
    Number(usize),
    Full(Feedback),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, preset: Option<GameConfig>) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        run_simple_with(input.as_bytes(), &mut output, preset).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn solves_after_perfect_feedback() {
        let out = run("rgby\n4\nn\n4\n0\nn\n", None);

        assert!(out.contains("There are 24 possible codes."));
        assert!(out.contains("Guess: RGBY"));
        assert!(out.contains("The code is RGBY."));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn reports_contradictory_feedback() {
        let out = run("RGBY\n4\nN\n3\n1\nn\n", None);
        assert!(out.contains("The code is not solveable."));
    }

    #[test]
    fn reprompts_on_invalid_parameters() {
        let out = run("RGR\n4\nN\nRGBY\nx\n2\nmaybe\nY\nquit\n", None);

        assert!(out.contains("not unique"));
        assert!(out.contains("There are 16 possible codes."));
    }

    #[test]
    fn zero_pegs_is_rejected() {
        let out = run("RGBY\n0\nN\n", None);
        assert!(out.contains("greater than or equal to 1"));
    }

    #[test]
    fn uses_preset_and_accepts_peg_strings() {
        let preset = GameConfig::new("RGBY", 4, false);
        let out = run("WWWW\nn\n", Some(preset));

        assert!(out.contains("There are 24 possible codes."));
        assert!(out.contains("There are 9 possible codes."));
    }

    #[test]
    fn white_peg_string_adds_to_black_count() {
        let preset = GameConfig::new("RGBY", 4, false);
        let out = run("2\nWW\nquit\n", Some(preset));

        assert!(out.contains("There are 6 possible codes."));
        assert!(!out.contains("not solveable"));
    }

    #[test]
    fn black_pegs_at_white_prompt_are_rejected() {
        let preset = GameConfig::new("RGBY", 4, false);
        let out = run("2\nBW\n2\nquit\n", Some(preset));

        assert!(out.contains("Black pegs were already entered"));
        assert!(out.contains("There are 6 possible codes."));
    }

    #[test]
    fn white_count_is_asked_after_all_black() {
        let preset = GameConfig::new("RGBY", 4, false);
        let out = run("4\nquit\n", Some(preset));

        assert!(out.contains("Enter the number of white feedback pegs:"));
        assert!(!out.contains("The code is RGBY."));
    }

    #[test]
    fn undo_restores_previous_turn() {
        let preset = GameConfig::new("RGBY", 4, false);
        let out = run("0\n4\nundo\nquit\n", Some(preset));

        assert!(out.contains("There are 9 possible codes."));
        assert!(out.contains("Undone! Back to turn 1"));
        assert_eq!(out.matches("There are 24 possible codes.").count(), 2);
    }

    #[test]
    fn undo_with_no_history() {
        let preset = GameConfig::new("RGBY", 4, false);
        let out = run("u\nq\n", Some(preset));
        assert!(out.contains("Nothing to undo!"));
    }

    #[test]
    fn end_of_input_quits() {
        let out = run("RGBY\n", None);
        assert!(out.contains("Thanks for playing"));
    }
}
