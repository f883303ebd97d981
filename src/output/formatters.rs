//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};
use colored::{ColoredString, Colorize};

/// Color a single peg by its conventional letter
///
/// Letters without an obvious terminal color are shown bold.
#[must_use]
pub fn colorize_peg(peg: char) -> ColoredString {
    let text = peg.to_string();
    match peg.to_ascii_uppercase() {
        'R' => text.red().bold(),
        'G' => text.green().bold(),
        'B' => text.blue().bold(),
        'Y' => text.yellow().bold(),
        'O' => text.bright_red().bold(),
        'P' | 'M' => text.magenta().bold(),
        'C' => text.cyan().bold(),
        'W' => text.white().bold(),
        'K' => text.bright_black().bold(),
        _ => text.bold(),
    }
}

/// Format a code with each peg colored
#[must_use]
pub fn colorize_code(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|&peg| colorize_peg(peg).to_string())
        .collect()
}

/// Format feedback as peg symbols
#[must_use]
pub fn feedback_pegs(feedback: Feedback, code_length: usize) -> String {
    feedback.to_pegs(code_length)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of the code space already ruled out, in percent
#[must_use]
pub fn eliminated_percent(remaining: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (1.0 - remaining as f64 / total as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_code_keeps_text_without_colors() {
        colored::control::set_override(false);
        assert_eq!(colorize_code(&Code::from("RGXY")), "RGXY");
    }

    #[test]
    fn feedback_pegs_pads_to_length() {
        assert_eq!(feedback_pegs(Feedback::new(1, 1), 4), "●○··");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn eliminated_percent_bounds() {
        assert!((eliminated_percent(24, 24)).abs() < f64::EPSILON);
        assert!((eliminated_percent(0, 24) - 100.0).abs() < f64::EPSILON);
        assert!((eliminated_percent(6, 24) - 75.0).abs() < 1e-9);
        assert!((eliminated_percent(0, 0) - 100.0).abs() < f64::EPSILON);
    }
}
