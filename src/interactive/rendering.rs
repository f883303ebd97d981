//! TUI rendering with ratatui
//!
//! Layout for the code breaker solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Code;
use crate::output::formatters::eliminated_percent;
use crate::solver::SolverState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
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

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal color for a peg letter
fn peg_color(peg: char) -> Color {
    match peg.to_ascii_uppercase() {
        'R' => Color::Red,
        'G' => Color::Green,
        'B' => Color::Blue,
        'Y' => Color::Yellow,
        'O' => Color::LightRed,
        'P' | 'M' => Color::Magenta,
        'C' => Color::Cyan,
        'W' => Color::White,
        'K' => Color::DarkGray,
        _ => Color::Gray,
    }
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.pegs()
        .iter()
        .map(|&peg| {
            Span::styled(
                format!("{peg} "),
                Style::default()
                    .fg(peg_color(peg))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎯 CODE BREAKER SOLVER - {}", app.config))
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
            Constraint::Length(6),      // Current guess
            Constraint::Percentage(50), // Candidates
            Constraint::Min(3),         // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = match (app.solver.state(), app.solver.next_guess()) {
        (SolverState::Active, Some(guess)) => {
            let mut spans = vec![Span::raw("Suggested: ")];
            spans.extend(code_spans(guess));
            (
                " Current Guess ",
                vec![
                    Line::from(spans),
                    Line::from(format!(
                        "Round:     {}",
                        app.solver.history().len() + 1
                    )),
                    Line::from(format!(
                        "Remaining: {} of {} codes",
                        app.solver.possible_codes(),
                        app.solver.total_codes()
                    )),
                ],
            )
        }
        (SolverState::Solved, Some(code)) => {
            let mut spans = vec![Span::styled(
                "The code is: ",
                Style::default().fg(Color::Green),
            )];
            spans.extend(code_spans(code));
            (" 🎉 Solved ", vec![Line::from(spans)])
        }
        _ => (
            " Unsolveable ",
            vec![Line::from(Span::styled(
                "No code matches the feedback. Did you make a mistake entering feedback?",
                Style::default().fg(Color::Red),
            ))],
        ),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.solver.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if candidates.len() <= 12 {
        candidates
            .iter()
            .map(|code| {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(code_spans(code));
                Line::from(spans)
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} candidates remaining", candidates.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (candidates.len() as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.solver.history();
    let code_length = app.solver.code_length();

    let history_items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, (guess, feedback))| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(code_spans(guess));
            spans.push(Span::raw(feedback.to_pegs(code_length)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.solver.possible_codes();
    let total = app.solver.total_codes();
    let pct = eliminated_percent(remaining, total);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Codes Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct.clamp(0.0, 100.0) as u16)
        .label(format!("{pct:.1}% | {remaining}/{total} remain"));

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

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Game over | 'n' new game, 'u' undo, 'q' quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (black white, e.g. '2 1', or pegs 'BBW') ",
            app.input_buffer.as_str(),
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state =
        Paragraph::new(format!("State: {}", app.solver.state())).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Solved: {}",
        app.stats.total_games, app.stats.games_solved
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.solver.possible_codes());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.input_mode == InputMode::Finished {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | n: New | Enter: Submit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GameConfig;
    use ratatui::backend::TestBackend;

    fn buffer_text(app: &App) -> String {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_active_game() {
        let app = App::new(GameConfig::new("RGBY", 4, false)).unwrap();
        let text = buffer_text(&app);

        assert!(text.contains("Current Guess"));
        assert!(text.contains("Candidates: 24"));
        assert!(text.contains("State: Active"));
    }

    #[test]
    fn renders_solved_game() {
        let mut app = App::new(GameConfig::new("RGBY", 4, false)).unwrap();
        app.handle_feedback("4 0");
        let text = buffer_text(&app);

        assert!(text.contains("Solved"));
        assert!(text.contains("Game over"));
    }

    #[test]
    fn peg_colors() {
        assert_eq!(peg_color('r'), Color::Red);
        assert_eq!(peg_color('Y'), Color::Yellow);
        assert_eq!(peg_color('#'), Color::Gray);
    }
}
