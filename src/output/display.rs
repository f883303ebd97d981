//! Display functions for command results

use super::formatters::{colorize_code, create_progress_bar, eliminated_percent, feedback_pegs};
use crate::commands::{BenchmarkResult, SolveResult, TestAllStatistics};
use crate::core::Code;
use colored::Colorize;
use std::collections::HashMap;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        colorize_code(&Code::from(result.secret.as_str()))
    );
    println!("{}", "─".repeat(60).cyan());

    let total = result.guesses.first().map_or(0, |step| step.candidates_before);

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colorize_code(&Code::from(step.code.as_str())),
            feedback_pegs(step.feedback, result.code_length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
            let pct = eliminated_percent(step.candidates_after, total);
            println!(
                "  Eliminated: [{}] {pct:.1}%",
                create_progress_bar(pct, 100.0, 30).green()
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.total_codes);
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    if stats.total_codes > 0 {
        println!(
            "  Successfully solved: {} {}",
            stats.solved,
            format!(
                "({:.1}%)",
                stats.solved as f64 / stats.total_codes as f64 * 100.0
            )
            .green()
        );
    }
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {}",
            stats.failed.to_string().red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Guesses (min/max):   {}/{}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    print_distribution(&stats.guess_distribution, stats.solved);

    if !stats.worst_codes.is_empty() {
        println!("\n🐢 {}", "Hardest Codes".bright_cyan().bold());
        for (code, guesses) in &stats.worst_codes {
            let path: Vec<String> = guesses
                .iter()
                .map(|guess| colorize_code(&Code::from(guess.as_str())))
                .collect();
            println!(
                "  {} - {} guesses: {}",
                colorize_code(&Code::from(code.as_str())),
                guesses.len(),
                path.join(" → ")
            );
        }
    }
}

fn print_distribution(distribution: &HashMap<usize, usize>, total: usize) {
    if total == 0 {
        return;
    }

    let mut rows: Vec<(usize, usize)> = distribution.iter().map(|(&k, &v)| (k, v)).collect();
    rows.sort_unstable();

    for (guess_count, count) in rows {
        let pct = (count as f64 / total as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count:2}: {bar} {count:6} ({pct:5.1}%)");
    }
}
