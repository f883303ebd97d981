//! Code Breaker Solver - CLI
//!
//! Code breaker solver with TUI and CLI modes.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use codebreaker_solver::{
    commands::{SolveConfig, run_benchmark, run_simple, run_test_all, sample_secrets, solve_code},
    output::{print_benchmark_result, print_solve_result, print_test_all_statistics},
    solver::{GameConfig, Solver},
};

#[derive(Parser)]
#[command(
    name = "codebreaker_solver",
    about = "Mastermind-style code breaker solver using candidate elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    game: GameArgs,
}

#[derive(Args)]
struct GameArgs {
    /// Possible colours as a string of unique characters
    #[arg(short, long, global = true, default_value = "RGBYOP")]
    colors: String,

    /// Number of pegs in the code
    #[arg(short, long, global = true, default_value = "4")]
    pegs: usize,

    /// Allow a colour to appear more than once in the code
    #[arg(short, long, global = true)]
    duplicates: bool,
}

impl GameArgs {
    fn to_config(&self) -> GameConfig {
        GameConfig::new(self.colors.to_uppercase(), self.pegs, self.duplicates)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple {
        /// Prompt for the game parameters instead of using the flags
        #[arg(long)]
        prompt: bool,
    },

    /// Solve a specific secret code
    Solve {
        /// The secret code, e.g. RGBY
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Stop after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let game = cli.game.to_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple { prompt } => {
            run_simple((!prompt).then_some(game)).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve {
            code,
            verbose,
            max_guesses,
        } => run_solve_command(&game, &code, verbose, max_guesses),
        Commands::Benchmark { count, seed } => run_benchmark_command(&game, count, seed),
        Commands::TestAll { limit } => run_test_all_command(&game, limit),
    }
}

fn run_solve_command(
    game: &GameConfig,
    code: &str,
    verbose: bool,
    max_guesses: Option<usize>,
) -> Result<()> {
    let mut config = SolveConfig::new(code.to_uppercase());
    config.max_guesses = max_guesses;

    let result = solve_code(config, game).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(game: &GameConfig, count: usize, seed: Option<u64>) -> Result<()> {
    let solver = Solver::from_config(game)?;

    println!("Running benchmark on {count} random codes ({game})...");
    let secrets = sample_secrets(solver.candidates(), count, seed);

    let result = run_benchmark(game, &secrets).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(game: &GameConfig, limit: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Code Breaker Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nGame: {game}");
    println!();

    let stats = run_test_all(game, limit).map_err(|e| anyhow::anyhow!(e))?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(game: GameConfig) -> Result<()> {
    use codebreaker_solver::interactive::{App, run_tui};

    let app = App::new(game)?;
    run_tui(app)
}
