//! Wordle Entropy - CLI
//!
//! Entropy-ranked guessing over a precomputed outcome table, with self-play
//! simulation and an interactive helper for live games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::sync::Arc;
use wordle_entropy::{
    commands::{
        analyze_word, pick_targets, prepare_table, run_simple, run_simulation, solve_word,
    },
    config::{DEFAULT_CACHE_DIR, SolverConfig},
    core::Vocabulary,
    output::{
        formatters::progress_style, print_analysis_result, print_simulation_result,
        print_solve_result, print_table_status,
    },
    solver::{Solver, StrategyType},
    wordlists::{default_vocabulary, loader::vocabulary_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy",
    about = "Wordle decision engine: precomputed outcome tables and entropy-ranked guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: one-step (default, alias 'entropy') or two-step
    #[arg(short, long, global = true, default_value = "one-step")]
    strategy: StrategyType,

    /// Wordlist: 'default' (embedded) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Directory holding cached outcome tables
    #[arg(long, global = true, default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,

    /// Build the outcome table in memory only
    #[arg(long, global = true)]
    no_cache: bool,

    /// Maximum guesses per round
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (interactive helper for a live game, default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Self-play many rounds and report solver quality
    Simulate {
        /// Number of random answers to play
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Play every word in the vocabulary instead
        #[arg(short, long)]
        all: bool,

        /// Seed for reproducible answer sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build (or verify) the cached outcome table
    Table,
}

/// Load the vocabulary named by the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vocabulary> {
    match wordlist {
        "default" => default_vocabulary().context("embedded word list is invalid"),
        path => vocabulary_from_file(path).with_context(|| format!("failed to load '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SolverConfig::default()
        .with_strategy(cli.strategy)
        .with_max_guesses(cli.max_guesses)
        .with_cache_dir((!cli.no_cache).then_some(cli.cache_dir));

    let vocab = Arc::new(load_vocabulary(&cli.wordlist)?);
    let prepared = prepare_table(&vocab, config.cache_dir.as_deref())
        .context("failed to prepare the outcome table")?;

    let command = cli.command.unwrap_or(Commands::Simple);
    if matches!(command, Commands::Table) {
        print_table_status(&prepared, &vocab);
    }

    let table = Arc::new(prepared.table);
    let solver = Solver::new(config.strategy, vocab, table)?
        .with_max_guesses(config.max_guesses);

    match command {
        Commands::Simple => run_simple(&solver)?,
        Commands::Solve { word, verbose } => {
            let result = solve_word(&word, &solver)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &solver)?;
            print_analysis_result(&result);
        }
        Commands::Simulate { rounds, all, seed } => {
            run_simulate_command(&solver, &config, rounds, all, seed)?;
        }
        // Status already printed
        Commands::Table => {}
    }

    Ok(())
}

fn run_simulate_command(
    solver: &Solver,
    config: &SolverConfig,
    rounds: usize,
    all: bool,
    seed: Option<u64>,
) -> Result<()> {
    let vocab_len = solver.vocabulary().len();
    let targets: Vec<usize> = if all {
        (0..vocab_len).collect()
    } else {
        pick_targets(vocab_len, rounds, seed)
    };

    println!(
        "🎯 Simulating {} rounds with the {} strategy...",
        targets.len().to_string().bright_cyan(),
        config.strategy
    );

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(progress_style());
    pb.set_message("playing");

    let stats = run_simulation(solver, &targets, config.strategy.name(), || pb.inc(1))?;
    pb.finish_with_message("Complete!");

    print_simulation_result(&stats, config.max_guesses);
    Ok(())
}
