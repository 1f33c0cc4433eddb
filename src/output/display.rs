//! Display functions for command results

use super::formatters::{entropy_bar, histogram_width};
use crate::commands::{AnalysisResult, PreparedTable, SimulationStats, SolveResult};
use crate::core::Vocabulary;
use crate::solver::RoundState;
use crate::table::CacheStatus;
use colored::Colorize;

/// Print where the outcome table came from
pub fn print_table_status(prepared: &PreparedTable, vocab: &Vocabulary) {
    let status = match prepared.status {
        Some(CacheStatus::Hit) => "loaded from cache".green(),
        Some(CacheStatus::Built) => "built and cached".yellow(),
        Some(CacheStatus::Rebuilt) => "stale cache rebuilt".yellow(),
        None => "built in memory (cache disabled)".bright_black(),
    };

    println!(
        "📦 Outcome table {}×{} ({}): {} in {:.2}s",
        vocab.len(),
        vocab.len(),
        vocab.fingerprint(),
        status,
        prepared.elapsed.as_secs_f64()
    );
    if let Some(path) = &prepared.path {
        println!("   {}", path.display().to_string().bright_black());
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            step.outcome.to_emoji(result.word_len)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    match result.final_state {
        RoundState::Solved { .. } => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        ),
        RoundState::Exhausted => println!(
            "{}",
            "❌ Candidates exhausted: outcomes contradict the vocabulary"
                .red()
                .bold()
        ),
        RoundState::GivenUp | RoundState::Active => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.max_partition);

    if let Some(rank) = result.rank {
        println!("   Rank:        #{rank} of {} guesses", result.pool_size);
    }
    if let Some((best, entropy)) = &result.best {
        println!(
            "   Best guess:  {} ({entropy:.3} bits)",
            best.to_uppercase().bright_green()
        );
    }
}

/// Print simulation statistics
pub fn print_simulation_result(stats: &SimulationStats, max_guesses: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Strategy:            {}", stats.strategy);
    println!("  Rounds played:       {}", stats.rounds);
    println!(
        "  Solved:              {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved_percent()).green()
    );
    if stats.given_up > 0 {
        println!("  Out of guesses:      {}", stats.given_up.to_string().red());
    }
    if stats.exhausted > 0 {
        println!("  Exhausted:           {}", stats.exhausted.to_string().red());
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per round:      {:.1}ms",
        stats.time_per_round().as_secs_f64() * 1000.0
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=max_guesses {
        let count = stats.distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar_len = histogram_width(count, max_count, 40);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40 - bar_len).bright_black()
        );
        println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in &stats.hardest {
            println!("  {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failures.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failures.len() > 10 {
            println!("  ... and {} more", stats.failures.len() - 10);
        }
    }
}
