//! Simple interactive CLI mode
//!
//! The solver suggests a guess; the player types the feedback shown by the
//! game. Any vocabulary word may be played instead of the suggestion.

use crate::core::{Outcome, WordIndex};
use crate::error::{EngineError, Result};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Round, RoundState, Solver, Strategy, Turn};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the solver
/// cannot provide a guess.
pub fn run_simple<S: Strategy>(solver: &Solver<S>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(solver, &mut stdin.lock(), &mut stdout.lock())
}

/// What the player asked for after a suggestion
enum Command {
    Quit,
    NewGame,
    Undo,
    Observe(WordIndex, Outcome),
}

/// Run an interactive session over arbitrary input and output
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// See [`run_simple`].
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<S, R, W>(solver: &Solver<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let vocab = solver.vocabulary();
    let table = solver.table();
    let word_len = vocab.word_len();

    print_banner(out, word_len)?;

    let mut round = solver.new_round();

    loop {
        match round.state() {
            RoundState::Active => {}
            RoundState::Solved { answer, confirmed } => {
                let word = vocab.word(answer)?.text().to_uppercase();
                writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
                if confirmed {
                    writeln!(
                        out,
                        "  {} {}",
                        "🎉 Solved:".bright_green().bold(),
                        word.bright_white().bold()
                    )?;
                } else {
                    writeln!(
                        out,
                        "  {} {}",
                        "🎯 The answer must be".bright_green().bold(),
                        word.bright_white().bold()
                    )?;
                }
                print_history(out, solver, round.history())?;
                writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

                if !ask_play_again(input, out)? {
                    return farewell(out);
                }
                round = solver.new_round();
                continue;
            }
            RoundState::GivenUp => {
                writeln!(
                    out,
                    "\n{}",
                    format!("❌ Out of guesses after {} turns", round.guesses_made())
                        .red()
                        .bold()
                )?;
                if !ask_play_again(input, out)? {
                    return farewell(out);
                }
                round = solver.new_round();
                continue;
            }
            RoundState::Exhausted => {
                writeln!(
                    out,
                    "\n{}",
                    "❌ No candidates remain! The feedback entered is inconsistent.".red()
                )?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

                match read_line(input, out, "Command")?.as_deref() {
                    None | Some("quit" | "q" | "exit") => return farewell(out),
                    Some("undo" | "u") => round = undo(solver, &round)?,
                    Some("new" | "n") => round = solver.new_round(),
                    Some(_) => {}
                }
                continue;
            }
        }

        let candidates = round.candidates();
        let guess = solver.next_guess(candidates)?;
        let metrics = calculate_metrics(table, guess, candidates);

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Turn {}: {} candidates remaining",
            round.guesses_made() + 1,
            candidates.len()
        )?;
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            vocab.word(guess)?.text().to_uppercase().bright_yellow().bold()
        )?;
        writeln!(out, "   Entropy:          {:.3} bits", metrics.entropy)?;
        writeln!(
            out,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(out, "   Worst case:       {} candidates\n", metrics.max_partition)?;

        if candidates.len() <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in candidates.iter() {
                writeln!(out, "  • {}", vocab.word(candidate)?.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        let command = loop {
            let Some(line) = read_line(input, out, "Feedback")? else {
                break Command::Quit;
            };
            match parse_command(solver, guess, &line) {
                Ok(command) => break command,
                Err(message) => writeln!(out, "❌ {message}\n")?,
            }
        };

        match command {
            Command::Quit => return farewell(out),
            Command::NewGame => {
                round = solver.new_round();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Command::Undo => {
                if round.history().is_empty() {
                    writeln!(out, "Nothing to undo!\n")?;
                } else {
                    round = undo(solver, &round)?;
                    writeln!(out, "✓ Undone!\n")?;
                }
            }
            Command::Observe(played, outcome) => {
                match round.observe(table, played, outcome) {
                    Ok(_) | Err(EngineError::ExhaustedCandidates { .. }) => {}
                    Err(e) => return Err(e),
                }
            }
        }
    }
}

fn parse_command<S: Strategy>(
    solver: &Solver<S>,
    suggested: WordIndex,
    line: &str,
) -> std::result::Result<Command, String> {
    let vocab = solver.vocabulary();
    let word_len = vocab.word_len();

    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "new" | "n" => return Ok(Command::NewGame),
        "undo" | "u" => return Ok(Command::Undo),
        "win" | "correct" | "solved" => {
            return Ok(Command::Observe(suggested, Outcome::perfect(word_len)));
        }
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let (played, feedback) = match (parts.next(), parts.next(), parts.next()) {
        (Some(feedback), None, None) => (suggested, feedback),
        (Some(word), Some(feedback), None) => {
            let played = vocab
                .index_of(word)
                .map_err(|_| format!("'{word}' is not in the word list"))?;
            (played, feedback)
        }
        _ => return Err("Enter feedback, or a word followed by its feedback".to_string()),
    };

    let outcome = if feedback.eq_ignore_ascii_case("win") {
        Outcome::perfect(word_len)
    } else {
        Outcome::parse(feedback, word_len).ok_or_else(|| {
            format!("Invalid feedback! Use {word_len} of G/Y/- (or 2/1/0), or 'win'")
        })?
    };

    Ok(Command::Observe(played, outcome))
}

/// Rebuild the round without its last turn
fn undo<S: Strategy>(solver: &Solver<S>, round: &Round) -> Result<Round> {
    let keep = round.history().len().saturating_sub(1);
    let mut replayed = solver.new_round();
    for turn in &round.history()[..keep] {
        replayed.observe(solver.table(), turn.guess, turn.outcome)?;
    }
    Ok(replayed)
}

fn print_banner<W: Write>(out: &mut W, word_len: usize) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "  Wordle Entropy - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;
    writeln!(out, "After each guess, enter the feedback pattern ({word_len} symbols):\n")?;
    writeln!(out, "  - Use G/g/2/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/1/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/0/⬜ for gray (not in word)")?;
    writeln!(out, "  - Or type 'win' if you got it right!")?;
    writeln!(out, "  - Played something else? Enter '<word> <feedback>'\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;
    Ok(())
}

fn print_history<S: Strategy, W: Write>(
    out: &mut W,
    solver: &Solver<S>,
    history: &[Turn],
) -> Result<()> {
    let word_len = solver.vocabulary().word_len();
    writeln!(out, "\n  Guess history:")?;
    for (i, turn) in history.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            solver
                .vocabulary()
                .word(turn.guess)?
                .text()
                .to_uppercase()
                .bright_white()
                .bold(),
            turn.outcome.to_emoji(word_len)
        )?;
    }
    Ok(())
}

fn ask_play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    let answer = read_line(input, out, "Play again? (yes/no)")?;
    let again = matches!(answer.as_deref(), Some("yes" | "y"));
    if again {
        writeln!(out, "\n🔄 New game started!\n")?;
    }
    Ok(again)
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
