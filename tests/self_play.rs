//! End-to-end self-play over the embedded vocabulary

use std::sync::Arc;
use wordle_entropy::EngineError;
use wordle_entropy::core::{CandidateSet, Outcome, Vocabulary};
use wordle_entropy::solver::{
    DEFAULT_MAX_GUESSES, RoundState, Solver, StrategyType, TwoStepStrategy, filter_candidates,
};
use wordle_entropy::table::OutcomeTable;
use wordle_entropy::wordlists::default_vocabulary;

fn engine() -> (Arc<Vocabulary>, Arc<OutcomeTable>) {
    let vocab = Arc::new(default_vocabulary().unwrap());
    let table = Arc::new(OutcomeTable::build(&vocab));
    (vocab, table)
}

#[test]
fn one_step_solves_every_word_within_the_cap() {
    let (vocab, table) = engine();
    let solver = Solver::new(StrategyType::default(), vocab.clone(), table).unwrap();

    for answer in vocab.indices() {
        let round = solver.play(answer).unwrap();
        let word = vocab.word(answer).unwrap();

        match round.state() {
            RoundState::Solved { answer: found, .. } => assert_eq!(found, answer, "{word}"),
            other => panic!("{word} ended as {other:?}"),
        }
        assert!(round.total_guesses().unwrap() <= DEFAULT_MAX_GUESSES, "{word}");
    }
}

#[test]
fn two_step_solves_a_sample_within_the_cap() {
    let (vocab, table) = engine();
    let strategy = StrategyType::TwoStep(TwoStepStrategy::new(5));
    let solver = Solver::new(strategy, vocab.clone(), table).unwrap();

    for answer in vocab.indices().step_by(17) {
        let round = solver.play(answer).unwrap();
        assert!(round.state().is_solved(), "{}", vocab.word(answer).unwrap());
        assert!(round.total_guesses().unwrap() <= DEFAULT_MAX_GUESSES);
    }
}

#[test]
fn every_turn_keeps_the_answer_and_never_grows() {
    let (vocab, table) = engine();
    let solver = Solver::new(StrategyType::default(), vocab.clone(), table).unwrap();

    for answer in vocab.indices().step_by(11) {
        let round = solver.play(answer).unwrap();
        for turn in round.history() {
            assert!(turn.candidates_after <= turn.candidates_before);
            assert!(turn.candidates_after >= 1);
        }
        assert!(round.candidates().contains(answer));
    }
}

#[test]
fn play_is_deterministic() {
    let (vocab, table) = engine();
    let a = Solver::new(StrategyType::default(), vocab.clone(), table.clone()).unwrap();
    let b = Solver::new(StrategyType::default(), vocab.clone(), table).unwrap();

    for answer in [0, vocab.len() / 2, vocab.len() - 1] {
        assert_eq!(a.play(answer).unwrap().history(), b.play(answer).unwrap().history());
    }
}

#[test]
fn impossible_observation_exhausts_candidates() {
    let (vocab, table) = engine();
    let all = CandidateSet::full(&vocab);
    let guess = vocab.indices().next().unwrap();

    // An outcome claiming the guess is correct leaves only the guess itself
    let left = filter_candidates(&table, guess, Outcome::perfect(vocab.word_len()), &all).unwrap();
    assert_eq!(left.single(), Some(guess));

    // Once narrowed to the guess, any other outcome is a contradiction
    let result = filter_candidates(&table, guess, Outcome::new(0), &left);
    assert!(matches!(
        result,
        Err(EngineError::ExhaustedCandidates { guess: g, .. }) if g == guess
    ));
}

#[test]
fn live_round_reports_exhaustion() {
    let (vocab, table) = engine();
    let solver = Solver::new(StrategyType::default(), vocab.clone(), table.clone()).unwrap();

    let mut round = solver.new_round();
    let guess = solver.next_guess(round.candidates()).unwrap();
    let answer = (guess + 1) % vocab.len();

    round.observe(&table, guess, table.outcome(guess, answer)).unwrap();
    if round.state().is_over() {
        return;
    }

    // Claim a win for a word that cannot be the answer
    let impossible = vocab
        .indices()
        .find(|&w| !round.candidates().contains(w))
        .unwrap();
    let result = round.observe(&table, impossible, Outcome::perfect(vocab.word_len()));

    assert!(matches!(result, Err(EngineError::ExhaustedCandidates { .. })));
    assert_eq!(round.state(), RoundState::Exhausted);
}
