//! Candidate filtering
//!
//! Narrows a candidate set to the answers consistent with one observed outcome,
//! using only precomputed table lookups.

use crate::core::{CandidateSet, Outcome, WordIndex};
use crate::error::{EngineError, Result};
use crate::table::OutcomeTable;

/// Candidates whose outcome against `guess` equals `outcome`
///
/// May be empty; see [`filter_candidates`] for the checked form.
#[must_use]
pub fn narrow(
    table: &OutcomeTable,
    guess: WordIndex,
    outcome: Outcome,
    candidates: &CandidateSet,
) -> CandidateSet {
    let row = table.row(guess);
    CandidateSet::from_sorted(
        candidates
            .iter()
            .filter(|&answer| row[answer] == outcome.value())
            .collect(),
    )
}

/// Filter `candidates` by an observed `outcome` of `guess`
///
/// # Errors
/// - `UnknownIndex` if `guess` or any candidate is not in the table
/// - `ExhaustedCandidates` if no candidate is consistent with the observation,
///   which means the observation contradicts the vocabulary or the match rule
///
/// # Examples
/// ```
/// use wordle_entropy::core::{CandidateSet, Outcome, Vocabulary};
/// use wordle_entropy::solver::filter_candidates;
/// use wordle_entropy::table::OutcomeTable;
///
/// let vocab = Vocabulary::from_strs(["crane", "snake", "slate"]).unwrap();
/// let table = OutcomeTable::build(&vocab);
/// let all = CandidateSet::full(&vocab);
///
/// let left = filter_candidates(&table, 0, Outcome::new(207), &all).unwrap();
/// assert_eq!(left.as_slice(), &[1]); // only SNAKE gives 207 for CRANE
/// ```
pub fn filter_candidates(
    table: &OutcomeTable,
    guess: WordIndex,
    outcome: Outcome,
    candidates: &CandidateSet,
) -> Result<CandidateSet> {
    table.check_index(guess)?;
    table.check_candidates(candidates)?;

    let remaining = narrow(table, guess, outcome, candidates);
    if remaining.is_empty() {
        return Err(EngineError::ExhaustedCandidates { guess, outcome });
    }
    Ok(remaining)
}

/// Split `candidates` by their outcome against `guess`
///
/// Groups are ordered by outcome value and together hold every candidate once.
#[must_use]
pub fn partition(
    table: &OutcomeTable,
    guess: WordIndex,
    candidates: &CandidateSet,
) -> Vec<(Outcome, CandidateSet)> {
    let row = table.row(guess);
    let mut keyed: Vec<(u16, WordIndex)> = candidates.iter().map(|a| (row[a], a)).collect();
    keyed.sort_unstable();

    let mut groups: Vec<(Outcome, CandidateSet)> = Vec::new();
    let mut start = 0;
    while start < keyed.len() {
        let value = keyed[start].0;
        let end = keyed[start..]
            .iter()
            .position(|&(v, _)| v != value)
            .map_or(keyed.len(), |offset| start + offset);
        let members = keyed[start..end].iter().map(|&(_, a)| a).collect();
        groups.push((Outcome::new(value), CandidateSet::from_sorted(members)));
        start = end;
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;

    fn setup() -> (Vocabulary, OutcomeTable) {
        let vocab = Vocabulary::from_strs([
            "crane", "slate", "irate", "crate", "grate", "trace", "snake",
        ])
        .unwrap();
        let table = OutcomeTable::build(&vocab);
        (vocab, table)
    }

    #[test]
    fn keeps_only_consistent_answers() {
        let (vocab, table) = setup();
        let all = CandidateSet::full(&vocab);
        let guess = vocab.index_of("crane").unwrap();
        let answer = vocab.index_of("grate").unwrap();

        let left = filter_candidates(&table, guess, table.outcome(guess, answer), &all).unwrap();

        assert!(left.contains(answer));
        assert!(left.iter().all(|a| table.outcome(guess, a) == table.outcome(guess, answer)));
    }

    #[test]
    fn never_grows() {
        let (vocab, table) = setup();
        let all = CandidateSet::full(&vocab);
        for guess in vocab.indices() {
            for answer in vocab.indices() {
                let left = narrow(&table, guess, table.outcome(guess, answer), &all);
                assert!(left.len() <= all.len());
                assert!(!left.is_empty());
            }
        }
    }

    #[test]
    fn perfect_outcome_leaves_the_guess() {
        let (vocab, table) = setup();
        let all = CandidateSet::full(&vocab);
        let irate = vocab.index_of("irate").unwrap();

        let left = filter_candidates(&table, irate, Outcome::perfect(5), &all).unwrap();
        assert_eq!(left.single(), Some(irate));
    }

    #[test]
    fn impossible_outcome_exhausts() {
        let (vocab, table) = setup();
        let all = CandidateSet::full(&vocab);
        let crane = vocab.index_of("crane").unwrap();

        // Every word here shares a letter with CRANE, so all-absent is impossible
        let result = filter_candidates(&table, crane, Outcome::new(0), &all);
        assert!(matches!(
            result,
            Err(EngineError::ExhaustedCandidates { guess, outcome })
                if guess == crane && outcome == Outcome::new(0)
        ));
    }

    #[test]
    fn unknown_guess_is_rejected() {
        let (vocab, table) = setup();
        let all = CandidateSet::full(&vocab);
        assert!(matches!(
            filter_candidates(&table, 42, Outcome::new(0), &all),
            Err(EngineError::UnknownIndex { index: 42, .. })
        ));
    }

    #[test]
    fn out_of_range_candidate_is_rejected() {
        let (_, table) = setup();
        let stray = CandidateSet::from_indices(vec![0, 99]);
        assert!(matches!(
            filter_candidates(&table, 0, Outcome::new(0), &stray),
            Err(EngineError::UnknownIndex { index: 99, size: 7 })
        ));
    }

    #[test]
    fn partition_covers_every_candidate() {
        let (vocab, table) = setup();
        let all = CandidateSet::full(&vocab);

        for guess in vocab.indices() {
            let groups = partition(&table, guess, &all);
            let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
            assert_eq!(total, all.len());
            assert!(groups.windows(2).all(|w| w[0].0 < w[1].0));

            for (outcome, group) in &groups {
                assert_eq!(group, &narrow(&table, guess, *outcome, &all));
            }
        }
    }
}
