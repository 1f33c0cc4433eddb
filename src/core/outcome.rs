//! Match outcome calculation and representation
//!
//! An outcome encodes the feedback for a guess using base-3 digits, one per
//! letter position:
//! - 0 = Absent (letter not in word, given remaining counts)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! Position `i` contributes `digit × 3^i`, so the value for a word of length
//! `L` lies in `0..=3^L - 1` and `3^L - 1` means every position is exact.

use super::Word;
use super::word::MAX_WORD_LEN;
use std::fmt;

/// Powers of three up to `3^MAX_WORD_LEN`
const POW3: [u16; MAX_WORD_LEN + 1] = {
    let mut table = [1u16; MAX_WORD_LEN + 1];
    let mut i = 1;
    while i <= MAX_WORD_LEN {
        table[i] = table[i - 1] * 3;
        i += 1;
    }
    table
};

/// Feedback label for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Label {
    /// Base-3 digit of this label
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u16 {
        self as u16
    }

    /// Label for a base-3 digit, `None` if `digit > 2`
    #[must_use]
    pub const fn from_digit(digit: u16) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Encoded feedback for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outcome(u16);

impl Outcome {
    /// Create an outcome from its raw encoded value
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw encoded value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// All-exact outcome for words of `len` letters (`3^len - 1`)
    ///
    /// # Panics
    /// Panics if `len > MAX_WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        Self(POW3[len] - 1)
    }

    /// Number of distinct outcomes for words of `len` letters (`3^len`)
    ///
    /// # Panics
    /// Panics if `len > MAX_WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn count(len: usize) -> usize {
        POW3[len] as usize
    }

    /// Check if this is the all-exact outcome for words of `len` letters
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, len: usize) -> bool {
        self.0 == POW3[len] - 1
    }

    /// Calculate the outcome when `guess` is played against hidden `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Outcome, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("snake").unwrap();
    ///
    /// // C(absent) R(absent) A(exact) N(present) E(exact)
    /// // 0 + 0×3 + 2×9 + 1×27 + 2×81 = 207
    /// assert_eq!(Outcome::calculate(&guess, &answer).value(), 207);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        encode(guess.letters(), answer.letters())
    }

    /// Encode per-position labels, position 0 in the lowest digit
    ///
    /// # Panics
    /// Panics if more than `MAX_WORD_LEN` labels are given
    #[must_use]
    pub fn from_labels(labels: &[Label]) -> Self {
        assert!(labels.len() <= MAX_WORD_LEN, "too many labels");
        let value = labels
            .iter()
            .zip(POW3)
            .map(|(label, weight)| label.digit() * weight)
            .sum();
        Self(value)
    }

    /// Decode into `len` per-position labels
    #[must_use]
    pub fn labels(self, len: usize) -> Vec<Label> {
        let mut val = self.0;
        (0..len)
            .map(|_| {
                let digit = val % 3;
                val /= 3;
                match digit {
                    2 => Label::Exact,
                    1 => Label::Present,
                    _ => Label::Absent,
                }
            })
            .collect()
    }

    /// Count the number of exact positions
    #[must_use]
    pub fn count_exact(self, len: usize) -> usize {
        self.labels(len)
            .into_iter()
            .filter(|&l| l == Label::Exact)
            .count()
    }

    /// Count the number of present positions
    #[must_use]
    pub fn count_present(self, len: usize) -> usize {
        self.labels(len)
            .into_iter()
            .filter(|&l| l == Label::Present)
            .count()
    }

    /// Parse manually entered feedback for a word of `len` letters
    ///
    /// One symbol per letter, position 0 first:
    /// - `2`/`G`/`g`/🟩 for exact
    /// - `1`/`Y`/`y`/🟨 for present
    /// - `0`/`-`/`_`/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Outcome;
    ///
    /// let digits = Outcome::parse("00212", 5).unwrap();
    /// let letters = Outcome::parse("--GYG", 5).unwrap();
    /// assert_eq!(digits, letters);
    /// assert_eq!(digits.value(), 207);
    /// ```
    #[must_use]
    pub fn parse(input: &str, len: usize) -> Option<Self> {
        let labels: Vec<Label> = input
            .trim()
            .chars()
            .map(|ch| match ch {
                '2' | 'G' | 'g' | '🟩' => Some(Label::Exact),
                '1' | 'Y' | 'y' | '🟨' => Some(Label::Present),
                '0' | '-' | '_' | '⬜' => Some(Label::Absent),
                _ => None,
            })
            .collect::<Option<_>>()?;

        if labels.len() != len || len > MAX_WORD_LEN {
            return None;
        }

        Some(Self::from_labels(&labels))
    }

    /// Render as an emoji string for a word of `len` letters
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Outcome;
    ///
    /// assert_eq!(Outcome::new(207).to_emoji(5), "⬜⬜🟩🟨🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self, len: usize) -> String {
        self.labels(len)
            .into_iter()
            .map(|label| match label {
                Label::Exact => '🟩',
                Label::Present => '🟨',
                Label::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the outcome of `guess` against `answer` from raw letters
///
/// Two passes:
/// 1. Exact pass: equal letters at the same position are exact and consume
///    that position on both sides.
/// 2. Presence pass: each remaining guess letter, left to right, consumes the
///    earliest unconsumed equal answer letter and is present; otherwise absent.
///
/// Both slices must have the same length, at most [`MAX_WORD_LEN`].
#[must_use]
pub fn encode(guess: &[u8], answer: &[u8]) -> Outcome {
    debug_assert_eq!(guess.len(), answer.len(), "word lengths differ");
    let len = guess.len();
    let mut labels = [Label::Absent; MAX_WORD_LEN];
    let mut consumed = [false; MAX_WORD_LEN];

    for (i, (g, a)) in guess.iter().zip(answer).enumerate() {
        if g == a {
            labels[i] = Label::Exact;
            consumed[i] = true;
        }
    }

    for (i, &letter) in guess.iter().enumerate() {
        if labels[i] == Label::Exact {
            continue;
        }
        if let Some(j) = (0..len).find(|&j| !consumed[j] && answer[j] == letter) {
            consumed[j] = true;
            labels[i] = Label::Present;
        }
    }

    Outcome::from_labels(&labels[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(guess: &str, answer: &str) -> Outcome {
        Outcome::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn perfect_constant() {
        assert_eq!(Outcome::perfect(5).value(), 242);
        assert_eq!(Outcome::perfect(3).value(), 26);
        assert!(Outcome::new(242).is_perfect(5));
        assert!(!Outcome::new(242).is_perfect(6));
        assert_eq!(Outcome::count(5), 243);
    }

    #[test]
    fn all_absent() {
        let o = outcome("abcde", "fghij");
        assert_eq!(o.value(), 0);
        assert_eq!(o.count_exact(5), 0);
        assert_eq!(o.count_present(5), 0);
    }

    #[test]
    fn self_match_is_perfect() {
        for word in ["crane", "slate", "zzzzz", "aaaaa", "abcde"] {
            assert!(outcome(word, word).is_perfect(5));
        }
        assert_eq!(outcome("abcde", "abcde").value(), 242);
    }

    #[test]
    fn crane_against_snake() {
        let o = outcome("crane", "snake");
        assert_eq!(
            o.labels(5),
            vec![
                Label::Absent,
                Label::Absent,
                Label::Exact,
                Label::Present,
                Label::Exact
            ]
        );
        assert_eq!(o.value(), 207);
    }

    #[test]
    fn duplicate_guess_letters_limited_by_answer_count() {
        // SPEED vs ERASE: both E's present, ERASE has two E's
        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        assert_eq!(outcome("speed", "erase").value(), 37);

        // WORLD has one L and it is matched exactly, so the earlier L is absent
        // HELLO vs WORLD: H- E- L- L(green) O(yellow)
        // 2×27 + 1×81 = 135
        assert_eq!(outcome("hello", "world").value(), 135);
    }

    #[test]
    fn exact_takes_priority_over_earlier_present() {
        // ROBOT vs FLOOR: first O is present, second O is exact
        // 1 + 1×3 + 0×9 + 2×27 + 0×81 = 58
        assert_eq!(outcome("robot", "floor").value(), 58);

        // LLAMA vs HELLO: no L in place, both L's present
        // 1 + 1×3 = 4
        assert_eq!(outcome("llama", "hello").value(), 4);

        // ABBEY vs KEBAB: A(y) B(y) B(g) E(y) Y(-)
        // 1 + 1×3 + 2×9 + 1×27 + 0 = 49
        assert_eq!(outcome("abbey", "kebab").value(), 49);
    }

    #[test]
    fn outcome_is_asymmetric() {
        assert_ne!(outcome("speed", "erase"), outcome("erase", "speed"));
    }

    #[test]
    fn labels_round_trip() {
        let labels = [
            Label::Exact,
            Label::Absent,
            Label::Present,
            Label::Present,
            Label::Exact,
        ];
        let o = Outcome::from_labels(&labels);
        assert_eq!(o.labels(5), labels);
        assert_eq!(o.count_exact(5), 2);
        assert_eq!(o.count_present(5), 2);
    }

    #[test]
    fn parse_digits_and_letters() {
        let p1 = Outcome::parse("21200", 5).unwrap();
        let p2 = Outcome::parse("GYG--", 5).unwrap();
        let p3 = Outcome::parse("🟩🟨🟩⬜⬜", 5).unwrap();
        let p4 = Outcome::parse(" gyg__ ", 5).unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);

        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Outcome::parse("212001", 5).is_none()); // Too long
        assert!(Outcome::parse("212", 5).is_none()); // Too short
        assert!(Outcome::parse("21300", 5).is_none()); // Invalid digit
        assert!(Outcome::parse("", 5).is_none());
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(Outcome::perfect(5).to_emoji(5), "🟩🟩🟩🟩🟩");
        assert_eq!(Outcome::new(0).to_emoji(3), "⬜⬜⬜");
    }

    #[test]
    fn label_digits() {
        assert_eq!(Label::from_digit(2), Some(Label::Exact));
        assert_eq!(Label::from_digit(3), None);
        assert_eq!(Label::Present.digit(), 1);
    }
}
