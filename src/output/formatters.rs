//! Formatting utilities for terminal output

use indicatif::ProgressStyle;

/// Style shared by every progress bar
#[must_use]
pub fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible entropy
///
/// `candidates` bounds the entropy at `log2(candidates)` bits.
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Width of a histogram bar for `count` out of a peak of `max_count`
///
/// Non-zero counts always get at least one cell.
#[must_use]
pub fn histogram_width(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * width / max_count).max(usize::from(count > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_full_at_log2_n() {
        assert_eq!(entropy_bar(3.0, 8, 6), "██████");
    }

    #[test]
    fn histogram_keeps_small_counts_visible() {
        assert_eq!(histogram_width(1, 1000, 40), 1);
        assert_eq!(histogram_width(0, 1000, 40), 0);
        assert_eq!(histogram_width(1000, 1000, 40), 40);
        assert_eq!(histogram_width(3, 0, 40), 0);
    }
}
