//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Gallows drawings from empty to complete
const GALLOWS: [&str; 7] = [
    "  +---+\n      |\n      |\n      |\n     ===",
    "  +---+\n  O   |\n      |\n      |\n     ===",
    "  +---+\n  O   |\n  |   |\n      |\n     ===",
    "  +---+\n  O   |\n /|   |\n      |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n      |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n /    |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n / \\  |\n     ===",
];

/// Index into the gallows drawings for `wrong` out of `max` wrong guesses
///
/// The figure is complete exactly when no guesses remain.
#[must_use]
pub fn gallows_stage(wrong: usize, max: usize) -> usize {
    let last = GALLOWS.len() - 1;
    if max == 0 || wrong >= max {
        return last;
    }
    // Round down so the final stage is reserved for a lost game
    (wrong * last / max).min(last - 1)
}

/// The gallows drawing for the current wrong-guess count
#[must_use]
pub fn gallows(wrong: usize, max: usize) -> &'static str {
    GALLOWS[gallows_stage(wrong, max)]
}

/// Guessed letters as a comma-separated list, or a dash when empty
#[must_use]
pub fn letters_display(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `whole` that `part` makes up, as a whole percentage in `0..=100`
#[must_use]
pub fn percent_of(part: usize, whole: usize) -> u16 {
    if whole == 0 {
        return 0;
    }
    // Cast is safe: the ratio is clamped to [0, 100]
    ((part as f64 / whole as f64) * 100.0).clamp(0.0, 100.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_handles_extremes() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(5, 10), 50);
        assert_eq!(percent_of(10, 10), 100);
        assert_eq!(percent_of(usize::MAX, usize::MAX), 100);
        assert_eq!(percent_of(usize::MAX / 2, usize::MAX), 50);
    }

    #[test]
    fn gallows_starts_empty_and_ends_complete() {
        assert_eq!(gallows_stage(0, 6), 0);
        assert_eq!(gallows_stage(6, 6), 6);
        assert_eq!(gallows_stage(0, 0), 6);
        assert!(gallows(6, 6).contains("/ \\"));
    }

    #[test]
    fn gallows_not_complete_before_last_guess() {
        for max in 1..=20 {
            assert!(gallows_stage(max - 1, max) < 6);
        }
    }

    #[test]
    fn gallows_stage_never_decreases() {
        let max = 10;
        let stages: Vec<usize> = (0..=max).map(|w| gallows_stage(w, max)).collect();
        assert!(stages.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn letters_display_formats() {
        let letters: BTreeSet<char> = ['t', 'a', 'e'].into_iter().collect();
        assert_eq!(letters_display(&letters), "a, e, t");
        assert_eq!(letters_display(&BTreeSet::new()), "-");
    }

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
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
