//! Repetition counting with a one-bit latch.
//!
//! The latch is set on the first frame away from the baseline phase and
//! cleared, crediting one repetition, on the first frame back at baseline.
//! Time spent away from baseline, and movement between the non-baseline
//! phases, never adds extra counts.

use serde::Serialize;

/// Per-session counter state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepCounterState {
    count: u32,
    latched: bool,
}

impl RepCounterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed repetitions in this session
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether an excursion is open and not yet credited
    #[must_use]
    pub fn latched(&self) -> bool {
        self.latched
    }

    /// Feed one analyzable frame. Returns `true` when a repetition completed.
    ///
    /// A session that starts away from baseline credits its first return.
    pub fn update(&mut self, at_baseline: bool) -> bool {
        if !at_baseline {
            self.latched = true;
            return false;
        }

        if self.latched {
            self.latched = false;
            self.count = self.count.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// Start a new session
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stays_zero_at_baseline() {
        let mut counter = RepCounterState::new();
        for _ in 0..10 {
            assert!(!counter.update(true));
        }
        assert_eq!(counter.count(), 0);
        assert!(!counter.latched());
    }

    #[test]
    fn test_one_excursion_one_count() {
        let mut counter = RepCounterState::new();
        counter.update(true);
        for _ in 0..25 {
            counter.update(false);
        }
        assert!(counter.latched());
        assert!(counter.update(true));
        assert!(!counter.update(true));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_open_excursion_never_counts() {
        let mut counter = RepCounterState::new();
        counter.update(true);
        for _ in 0..100 {
            counter.update(false);
        }
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_start_mid_excursion_counts_first_return() {
        let mut counter = RepCounterState::new();
        counter.update(false);
        assert!(counter.update(true));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_reset() {
        let mut counter = RepCounterState::new();
        counter.update(false);
        counter.update(true);
        counter.update(false);
        counter.reset();
        assert_eq!(counter, RepCounterState::default());
    }

    proptest! {
        #[test]
        fn prop_count_equals_closed_excursions(frames in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut counter = RepCounterState::new();
            let mut previous = counter.count();
            for &at_baseline in &frames {
                counter.update(at_baseline);
                prop_assert!(counter.count() >= previous);
                previous = counter.count();
            }

            // Count the false→true edges, plus nothing for a trailing open run
            let mut expected = 0;
            let mut away = false;
            for &at_baseline in &frames {
                if at_baseline {
                    if away {
                        expected += 1;
                    }
                    away = false;
                } else {
                    away = true;
                }
            }
            prop_assert_eq!(counter.count(), expected);
        }
    }
}
