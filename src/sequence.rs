//! Fibonacci window and the advance step
//!
//! A [`Window`] holds two consecutive terms. Advancing it produces the next
//! term and drops the oldest one. The caller owns the window and replaces it
//! with the advanced value on every step.

/// Fixed-width integer used for every term
pub type Term = i32;

/// Advance a `(previous, current)` pair by one step.
///
/// Returns `(current, previous + current)`. The sum wraps on overflow.
pub fn advance(previous: Term, current: Term) -> (Term, Term) {
    (current, previous.wrapping_add(current))
}

/// Two consecutive terms of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub previous: Term,
    pub current: Term,
}

impl Window {
    /// The window the sequence starts from: `(0, 1)`
    pub const SEED: Window = Window {
        previous: 0,
        current: 1,
    };

    /// Build a window from two terms. Any values are accepted.
    pub const fn new(previous: Term, current: Term) -> Self {
        Self { previous, current }
    }

    /// Return the window shifted forward by one term
    #[must_use]
    pub fn advance(self) -> Self {
        let (previous, current) = advance(self.previous, self.current);
        Self { previous, current }
    }

    /// Iterate over the windows that follow this one.
    ///
    /// The first item is `self.advance()`. The iterator never ends.
    pub fn iter(self) -> Advances {
        Advances { window: self }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::SEED
    }
}

/// Iterator returned by [`Window::iter`]
#[derive(Debug, Clone)]
pub struct Advances {
    window: Window,
}

impl Iterator for Advances {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        self.window = self.window.advance();
        Some(self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_from_seed() {
        assert_eq!(advance(0, 1), (1, 1));
    }

    #[test]
    fn test_advance_medium_values() {
        assert_eq!(advance(233, 377), (377, 610));
    }

    #[test]
    fn test_advance_shifts_window() {
        for (p, c) in [(0, 1), (1, 1), (5, 8), (-3, 7), (1_000, 2_000)] {
            assert_eq!(advance(p, c), (c, p + c));
        }
    }

    #[test]
    fn test_advance_is_deterministic() {
        let first = advance(89, 144);
        for _ in 0..100 {
            assert_eq!(advance(89, 144), first);
        }
    }

    #[test]
    fn test_window_matches_free_function() {
        let window = Window::new(233, 377).advance();
        assert_eq!((window.previous, window.current), advance(233, 377));
    }

    #[test]
    fn test_default_is_seed() {
        assert_eq!(Window::default(), Window::SEED);
        assert_eq!(Window::SEED, Window::new(0, 1));
    }

    #[test]
    fn test_ten_advances_from_seed() {
        let currents: Vec<Term> = Window::SEED.iter().take(10).map(|w| w.current).collect();
        assert_eq!(currents, vec![1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn test_eleventh_advance_reaches_144() {
        let currents: Vec<Term> = Window::SEED.iter().take(11).map(|w| w.current).collect();
        assert_eq!(currents, vec![1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144]);
        assert_eq!(currents.last(), Some(&144));
    }

    #[test]
    fn test_recurrence_holds_along_iteration() {
        let mut before = Window::SEED;
        for after in Window::SEED.iter().take(40) {
            assert_eq!(after.previous, before.current);
            assert_eq!(after.current, before.previous + before.current);
            before = after;
        }
    }

    #[test]
    fn test_overflow_wraps() {
        let window = Window::new(Term::MAX, 1).advance();
        assert_eq!(window.previous, 1);
        assert_eq!(window.current, Term::MIN);
    }
}
