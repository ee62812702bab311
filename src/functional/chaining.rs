//! Method chaining.
//!
//! Every [`Counter`] mutator returns `&mut Self`, so a sequence of calls reads
//! as one expression with no intermediate bindings.

use crate::harness::Transcript;

/// A counter whose mutators chain.
///
/// # Examples
///
/// ```rust
/// use patternbook::functional::chaining::Counter;
///
/// let mut counter = Counter::new();
/// counter.increase().increase().decrease();
///
/// assert_eq!(counter.value(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Creates a counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Adds one.
    pub const fn increase(&mut self) -> &mut Self {
        self.value += 1;
        self
    }

    /// Subtracts one.
    pub const fn decrease(&mut self) -> &mut Self {
        self.value -= 1;
        self
    }

    /// Writes the current value.
    pub fn log(&mut self, out: &mut Transcript) -> &mut Self {
        out.line(self.value.to_string());
        self
    }

    /// The current value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &["-2", "0", "2"];

/// Runs one chained expression, logging three times.
pub fn demo(out: &mut Transcript) {
    Counter::new()
        .decrease()
        .decrease()
        .log(out)
        .increase()
        .increase()
        .log(out)
        .increase()
        .increase()
        .log(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn chain_returns_the_same_counter() {
        let mut counter = Counter::new();
        let address = std::ptr::from_ref(counter.increase());
        assert!(std::ptr::eq(address, &counter));
    }

    #[rstest]
    fn increase_and_decrease_cancel() {
        let mut counter = Counter::new();
        counter.increase().decrease().increase().decrease();
        assert_eq!(counter, Counter::default());
    }

    #[rstest]
    fn log_does_not_change_the_value() {
        let mut counter = Counter::new();
        let out = Transcript::capture(|out| {
            counter.increase().log(out).log(out);
        });

        assert_eq!(out.lines(), ["1", "1"]);
        assert_eq!(counter.value(), 1);
    }

    #[rstest]
    fn demo_matches_expected() {
        assert!(Transcript::capture(demo).matches(EXPECTED));
    }
}
