//! Strategy.
//!
//! A family of sorting algorithms behind one trait. The [`Sorter`] context
//! only knows [`SortStrategy`]; swapping the strategy changes the ordering
//! without touching the caller.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::behavioral::strategy::{SortById, SortByName, Sorter};
//! use patternbook::person::Person;
//!
//! let people = vec![Person::new("02", "AAA"), Person::new("01", "BBB")];
//! let mut sorter = Sorter::new(SortById);
//! assert_eq!(sorter.sort(&people)[0].id, "01");
//!
//! sorter.set_strategy(SortByName);
//! assert_eq!(sorter.sort(&people)[0].name, "AAA");
//! ```

use std::cmp::Ordering;

use crate::harness::Transcript;
use crate::person::{Person, format_people};

/// An ordering of people.
///
/// Implementations return a sorted copy and leave the input untouched.
pub trait SortStrategy {
    /// Returns `people` in this strategy's order.
    fn sort(&self, people: &[Person]) -> Vec<Person>;
}

/// Orders by id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortById;

impl SortStrategy for SortById {
    fn sort(&self, people: &[Person]) -> Vec<Person> {
        let mut sorted = people.to_vec();
        sorted.sort_by(|left, right| left.id.cmp(&right.id));
        sorted
    }
}

/// Orders by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortByName;

impl SortStrategy for SortByName {
    fn sort(&self, people: &[Person]) -> Vec<Person> {
        let mut sorted = people.to_vec();
        sorted.sort_by(|left, right| left.name.cmp(&right.name));
        sorted
    }
}

/// Orders with a comparison closure.
///
/// # Examples
///
/// ```rust
/// use patternbook::behavioral::strategy::{SortStrategy, SortWith};
/// use patternbook::person::Person;
///
/// let by_name_descending = SortWith(|left: &Person, right: &Person| right.name.cmp(&left.name));
/// let people = [Person::new("01", "AAA"), Person::new("02", "BBB")];
///
/// assert_eq!(by_name_descending.sort(&people)[0].name, "BBB");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SortWith<F>(pub F);

impl<F> SortStrategy for SortWith<F>
where
    F: Fn(&Person, &Person) -> Ordering,
{
    fn sort(&self, people: &[Person]) -> Vec<Person> {
        let mut sorted = people.to_vec();
        sorted.sort_by(|left, right| (self.0)(left, right));
        sorted
    }
}

/// The context holding the active strategy.
pub struct Sorter {
    strategy: Box<dyn SortStrategy>,
}

impl Sorter {
    /// Creates a context using `strategy`.
    pub fn new<S>(strategy: S) -> Self
    where
        S: SortStrategy + 'static,
    {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Replaces the active strategy.
    pub fn set_strategy<S>(&mut self, strategy: S)
    where
        S: SortStrategy + 'static,
    {
        self.strategy = Box::new(strategy);
    }

    /// Sorts with the active strategy.
    #[must_use]
    pub fn sort(&self, people: &[Person]) -> Vec<Person> {
        self.strategy.sort(people)
    }
}

impl std::fmt::Debug for Sorter {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Sorter").finish_non_exhaustive()
    }
}

/// The four people the demo sorts.
#[must_use]
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("03", "AAA"),
        Person::new("01", "CCC"),
        Person::new("04", "DDD"),
        Person::new("02", "BBB"),
    ]
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "01 CCC, 02 BBB, 03 AAA, 04 DDD",
    "03 AAA, 02 BBB, 01 CCC, 04 DDD",
];

/// Sorts the sample people by id, then switches to sorting by name.
pub fn demo(out: &mut Transcript) {
    let people = sample_people();
    let mut sorter = Sorter::new(SortById);
    out.line(format_people(&sorter.sort(&people)));
    sorter.set_strategy(SortByName);
    out.line(format_people(&sorter.sort(&people)));
}
