//! Prototype.
//!
//! New objects are copied from an existing instance instead of built from
//! scratch. In Rust the copy operation is [`Clone`]; [`Prototype`] names it
//! and is implemented for every cloneable type. A [`PrototypeRegistry`] keeps
//! named prototypes and hands out fresh copies.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::creational::prototype::Prototype;
//! use patternbook::person::Person;
//!
//! let first = Person::new("1234", "Abcd");
//! let mut second = first.prototype();
//! second.name.push('e');
//!
//! assert_eq!(first.name, "Abcd");
//! assert_eq!(second.name, "Abcde");
//! ```

use std::collections::HashMap;

use crate::harness::Transcript;
use crate::person::Person;

/// Something that can produce an independent copy of itself.
pub trait Prototype {
    /// Returns a copy sharing no mutable state with `self`.
    #[must_use]
    fn prototype(&self) -> Self;
}

impl<T: Clone> Prototype for T {
    fn prototype(&self) -> Self {
        self.clone()
    }
}

/// Named prototypes from which copies are spawned.
///
/// # Examples
///
/// ```rust
/// use patternbook::creational::prototype::PrototypeRegistry;
///
/// let mut registry = PrototypeRegistry::new();
/// registry.register("greeting", String::from("hello"));
///
/// assert_eq!(registry.spawn("greeting"), Some(String::from("hello")));
/// assert_eq!(registry.spawn("farewell"), None);
/// ```
#[derive(Clone, Debug)]
pub struct PrototypeRegistry<T> {
    prototypes: HashMap<String, T>,
}

impl<T> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }
}

impl<T: Prototype> PrototypeRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `prototype` under `name`, returning the one it replaced.
    pub fn register(&mut self, name: impl Into<String>, prototype: T) -> Option<T> {
        self.prototypes.insert(name.into(), prototype)
    }

    /// Returns a fresh copy of the prototype registered as `name`.
    #[must_use]
    pub fn spawn(&self, name: &str) -> Option<T> {
        self.prototypes.get(name).map(Prototype::prototype)
    }

    /// Returns the number of registered prototypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &["1234", "Abcd", "1234", "Abcd"];

/// Clones a person and prints both copies' fields.
pub fn demo(out: &mut Transcript) {
    let first = Person::new("1234", "Abcd");
    let second = first.prototype();
    out.line(first.id.as_str());
    out.line(first.name.as_str());
    out.line(second.id.as_str());
    out.line(second.name.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn copy_equals_original_by_value() {
        let original = Person::new("1", "A");
        assert_eq!(original.prototype(), original);
    }

    #[rstest]
    fn copy_is_independent() {
        let original = Person::new("1", "A");
        let mut copy = original.prototype();
        copy.id = "2".to_string();
        assert_eq!(original.id, "1");
    }

    #[rstest]
    fn registry_spawns_independent_copies() {
        let mut registry = PrototypeRegistry::new();
        registry.register("admin", Person::new("0", "root"));

        let mut first = registry.spawn("admin").unwrap();
        first.name = "changed".to_string();

        assert_eq!(registry.spawn("admin"), Some(Person::new("0", "root")));
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    fn registering_twice_replaces() {
        let mut registry = PrototypeRegistry::new();
        assert_eq!(registry.register("n", 1), None);
        assert_eq!(registry.register("n", 2), Some(1));
        assert_eq!(registry.spawn("n"), Some(2));
    }

    #[rstest]
    fn demo_matches_expected() {
        assert!(Transcript::capture(demo).matches(EXPECTED));
    }
}
