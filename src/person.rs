//! The record type shared by the sorting and cloning demonstrations.

use std::fmt;

/// A person identified by a zero-padded id.
///
/// # Examples
///
/// ```rust
/// use patternbook::person::Person;
///
/// let person = Person::new("03", "AAA");
/// assert_eq!(person.id, "03");
/// assert_eq!(person.to_string(), "03 AAA");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Identifier, compared as text
    pub id: String,
    /// Display name
    pub name: String,
}

impl Person {
    /// Creates a person.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.id, self.name)
    }
}

/// Formats a list of people as `"id name, id name, ..."`.
#[must_use]
pub fn format_people(people: &[Person]) -> String {
    people
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn format_people_joins_with_commas() {
        let people = [Person::new("01", "CCC"), Person::new("02", "BBB")];
        assert_eq!(format_people(&people), "01 CCC, 02 BBB");
    }

    #[rstest]
    fn format_people_empty() {
        assert_eq!(format_people(&[]), "");
    }
}
