//! The registry of demonstrations.
//!
//! Every pattern module contributes one [`Demo`]: a name, the family it
//! belongs to, a driver function writing into a [`Transcript`], and the literal
//! lines that driver is expected to produce. [`Catalogue::builtin`] collects
//! the demos of every enabled feature.

use std::fmt;
use std::str::FromStr;

use super::error::{HarnessError, HarnessResult};
use super::transcript::Transcript;

/// The group a pattern or idiom belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Family {
    /// How objects distribute responsibility and communicate
    Behavioral,
    /// How objects get constructed
    Creational,
    /// How objects are assembled into larger structures
    Structural,
    /// Function-level idioms: composition, currying, partial application
    Functional,
}

impl Family {
    /// Every family, in display order.
    pub const ALL: [Self; 4] = [
        Self::Behavioral,
        Self::Creational,
        Self::Structural,
        Self::Functional,
    ];

    /// Returns the lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Behavioral => "behavioral",
            Self::Creational => "creational",
            Self::Structural => "structural",
            Self::Functional => "functional",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(self.as_str())
    }
}

impl FromStr for Family {
    type Err = HarnessError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(input))
            .ok_or_else(|| HarnessError::UnknownFamily {
                name: input.to_string(),
            })
    }
}

/// One runnable demonstration.
///
/// # Examples
///
/// ```rust
/// use patternbook::harness::{Demo, Family, Transcript};
///
/// fn greet(out: &mut Transcript) {
///     out.line("hello");
/// }
///
/// let demo = Demo::new("greet", Family::Functional, "Says hello", greet)
///     .expecting(&["hello"]);
///
/// assert_eq!(demo.run().lines(), ["hello"]);
/// assert!(demo.verify().is_ok());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Demo {
    name: &'static str,
    family: Family,
    summary: &'static str,
    driver: fn(&mut Transcript),
    expected: Option<&'static [&'static str]>,
}

impl Demo {
    /// Creates a demo with no expected transcript.
    #[must_use]
    pub const fn new(
        name: &'static str,
        family: Family,
        summary: &'static str,
        driver: fn(&mut Transcript),
    ) -> Self {
        Self {
            name,
            family,
            summary,
            driver,
            expected: None,
        }
    }

    /// Attaches the literal lines the driver must produce.
    #[must_use]
    pub const fn expecting(mut self, expected: &'static [&'static str]) -> Self {
        self.expected = Some(expected);
        self
    }

    /// The unique catalogue name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The family this demo belongs to.
    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    /// A one-line description.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        self.summary
    }

    /// The expected transcript, or `None` when the output depends on the
    /// wall clock.
    #[must_use]
    pub const fn expected(&self) -> Option<&'static [&'static str]> {
        self.expected
    }

    /// Runs the driver against a fresh transcript.
    #[must_use]
    pub fn run(&self) -> Transcript {
        tracing::debug!(demo = self.name, family = %self.family, "running demo");
        Transcript::capture(self.driver)
    }

    /// Runs the driver and checks its transcript against the expected lines.
    ///
    /// Demos without an expectation only have to run to completion.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::LineMismatch`] for the first differing line, or
    /// [`HarnessError::LengthMismatch`] if one transcript is a prefix of the
    /// other.
    pub fn verify(&self) -> HarnessResult<Transcript> {
        let transcript = self.run();
        if let Some(expected) = self.expected {
            compare(self.name, expected, &transcript)?;
        }
        Ok(transcript)
    }
}

/// Compares a transcript with literal expected lines.
///
/// # Errors
///
/// See [`Demo::verify`].
pub fn compare(demo: &str, expected: &[&str], actual: &Transcript) -> HarnessResult<()> {
    let mismatch = expected
        .iter()
        .zip(actual.lines())
        .position(|(expected, actual)| expected != actual);

    if let Some(index) = mismatch {
        tracing::debug!(demo, line = index + 1, "transcript diverged");
        return Err(HarnessError::LineMismatch {
            demo: demo.to_string(),
            line: index + 1,
            expected: expected[index].to_string(),
            actual: actual.lines()[index].clone(),
        });
    }

    if expected.len() != actual.len() {
        return Err(HarnessError::LengthMismatch {
            demo: demo.to_string(),
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    Ok(())
}

/// An ordered, name-addressable collection of demos.
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    demos: Vec<Demo>,
}

impl Catalogue {
    /// Creates an empty catalogue.
    #[must_use]
    pub const fn new() -> Self {
        Self { demos: Vec::new() }
    }

    /// Collects the demos of every enabled pattern family.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalogue = Self::new();

        #[cfg(feature = "behavioral")]
        catalogue.extend(crate::behavioral::demos());

        #[cfg(feature = "creational")]
        catalogue.extend(crate::creational::demos());

        #[cfg(feature = "structural")]
        catalogue.extend(crate::structural::demos());

        #[cfg(feature = "functional")]
        catalogue.extend(crate::functional::demos());

        catalogue
    }

    /// Adds a demo, replacing any existing entry with the same name.
    pub fn register(&mut self, demo: Demo) -> &mut Self {
        match self.demos.iter_mut().find(|entry| entry.name == demo.name) {
            Some(entry) => {
                tracing::debug!(demo = demo.name, "replacing catalogue entry");
                *entry = demo;
            }
            None => self.demos.push(demo),
        }
        self
    }

    /// Looks a demo up by name.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownDemo`] if no entry has that name.
    pub fn get(&self, name: &str) -> HarnessResult<&Demo> {
        self.demos
            .iter()
            .find(|demo| demo.name == name)
            .ok_or_else(|| HarnessError::UnknownDemo {
                name: name.to_string(),
            })
    }

    /// Runs the named demo.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownDemo`] if no entry has that name.
    pub fn run(&self, name: &str) -> HarnessResult<Transcript> {
        self.get(name).map(Demo::run)
    }

    /// Runs and verifies the named demo.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownDemo`] for unknown names, otherwise the
    /// outcome of [`Demo::verify`].
    pub fn verify(&self, name: &str) -> HarnessResult<Transcript> {
        self.get(name)?.verify()
    }

    /// Iterates over every demo in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Demo> {
        self.demos.iter()
    }

    /// Iterates over the demos of one family.
    pub fn by_family(&self, family: Family) -> impl Iterator<Item = &Demo> {
        self.demos.iter().filter(move |demo| demo.family == family)
    }

    /// Returns the number of registered demos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.demos.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }
}

impl Extend<Demo> for Catalogue {
    fn extend<I: IntoIterator<Item = Demo>>(&mut self, iter: I) {
        for demo in iter {
            self.register(demo);
        }
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Demo;
    type IntoIter = std::slice::Iter<'a, Demo>;

    fn into_iter(self) -> Self::IntoIter {
        self.demos.iter()
    }
}
