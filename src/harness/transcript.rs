//! Captured demonstration output.
//!
//! A [`Transcript`] stands in for standard output: every demo writes the lines
//! it would have printed into one, so that tests and the gallery binary can
//! inspect them as plain values.

use std::fmt;

/// The ordered lines written by one demonstration run.
///
/// # Examples
///
/// ```rust
/// use patternbook::harness::Transcript;
///
/// let mut out = Transcript::new();
/// out.line("open");
/// out.line(format!("{} created", "PDF"));
///
/// assert_eq!(out.lines(), ["open", "PDF created"]);
/// assert_eq!(out.to_string(), "open\nPDF created");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Runs `body` against a fresh transcript and returns what it wrote.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patternbook::harness::Transcript;
    ///
    /// let captured = Transcript::capture(|out| {
    ///     out.line("+");
    ///     out.line("-");
    /// });
    /// assert_eq!(captured.lines(), ["+", "-"]);
    /// ```
    pub fn capture<F>(body: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut transcript = Self::new();
        body(&mut transcript);
        transcript
    }

    /// Appends one line.
    pub fn line(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::trace!(line = %line, "transcript line");
        self.lines.push(line);
    }

    /// Returns the recorded lines in emission order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the last recorded line, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Returns the number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `true` if the transcript equals `expected` line for line.
    #[must_use]
    pub fn matches(&self, expected: &[&str]) -> bool {
        self.lines.len() == expected.len()
            && self
                .lines
                .iter()
                .zip(expected)
                .all(|(actual, expected)| actual == expected)
    }

    /// Consumes the transcript, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                formatter.write_str("\n")?;
            }
            formatter.write_str(line)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Transcript {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Transcript {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for line in iter {
            self.line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert_eq!(transcript.last(), None);
        assert_eq!(transcript.to_string(), "");
    }

    #[rstest]
    fn lines_keep_emission_order() {
        let mut transcript = Transcript::new();
        transcript.line("first");
        transcript.line(String::from("second"));

        assert_eq!(transcript.lines(), ["first", "second"]);
        assert_eq!(transcript.last(), Some("second"));
    }

    #[rstest]
    #[case(&["a", "b"], true)]
    #[case(&["a"], false)]
    #[case(&["a", "b", "c"], false)]
    #[case(&["a", "x"], false)]
    fn matches_requires_identical_lines(#[case] expected: &[&str], #[case] result: bool) {
        let transcript: Transcript = ["a", "b"].into_iter().collect();
        assert_eq!(transcript.matches(expected), result);
    }

    #[rstest]
    fn extend_appends_after_existing_lines() {
        let mut transcript = Transcript::capture(|out| out.line("head"));
        transcript.extend(["tail"]);
        assert_eq!(transcript.into_lines(), vec!["head", "tail"]);
    }
}
