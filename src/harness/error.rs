//! Harness error type definition

use thiserror::Error;

/// Errors raised while looking up, running or verifying demonstrations.
///
/// The patterns themselves never fail at runtime: unmatched requests in a
/// handler chain degrade to a sentinel and missing steps are rejected by the
/// compiler. Only the harness surfaces errors, when a demo is unknown or its
/// transcript diverges from the expected literal output.
///
/// # Examples
///
/// ```
/// use patternbook::harness::HarnessError;
///
/// let error = HarnessError::UnknownDemo { name: "visitor".to_string() };
/// assert_eq!(error.to_string(), "no demo named `visitor` in the catalogue");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// No catalogue entry carries the requested name.
    #[error("no demo named `{name}` in the catalogue")]
    UnknownDemo {
        /// The name that was looked up
        name: String,
    },

    /// A pattern family name could not be parsed.
    #[error("unknown pattern family `{name}`")]
    UnknownFamily {
        /// The rejected input
        name: String,
    },

    /// A transcript line differs from the expected literal.
    #[error("{demo}: line {line} expected {expected:?}, got {actual:?}")]
    LineMismatch {
        /// Demo whose transcript was checked
        demo: String,
        /// One-based line number of the first difference
        line: usize,
        /// The expected literal
        expected: String,
        /// The line actually written
        actual: String,
    },

    /// The transcript has a different number of lines than expected.
    #[error("{demo}: expected {expected} lines, got {actual}")]
    LengthMismatch {
        /// Demo whose transcript was checked
        demo: String,
        /// Number of expected lines
        expected: usize,
        /// Number of lines actually written
        actual: usize,
    },
}

/// Result alias used throughout the harness.
pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn line_mismatch_display_quotes_both_lines() {
        let error = HarnessError::LineMismatch {
            demo: "chain".to_string(),
            line: 4,
            expected: "No support available.".to_string(),
            actual: "General support.".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "chain: line 4 expected \"No support available.\", got \"General support.\""
        );
    }

    #[rstest]
    fn length_mismatch_display() {
        let error = HarnessError::LengthMismatch {
            demo: "command".to_string(),
            expected: 4,
            actual: 3,
        };

        assert_eq!(error.to_string(), "command: expected 4 lines, got 3");
    }

    #[rstest]
    fn implements_std_error() {
        let error = HarnessError::UnknownFamily {
            name: "reactive".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
