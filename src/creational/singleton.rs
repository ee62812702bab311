//! Singleton.
//!
//! [`Clock::global`] always returns the same process-wide instance. The
//! instance is created on first access through [`OnceLock`] and lives for the
//! rest of the process; [`Clock`] has no public constructor.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::creational::singleton::Clock;
//!
//! let first = Clock::global();
//! let second = Clock::global();
//!
//! assert!(std::ptr::eq(first, second));
//! assert!(first.display().ends_with('Z'));
//! ```

use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::harness::Transcript;

/// The process-wide clock.
#[derive(Debug)]
pub struct Clock {
    started: DateTime<Utc>,
}

impl Clock {
    /// Returns the single instance, creating it on first call.
    pub fn global() -> &'static Self {
        static CLOCK: OnceLock<Clock> = OnceLock::new();
        CLOCK.get_or_init(|| {
            tracing::debug!("initialising global clock");
            Self {
                started: Utc::now(),
            }
        })
    }

    /// The current UTC time as ISO-8601 with millisecond precision,
    /// e.g. `2024-05-01T12:34:56.789Z`.
    #[must_use]
    pub fn display(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// When the instance was created.
    #[must_use]
    pub const fn started(&self) -> DateTime<Utc> {
        self.started
    }
}

/// Shows both handles are the same instance, then prints the time twice.
///
/// The timestamps depend on the wall clock, so this demo has no fixed
/// expected transcript.
pub fn demo(out: &mut Transcript) {
    let first = Clock::global();
    let second = Clock::global();

    out.line(std::ptr::eq(first, second).to_string());
    out.line(first.display());
    out.line(second.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn global_is_one_instance() {
        assert!(std::ptr::eq(Clock::global(), Clock::global()));
    }

    #[rstest]
    fn instance_is_created_once() {
        assert_eq!(Clock::global().started(), Clock::global().started());
    }

    #[rstest]
    fn display_is_millisecond_utc() {
        let stamp = Clock::global().display();
        let parsed = DateTime::parse_from_rfc3339(&stamp).unwrap();

        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert_eq!(stamp.len(), "2024-05-01T12:34:56.789Z".len());
    }

    #[rstest]
    fn demo_reports_identity_first() {
        let out = Transcript::capture(demo);
        assert_eq!(out.len(), 3);
        assert_eq!(out.lines()[0], "true");
    }
}
