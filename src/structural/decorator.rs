//! Decorator.
//!
//! A [`Logger`] formats messages. Decorators wrap any logger by value and
//! prefix its output, so they stack in any order and any depth:
//! `WithDate(WithTime(ConsoleLog))` renders `"{date} | {time} | INFO: msg"`.
//!
//! Decorators read the current time through a [`Timestamp`] source.
//! [`SystemClock`] reads the local wall clock; [`FixedClock`] always returns
//! the same values, which keeps transcripts reproducible.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::structural::decorator::{ConsoleLog, FixedClock, Logger, LoggerExt};
//!
//! let clock = FixedClock::new("12:00:00", "01/01/2024");
//! let logger = ConsoleLog::new("WARN").with_time(clock).with_date(clock);
//!
//! assert_eq!(logger.log("disk almost full"), "01/01/2024 | 12:00:00 | WARN: disk almost full");
//! ```

use chrono::Local;

use crate::harness::Transcript;

/// Formats a log message.
pub trait Logger {
    /// Returns the formatted line for `message`.
    fn log(&self, message: &str) -> String;
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, message: &str) -> String {
        (**self).log(message)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, message: &str) -> String {
        (**self).log(message)
    }
}

/// The undecorated logger: `"{level}: {message}"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleLog {
    level: String,
}

impl ConsoleLog {
    /// Creates a logger tagging every line with `level`.
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }
}

impl Logger for ConsoleLog {
    fn log(&self, message: &str) -> String {
        format!("{}: {message}", self.level)
    }
}

/// A source of formatted time and date stamps.
pub trait Timestamp {
    /// Current time of day.
    fn time(&self) -> String;

    /// Current calendar date.
    fn date(&self) -> String;
}

/// Local wall-clock time, `HH:MM:SS` and `MM/DD/YYYY`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Timestamp for SystemClock {
    fn time(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn date(&self) -> String {
        Local::now().format("%m/%d/%Y").to_string()
    }
}

/// Always reports the same stamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    time: &'static str,
    date: &'static str,
}

impl FixedClock {
    /// Creates a clock stuck at `time` on `date`.
    #[must_use]
    pub const fn new(time: &'static str, date: &'static str) -> Self {
        Self { time, date }
    }
}

impl Timestamp for FixedClock {
    fn time(&self) -> String {
        self.time.to_string()
    }

    fn date(&self) -> String {
        self.date.to_string()
    }
}

/// Prefixes the inner logger's line with the time of day.
#[derive(Clone, Debug)]
pub struct WithTime<L, C = SystemClock> {
    inner: L,
    clock: C,
}

impl<L: Logger, C: Timestamp> WithTime<L, C> {
    /// Wraps `inner`, reading time from `clock`.
    pub const fn new(inner: L, clock: C) -> Self {
        Self { inner, clock }
    }
}

impl<L: Logger, C: Timestamp> Logger for WithTime<L, C> {
    fn log(&self, message: &str) -> String {
        format!("{} | {}", self.clock.time(), self.inner.log(message))
    }
}

/// Prefixes the inner logger's line with the date.
#[derive(Clone, Debug)]
pub struct WithDate<L, C = SystemClock> {
    inner: L,
    clock: C,
}

impl<L: Logger, C: Timestamp> WithDate<L, C> {
    /// Wraps `inner`, reading the date from `clock`.
    pub const fn new(inner: L, clock: C) -> Self {
        Self { inner, clock }
    }
}

impl<L: Logger, C: Timestamp> Logger for WithDate<L, C> {
    fn log(&self, message: &str) -> String {
        format!("{} | {}", self.clock.date(), self.inner.log(message))
    }
}

/// Method-call syntax for stacking decorators.
pub trait LoggerExt: Logger + Sized {
    /// Wraps `self` in [`WithTime`].
    fn with_time<C: Timestamp>(self, clock: C) -> WithTime<Self, C> {
        WithTime::new(self, clock)
    }

    /// Wraps `self` in [`WithDate`].
    fn with_date<C: Timestamp>(self, clock: C) -> WithDate<Self, C> {
        WithDate::new(self, clock)
    }
}

impl<L: Logger> LoggerExt for L {}

/// Clock used by [`demo`].
pub const DEMO_CLOCK: FixedClock = FixedClock::new("10:30:00", "05/01/2024");

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "INFO: Using the component interface",
    "10:30:00 | INFO: Using one decorator",
    "05/01/2024 | 10:30:00 | INFO: Using two decorators",
];

/// Logs through the plain logger, then one and two decorators around it.
pub fn demo(out: &mut Transcript) {
    let system = ConsoleLog::new("INFO");
    out.line(system.log("Using the component interface"));

    let timed = (&system).with_time(DEMO_CLOCK);
    let dated = (&timed).with_date(DEMO_CLOCK);
    out.line(timed.log("Using one decorator"));
    out.line(dated.log("Using two decorators"));
}
