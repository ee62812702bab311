//! State.
//!
//! A [`TrafficSignal`] behaves differently depending on the light it shows.
//! Each light is its own [`SignalState`] and decides which light comes next:
//! changing consumes the current state and returns its successor, which the
//! signal installs. The cycle is Red, Green, Yellow, Red, ... with no terminal
//! state.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::behavioral::state::{Color, Red, TrafficSignal};
//! use patternbook::harness::Transcript;
//!
//! let mut signal = TrafficSignal::new(Red);
//! let mut out = Transcript::new();
//!
//! signal.change(&mut out);
//! assert_eq!(signal.color(), Color::Green);
//! assert_eq!(out.lines(), ["Green Signal!"]);
//! ```

use std::fmt;

use crate::harness::Transcript;

/// The light a signal shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Stop
    Red,
    /// Go
    Green,
    /// Prepare to stop
    Yellow,
}

impl Color {
    /// Returns the state object for this light.
    #[must_use]
    pub fn state(self) -> Box<dyn SignalState> {
        match self {
            Self::Red => Box::new(Red),
            Self::Green => Box::new(Green),
            Self::Yellow => Box::new(Yellow),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
        })
    }
}

/// One light of the signal.
pub trait SignalState {
    /// The light this state shows.
    fn color(&self) -> Color;

    /// Announces and returns the next state.
    fn change(self: Box<Self>, out: &mut Transcript) -> Box<dyn SignalState>;
}

/// Red light; turns green.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Red;

impl SignalState for Red {
    fn color(&self) -> Color {
        Color::Red
    }

    fn change(self: Box<Self>, out: &mut Transcript) -> Box<dyn SignalState> {
        out.line("Green Signal!");
        Box::new(Green)
    }
}

/// Green light; turns yellow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Green;

impl SignalState for Green {
    fn color(&self) -> Color {
        Color::Green
    }

    fn change(self: Box<Self>, out: &mut Transcript) -> Box<dyn SignalState> {
        out.line("Yellow Signal!");
        Box::new(Yellow)
    }
}

/// Yellow light; turns red.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Yellow;

impl SignalState for Yellow {
    fn color(&self) -> Color {
        Color::Yellow
    }

    fn change(self: Box<Self>, out: &mut Transcript) -> Box<dyn SignalState> {
        out.line("Red Signal!");
        Box::new(Red)
    }
}

/// The context: holds the current light and lets it pick its successor.
pub struct TrafficSignal {
    state: Box<dyn SignalState>,
}

impl TrafficSignal {
    /// Creates a signal showing `initial`.
    pub fn new<S>(initial: S) -> Self
    where
        S: SignalState + 'static,
    {
        Self::from_state(Box::new(initial))
    }

    /// Creates a signal from an already boxed state.
    #[must_use]
    pub fn from_state(state: Box<dyn SignalState>) -> Self {
        Self { state }
    }

    /// Advances to the next light.
    pub fn change(&mut self, out: &mut Transcript) {
        let current = std::mem::replace(&mut self.state, Box::new(Red));
        let from = current.color();
        self.state = current.change(out);
        tracing::debug!(%from, to = %self.state.color(), "signal changed");
    }

    /// The light currently shown.
    #[must_use]
    pub fn color(&self) -> Color {
        self.state.color()
    }
}

impl fmt::Debug for TrafficSignal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TrafficSignal")
            .field("color", &self.color())
            .finish()
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "Green Signal!",
    "Yellow Signal!",
    "Red Signal!",
    "Green Signal!",
    "Yellow Signal!",
    "Red Signal!",
];

/// Starts at red and changes the signal six times.
pub fn demo(out: &mut Transcript) {
    let mut signal = TrafficSignal::new(Red);
    for _ in 0..6 {
        signal.change(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Color::Yellow, Color::Red)]
    #[case(Color::Red, Color::Green)]
    fn color_reports_the_installed_state(#[case] start: Color, #[case] next: Color) {
        let mut signal = TrafficSignal::from_state(start.state());
        assert_eq!(signal.color(), start);

        signal.change(&mut Transcript::new());
        assert_eq!(signal.color(), next);
        assert_eq!(format!("{signal:?}"), format!("TrafficSignal {{ color: {next:?} }}"));
    }

    #[rstest]
    fn color_display_honours_width() {
        assert_eq!(format!("[{:>6}]", Color::Red), "[   Red]");
    }

    #[rstest]
    #[case(Color::Red, Color::Green)]
    #[case(Color::Green, Color::Yellow)]
    #[case(Color::Yellow, Color::Red)]
    fn each_state_picks_its_successor(#[case] from: Color, #[case] to: Color) {
        let mut signal = TrafficSignal::from_state(from.state());
        signal.change(&mut Transcript::new());
        assert_eq!(signal.color(), to);
    }

    #[rstest]
    #[case(Color::Red)]
    #[case(Color::Green)]
    #[case(Color::Yellow)]
    fn cycle_has_period_three(#[case] start: Color) {
        let mut signal = TrafficSignal::from_state(start.state());
        let mut out = Transcript::new();
        for _ in 0..3 {
            signal.change(&mut out);
        }
        assert_eq!(signal.color(), start);
        assert_eq!(out.len(), 3);
    }

    #[rstest]
    fn demo_matches_expected() {
        assert!(Transcript::capture(demo).matches(EXPECTED));
    }
}
