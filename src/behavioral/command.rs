//! Command.
//!
//! Requests are turned into values. A [`Speaker`] (the receiver) knows how to
//! change its volume; [`VolumeUp`] and [`VolumeDown`] bind one of those actions
//! to a speaker; the [`Control`] (the invoker) presses whatever command it
//! currently holds without knowing which action it triggers.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::behavioral::command::{Control, Speaker, VolumeDown, VolumeUp};
//! use patternbook::harness::Transcript;
//!
//! let speaker = Speaker;
//! let mut control = Control::new(VolumeUp::new(&speaker));
//! let mut out = Transcript::new();
//!
//! control.press_button(&mut out);
//! control.set_command(VolumeDown::new(&speaker));
//! control.press_button(&mut out);
//!
//! assert_eq!(out.lines(), ["+", "-"]);
//! ```

use crate::harness::Transcript;

/// An action that can be triggered without knowing what it does.
pub trait Command {
    /// Performs the action.
    fn execute(&self, out: &mut Transcript);
}

/// Closures are commands too.
impl<F> Command for F
where
    F: Fn(&mut Transcript),
{
    fn execute(&self, out: &mut Transcript) {
        self(out);
    }
}

/// The receiver: knows how to perform every volume action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Speaker;

impl Speaker {
    /// Raises the volume by one step.
    pub fn volume_up(&self, out: &mut Transcript) {
        out.line("+");
    }

    /// Lowers the volume by one step.
    pub fn volume_down(&self, out: &mut Transcript) {
        out.line("-");
    }
}

/// Raises the volume of a borrowed speaker.
#[derive(Clone, Copy, Debug)]
pub struct VolumeUp<'a> {
    speaker: &'a Speaker,
}

impl<'a> VolumeUp<'a> {
    /// Binds the command to `speaker`.
    #[must_use]
    pub const fn new(speaker: &'a Speaker) -> Self {
        Self { speaker }
    }
}

impl Command for VolumeUp<'_> {
    fn execute(&self, out: &mut Transcript) {
        self.speaker.volume_up(out);
    }
}

/// Lowers the volume of a borrowed speaker.
#[derive(Clone, Copy, Debug)]
pub struct VolumeDown<'a> {
    speaker: &'a Speaker,
}

impl<'a> VolumeDown<'a> {
    /// Binds the command to `speaker`.
    #[must_use]
    pub const fn new(speaker: &'a Speaker) -> Self {
        Self { speaker }
    }
}

impl Command for VolumeDown<'_> {
    fn execute(&self, out: &mut Transcript) {
        self.speaker.volume_down(out);
    }
}

/// The invoker: a remote control with one programmable button.
pub struct Control<'a> {
    command: Box<dyn Command + 'a>,
    presses: usize,
}

impl<'a> Control<'a> {
    /// Creates a control whose button triggers `command`.
    pub fn new<C>(command: C) -> Self
    where
        C: Command + 'a,
    {
        Self {
            command: Box::new(command),
            presses: 0,
        }
    }

    /// Reprograms the button.
    pub fn set_command<C>(&mut self, command: C)
    where
        C: Command + 'a,
    {
        tracing::debug!(presses = self.presses, "control reprogrammed");
        self.command = Box::new(command);
    }

    /// Triggers the current command.
    pub fn press_button(&mut self, out: &mut Transcript) {
        self.presses += 1;
        self.command.execute(out);
    }

    /// Returns how many times the button has been pressed.
    #[must_use]
    pub const fn presses(&self) -> usize {
        self.presses
    }
}

impl std::fmt::Debug for Control<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Control")
            .field("presses", &self.presses)
            .finish_non_exhaustive()
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &["+", "+", "-", "-"];

/// Presses volume up twice, reprograms the button, presses volume down twice.
pub fn demo(out: &mut Transcript) {
    let speaker = Speaker;
    let mut control = Control::new(VolumeUp::new(&speaker));
    control.press_button(out);
    control.press_button(out);
    control.set_command(VolumeDown::new(&speaker));
    control.press_button(out);
    control.press_button(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn switching_command_changes_subsequent_output() {
        let speaker = Speaker;
        let mut control = Control::new(VolumeUp::new(&speaker));
        let mut out = Transcript::new();

        control.press_button(&mut out);
        control.set_command(VolumeDown::new(&speaker));
        control.press_button(&mut out);
        control.press_button(&mut out);

        assert_eq!(out.lines(), ["+", "-", "-"]);
        assert_eq!(control.presses(), 3);
    }

    #[rstest]
    fn closure_command() {
        let mut control = Control::new(|out: &mut Transcript| out.line("mute"));
        let out = Transcript::capture(|out| control.press_button(out));
        assert_eq!(out.lines(), ["mute"]);
    }

    #[rstest]
    fn demo_matches_expected() {
        assert!(Transcript::capture(demo).matches(EXPECTED));
    }
}
