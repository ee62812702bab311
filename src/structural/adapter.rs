//! Adapter.
//!
//! A [`Monitor`] only accepts HDMI. Clients that speak [`Vga`] reach it
//! through [`VgaToHdmi`], which announces itself and then forwards every call
//! to the wrapped [`Hdmi`] device.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::harness::Transcript;
//! use patternbook::structural::adapter::{Monitor, Vga, VgaToHdmi};
//!
//! let adapter = VgaToHdmi::new(Monitor);
//! let out = Transcript::capture(|out| adapter.connect(out));
//!
//! assert_eq!(out.lines(), ["Using VGA to HDMI adapter", "Using HDMI"]);
//! ```

use crate::harness::Transcript;

/// The interface the monitor provides.
pub trait Hdmi {
    /// Establishes the connection.
    fn connect(&self, out: &mut Transcript);

    /// Shows the picture.
    fn display(&self, out: &mut Transcript);
}

/// The interface VGA clients require.
pub trait Vga {
    /// Establishes the connection.
    fn connect(&self, out: &mut Transcript);

    /// Shows the picture.
    fn display(&self, out: &mut Transcript);
}

/// An HDMI-only monitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Monitor;

impl Hdmi for Monitor {
    fn connect(&self, out: &mut Transcript) {
        out.line("Using HDMI");
    }

    fn display(&self, out: &mut Transcript) {
        out.line("Hello, World!");
    }
}

/// Presents any [`Hdmi`] device as [`Vga`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VgaToHdmi<H> {
    adaptee: H,
}

impl<H: Hdmi> VgaToHdmi<H> {
    /// Wraps `adaptee`.
    pub const fn new(adaptee: H) -> Self {
        Self { adaptee }
    }

    /// Returns the wrapped device.
    pub fn into_inner(self) -> H {
        self.adaptee
    }
}

impl<H: Hdmi> Vga for VgaToHdmi<H> {
    fn connect(&self, out: &mut Transcript) {
        out.line("Using VGA to HDMI adapter");
        self.adaptee.connect(out);
    }

    fn display(&self, out: &mut Transcript) {
        self.adaptee.display(out);
    }
}

/// A VGA client: connects, then displays.
pub fn plug_in(device: &dyn Vga, out: &mut Transcript) {
    device.connect(out);
    device.display(out);
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "Using HDMI",
    "Hello, World!",
    "Using VGA to HDMI adapter",
    "Using HDMI",
    "Hello, World!",
];

/// Uses the monitor directly, then through the adapter.
pub fn demo(out: &mut Transcript) {
    let monitor = Monitor;
    monitor.connect(out);
    monitor.display(out);

    let adapter = VgaToHdmi::new(monitor);
    plug_in(&adapter, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_passes_straight_through() {
        let out = Transcript::capture(|out| Vga::display(&VgaToHdmi::new(Monitor), out));
        assert_eq!(out.lines(), ["Hello, World!"]);
    }

    #[rstest]
    fn adapter_accepts_any_hdmi_device() {
        struct Projector;

        impl Hdmi for Projector {
            fn connect(&self, out: &mut Transcript) {
                out.line("projector linked");
            }

            fn display(&self, out: &mut Transcript) {
                out.line("beam");
            }
        }

        let out = Transcript::capture(|out| plug_in(&VgaToHdmi::new(Projector), out));
        assert_eq!(
            out.lines(),
            ["Using VGA to HDMI adapter", "projector linked", "beam"]
        );
    }

    #[rstest]
    fn adapter_hands_back_the_device() {
        let adapter = VgaToHdmi::new(Monitor);
        let out = Transcript::capture(|out| plug_in(&adapter, out));

        assert_eq!(out.len(), 3);
        assert_eq!(adapter.into_inner(), Monitor);
    }

    #[rstest]
    fn demo_matches_expected() {
        assert!(Transcript::capture(demo).matches(EXPECTED));
    }
}
