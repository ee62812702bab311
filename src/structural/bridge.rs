//! Bridge.
//!
//! Two hierarchies vary independently. Devices implement the primitive
//! [`Device`] operations; remotes build higher-level operations on top of
//! any device. A remote never knows which device it drives.

use crate::harness::Transcript;

/// The implementation side: primitive power operations.
pub trait Device {
    /// Turns the device on, announcing it.
    fn power_on(&mut self, out: &mut Transcript);

    /// Turns the device off silently.
    fn power_off(&mut self);

    /// Whether the device is on.
    fn is_on(&self) -> bool;
}

/// A speaker that starts pairing when switched on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BluetoothSpeaker {
    power: bool,
}

impl Device for BluetoothSpeaker {
    fn power_on(&mut self, out: &mut Transcript) {
        self.power = true;
        out.line("The Bluetooth device is ready to pair");
    }

    fn power_off(&mut self) {
        self.power = false;
    }

    fn is_on(&self) -> bool {
        self.power
    }
}

/// A screen that greets when switched on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    power: bool,
}

impl Device for Screen {
    fn power_on(&mut self, out: &mut Transcript) {
        self.power = true;
        out.line("Hello world!");
    }

    fn power_off(&mut self) {
        self.power = false;
    }

    fn is_on(&self) -> bool {
        self.power
    }
}

/// The abstraction side: a remote holding one device.
#[derive(Clone, Debug, Default)]
pub struct RemoteControl<D> {
    device: D,
}

impl<D: Device> RemoteControl<D> {
    /// Pairs the remote with `device`.
    pub const fn new(device: D) -> Self {
        Self { device }
    }

    /// Switches the device to the opposite power state.
    pub fn toggle_power(&mut self, out: &mut Transcript) {
        if self.device.is_on() {
            self.device.power_off();
        } else {
            self.device.power_on(out);
        }
    }

    /// The device being driven.
    pub const fn device(&self) -> &D {
        &self.device
    }
}

/// A refined remote adding operations composed from the basic ones.
#[derive(Clone, Debug, Default)]
pub struct AdvancedRemoteControl<D> {
    remote: RemoteControl<D>,
}

impl<D: Device> AdvancedRemoteControl<D> {
    /// Pairs the remote with `device`.
    pub const fn new(device: D) -> Self {
        Self {
            remote: RemoteControl::new(device),
        }
    }

    /// See [`RemoteControl::toggle_power`].
    pub fn toggle_power(&mut self, out: &mut Transcript) {
        self.remote.toggle_power(out);
    }

    /// Toggles twice, ending in the starting state.
    pub fn power_cycle(&mut self, out: &mut Transcript) {
        self.remote.toggle_power(out);
        self.remote.toggle_power(out);
    }

    /// The device being driven.
    pub const fn device(&self) -> &D {
        self.remote.device()
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &["The Bluetooth device is ready to pair"];

/// Toggles a speaker on through a basic remote.
pub fn demo(out: &mut Transcript) {
    let mut remote = RemoteControl::new(BluetoothSpeaker::default());
    remote.toggle_power(out);
}
