//! Structural patterns.
//!
//! How objects are assembled into larger structures:
//!
//! - [`adapter`]: Adapter, a VGA client driving an HDMI monitor
//! - [`bridge`]: Bridge, remotes and devices varying independently
//! - [`decorator`]: Decorator, stackable timestamp prefixes on a logger
//! - [`facade`]: Facade, one media call over audio and video subsystems
//! - [`proxy`]: Proxy, a video that loads on first play

pub mod adapter;
pub mod bridge;
pub mod decorator;
pub mod facade;
pub mod proxy;

pub use adapter::{Hdmi, Monitor, Vga, VgaToHdmi};
pub use bridge::{AdvancedRemoteControl, Device, RemoteControl};
pub use decorator::{ConsoleLog, Logger, LoggerExt, Timestamp, WithDate, WithTime};
pub use facade::MediaPlayer;
pub use proxy::{LazyVideo, Media, VideoFile};

use crate::harness::{Demo, Family};

/// The demos of this family, in catalogue order.
#[must_use]
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "adapter",
            Family::Structural,
            "An HDMI monitor used directly and through a VGA adapter",
            adapter::demo,
        )
        .expecting(adapter::EXPECTED),
        Demo::new(
            "bridge",
            Family::Structural,
            "A remote control switching on a Bluetooth speaker",
            bridge::demo,
        )
        .expecting(bridge::EXPECTED),
        Demo::new(
            "decorator",
            Family::Structural,
            "A logger wrapped in time and date prefixes",
            decorator::demo,
        )
        .expecting(decorator::EXPECTED),
        Demo::new(
            "facade",
            Family::Structural,
            "A media player fronting audio and video subsystems",
            facade::demo,
        )
        .expecting(facade::EXPECTED),
        Demo::new(
            "proxy",
            Family::Structural,
            "A real video next to a lazily loaded proxy",
            proxy::demo,
        )
        .expecting(proxy::EXPECTED),
    ]
}
