//! # patternbook
//!
//! A catalogue of classic design patterns and functional-programming idioms,
//! each written as a small family of interchangeable variants wired into a
//! composition point and exercised by a deterministic demonstration.
//!
//! ## Overview
//!
//! Every demonstration shares one shape:
//!
//! - **Variants**: interchangeable implementations of one capability trait
//!   (sort strategies, support handlers, theme factories, ...)
//! - **Composition point**: the value that holds variants and decides how they
//!   are invoked, chained or substituted (a context, an invoker, a director,
//!   a decorator stack, a proxy)
//! - **Demo**: a fixed call sequence that writes what it observes into a
//!   [`Transcript`](harness::Transcript) instead of printing to stdout
//!
//! The [`harness`] module owns transcripts and the [`Catalogue`](harness::Catalogue)
//! of every demo, which can run and verify each one against its expected
//! literal output.
//!
//! ## Feature Flags
//!
//! - `behavioral`: Chain of Responsibility, Command, State, Strategy, Template Method
//! - `creational`: Abstract Factory, Builder, Factory Method, Prototype, Singleton
//! - `structural`: Adapter, Bridge, Decorator, Facade, Proxy
//! - `functional`: compose!, pipe!, curry2!, curry3!, partial!, method chaining
//! - `serde`: `Serialize`/`Deserialize` for transcripts and data records
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use patternbook::behavioral::chain::{AdvancedSupport, Chain, HelpDesk, TechnicalSupport};
//!
//! let chain = Chain::new()
//!     .append(HelpDesk)
//!     .append(TechnicalSupport)
//!     .append(AdvancedSupport);
//!
//! assert_eq!(chain.handle("advanced_support"), "Advanced support.");
//! assert_eq!(chain.handle("xyz"), "No support available.");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the harness types and the capability traits and composition
/// points of every enabled pattern family.
///
/// # Usage
///
/// ```rust
/// use patternbook::prelude::*;
///
/// assert!(!Catalogue::builtin().is_empty());
/// ```
pub mod prelude {
    pub use crate::harness::{Catalogue, Demo, Family, HarnessError, HarnessResult, Transcript};
    pub use crate::person::Person;

    #[cfg(feature = "behavioral")]
    pub use crate::behavioral::{
        Chain, Command, Control, DocumentTemplate, Handler, NO_SUPPORT, SignalState, SortStrategy,
        Sorter, TrafficSignal,
    };

    #[cfg(feature = "creational")]
    pub use crate::creational::{
        Background, Button, Clock, Director, DocumentCreator, DocumentFile, LandingPageBuilder,
        PageBuilder, ProfilePageBuilder, Prototype, PrototypeRegistry, Theme, ThemeFactory,
    };

    #[cfg(feature = "structural")]
    pub use crate::structural::{
        AdvancedRemoteControl, ConsoleLog, Device, Hdmi, LazyVideo, Logger, LoggerExt, Media,
        MediaPlayer, Monitor, RemoteControl, Timestamp, Vga, VgaToHdmi, VideoFile, WithDate,
        WithTime,
    };

    #[cfg(feature = "functional")]
    pub use crate::functional::{
        Counter, compose, compose_all, curry2, curry3, flip, identity, partial, pipe, pipe_all,
    };
}

pub mod harness;
pub mod person;

#[cfg(feature = "behavioral")]
pub mod behavioral;

#[cfg(feature = "creational")]
pub mod creational;

#[cfg(feature = "structural")]
pub mod structural;

#[cfg(feature = "functional")]
pub mod functional;
