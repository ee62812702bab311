//! Demonstration harness.
//!
//! This module provides what every pattern demonstration shares:
//!
//! - [`Transcript`]: the captured replacement for standard output
//! - [`Demo`]: a named driver with its expected transcript
//! - [`Catalogue`]: the registry of every enabled demo
//! - [`HarnessError`]: lookup and verification failures
//!
//! # Examples
//!
//! ```rust
//! use patternbook::harness::Catalogue;
//!
//! let catalogue = Catalogue::builtin();
//! for demo in &catalogue {
//!     assert!(demo.verify().is_ok(), "{} diverged", demo.name());
//! }
//! ```

mod catalogue;
mod error;
mod transcript;

pub use catalogue::{Catalogue, Demo, Family, compare};
pub use error::{HarnessError, HarnessResult};
pub use transcript::Transcript;
