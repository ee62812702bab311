//! Behavioral patterns.
//!
//! How objects share responsibility for a request:
//!
//! - [`chain`]: Chain of Responsibility, ordered handlers with a sentinel fallback
//! - [`command`]: Command, requests as values triggered by an invoker
//! - [`state`]: State, a traffic signal whose lights choose their successor
//! - [`strategy`]: Strategy, interchangeable sorting algorithms
//! - [`template_method`]: Template Method, a fixed skeleton with pluggable steps

pub mod chain;
pub mod command;
pub mod state;
pub mod strategy;
pub mod template_method;

pub use chain::{Chain, Handler, NO_SUPPORT};
pub use command::{Command, Control};
pub use state::{SignalState, TrafficSignal};
pub use strategy::{SortStrategy, Sorter};
pub use template_method::DocumentTemplate;

use crate::harness::{Demo, Family};

/// The demos of this family, in catalogue order.
#[must_use]
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "chain-of-responsibility",
            Family::Behavioral,
            "Support levels passing a request along until one answers",
            chain::demo,
        )
        .expecting(chain::EXPECTED),
        Demo::new(
            "command",
            Family::Behavioral,
            "A remote control pressing volume commands on a speaker",
            command::demo,
        )
        .expecting(command::EXPECTED),
        Demo::new(
            "state",
            Family::Behavioral,
            "A traffic signal cycling red, green, yellow",
            state::demo,
        )
        .expecting(state::EXPECTED),
        Demo::new(
            "strategy",
            Family::Behavioral,
            "Sorting people by id, then by name",
            strategy::demo,
        )
        .expecting(strategy::EXPECTED),
        Demo::new(
            "template-method",
            Family::Behavioral,
            "Processing PDF and TXT documents through one skeleton",
            template_method::demo,
        )
        .expecting(template_method::EXPECTED),
    ]
}
