//! Functional-programming idioms.
//!
//! - [`compose`]: `compose!`, `pipe!` and their runtime counterparts
//! - [`curry`]: `curry2!`, `curry3!`
//! - [`partial`]: `partial!` with `__` placeholders
//! - [`chaining`]: methods returning `&mut Self`
//!
//! The macros are exported at the crate root and re-exported here.

pub mod chaining;
pub mod compose;
pub mod curry;
pub mod partial;

pub use chaining::Counter;
pub use compose::{compose_all, flip, identity, pipe_all};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::partial;
pub use crate::pipe;

use crate::harness::{Demo, Family};

/// The demos of this family, in catalogue order.
#[must_use]
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "composition",
            Family::Functional,
            "Composing and piping increment and doubling functions",
            compose::demo,
        )
        .expecting(compose::EXPECTED),
        Demo::new(
            "currying",
            Family::Functional,
            "Specialising greeting, color and multiplier functions one argument at a time",
            curry::demo,
        )
        .expecting(curry::EXPECTED),
        Demo::new(
            "partial-application",
            Family::Functional,
            "Fixing the first word of a three-word join",
            partial::demo,
        )
        .expecting(partial::EXPECTED),
        Demo::new(
            "method-chaining",
            Family::Functional,
            "A counter driven by one chained expression",
            chaining::demo,
        )
        .expecting(chaining::EXPECTED),
    ]
}
