//! Creational patterns.
//!
//! How objects come into existence:
//!
//! - [`abstract_factory`]: Abstract Factory, themed widget families
//! - [`builder`]: Builder, directors driving page builders step by step
//! - [`factory_method`]: Factory Method, creators choosing the document type
//! - [`prototype`]: Prototype, copying configured instances
//! - [`singleton`]: Singleton, a process-wide clock

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

pub use abstract_factory::{Background, Button, Theme, ThemeFactory};
pub use builder::{Director, LandingPageBuilder, PageBuilder, ProfilePageBuilder};
pub use factory_method::{DocumentCreator, DocumentFile};
pub use prototype::{Prototype, PrototypeRegistry};
pub use singleton::Clock;

use crate::harness::{Demo, Family};

/// The demos of this family, in catalogue order.
#[must_use]
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "abstract-factory",
            Family::Creational,
            "Dark and light widget families from one client routine",
            abstract_factory::demo,
        )
        .expecting(abstract_factory::EXPECTED),
        Demo::new(
            "builder",
            Family::Creational,
            "A director building full and styles-only landing pages",
            builder::demo,
        )
        .expecting(builder::EXPECTED),
        Demo::new(
            "factory-method",
            Family::Creational,
            "PDF and TXT creators deciding which document to make",
            factory_method::demo,
        )
        .expecting(factory_method::EXPECTED),
        Demo::new(
            "prototype",
            Family::Creational,
            "Cloning a person and printing both copies",
            prototype::demo,
        )
        .expecting(prototype::EXPECTED),
        Demo::new(
            "singleton",
            Family::Creational,
            "One global clock reached through two handles",
            singleton::demo,
        ),
    ]
}
