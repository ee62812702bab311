#![cfg(all(
    feature = "behavioral",
    feature = "creational",
    feature = "structural",
    feature = "functional"
))]
//! Integration tests for the built-in catalogue.

use std::collections::HashSet;

use patternbook::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn catalogue() -> Catalogue {
    Catalogue::builtin()
}

// =============================================================================
// Shape
// =============================================================================

#[rstest]
fn every_pattern_is_registered(catalogue: Catalogue) {
    assert_eq!(catalogue.len(), 19);
    assert_eq!(catalogue.by_family(Family::Behavioral).count(), 5);
    assert_eq!(catalogue.by_family(Family::Creational).count(), 5);
    assert_eq!(catalogue.by_family(Family::Structural).count(), 5);
    assert_eq!(catalogue.by_family(Family::Functional).count(), 4);
}

#[rstest]
fn names_are_unique(catalogue: Catalogue) {
    let names: HashSet<&str> = catalogue.iter().map(Demo::name).collect();
    assert_eq!(names.len(), catalogue.len());
}

#[rstest]
fn only_the_clock_demo_is_unchecked(catalogue: Catalogue) {
    let unchecked: Vec<&str> = catalogue
        .iter()
        .filter(|demo| demo.expected().is_none())
        .map(Demo::name)
        .collect();
    assert_eq!(unchecked, ["singleton"]);
}

// =============================================================================
// Verification
// =============================================================================

#[rstest]
fn every_demo_verifies(catalogue: Catalogue) {
    for demo in &catalogue {
        if let Err(error) = demo.verify() {
            panic!("{error}");
        }
    }
}

#[rstest]
#[case("chain-of-responsibility")]
#[case("state")]
#[case("builder")]
#[case("decorator")]
#[case("currying")]
fn runs_are_repeatable(catalogue: Catalogue, #[case] name: &str) {
    assert_eq!(catalogue.run(name).unwrap(), catalogue.run(name).unwrap());
}

#[rstest]
fn unknown_names_are_reported(catalogue: Catalogue) {
    assert_eq!(
        catalogue.run("visitor"),
        Err(HarnessError::UnknownDemo {
            name: "visitor".to_string()
        })
    );
}

#[rstest]
fn replacing_a_demo_changes_what_runs(mut catalogue: Catalogue) {
    fn silent(_: &mut Transcript) {}

    catalogue.register(Demo::new("state", Family::Behavioral, "muted", silent));

    assert_eq!(catalogue.len(), 19);
    assert!(catalogue.run("state").unwrap().is_empty());
}
