#![cfg(all(feature = "behavioral", feature = "creational", feature = "structural"))]
//! Cross-pattern properties of the composition points.
//!
//! - **Substitutability**: after swapping the variant held by a context, only
//!   the new variant's behavior is observed
//! - **Chain termination**: an unmatched request visits every link once and
//!   yields the sentinel
//! - **Decorator order**: the outermost decorator's prefix comes first
//! - **Builder reset**: reset then rebuild yields an equal product
//! - **Singleton identity**: every access returns the same instance

use std::cmp::Ordering;

use patternbook::behavioral::chain::{AdvancedSupport, FnHandler, HelpDesk, TechnicalSupport};
use patternbook::behavioral::command::{Speaker, VolumeDown, VolumeUp};
use patternbook::behavioral::state::{Color, Red};
use patternbook::behavioral::strategy::{SortById, SortByName, SortWith, sample_people};
use patternbook::creational::builder::ProfilePage;
use patternbook::person::Person;
use patternbook::prelude::*;
use patternbook::structural::decorator::FixedClock;
use proptest::prelude::*;
use rstest::rstest;
use static_assertions::assert_obj_safe;

assert_obj_safe!(
    Handler,
    Command,
    SignalState,
    SortStrategy,
    ThemeFactory,
    PageBuilder,
    DocumentCreator,
    Hdmi,
    Vga,
    Device,
    Logger,
    Timestamp,
    Media
);

fn ids(people: &[Person]) -> Vec<&str> {
    people.iter().map(|person| person.id.as_str()).collect()
}

fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|person| person.name.as_str()).collect()
}

// =============================================================================
// Substitutability
// =============================================================================

#[rstest]
fn sorter_uses_only_the_latest_strategy() {
    let people = sample_people();
    let mut sorter = Sorter::new(SortById);
    assert_eq!(ids(&sorter.sort(&people)), ["01", "02", "03", "04"]);

    sorter.set_strategy(SortByName);
    assert_eq!(names(&sorter.sort(&people)), ["AAA", "BBB", "CCC", "DDD"]);

    sorter.set_strategy(SortWith(|left: &Person, right: &Person| -> Ordering {
        right.id.cmp(&left.id)
    }));
    assert_eq!(ids(&sorter.sort(&people)), ["04", "03", "02", "01"]);
}

#[rstest]
fn sorting_leaves_the_input_untouched() {
    let people = sample_people();
    let _ = Sorter::new(SortByName).sort(&people);
    assert_eq!(people, sample_people());
}

#[rstest]
fn control_runs_only_the_current_command() {
    let speaker = Speaker;
    let out = Transcript::capture(|out| {
        let mut control = Control::new(VolumeUp::new(&speaker));
        control.press_button(out);
        control.set_command(VolumeDown::new(&speaker));
        control.press_button(out);
        control.press_button(out);
    });
    assert_eq!(out.lines(), ["+", "-", "-"]);
}

proptest! {
    #[test]
    fn prop_signal_has_period_three(start in 0_usize..3, steps in 0_usize..30) {
        let colors = [Color::Red, Color::Green, Color::Yellow];
        let mut signal = TrafficSignal::from_state(colors[start].state());
        let mut sink = Transcript::new();

        for _ in 0..steps {
            signal.change(&mut sink);
        }

        prop_assert_eq!(signal.color(), colors[(start + steps) % 3]);
        prop_assert_eq!(sink.len(), steps);
    }
}

#[rstest]
fn signal_transitions_are_driven_by_the_state() {
    let mut signal = TrafficSignal::new(Red);
    let out = Transcript::capture(|out| signal.change(out));

    assert_eq!(out.lines(), ["Green Signal!"]);
    assert_eq!(signal.color(), Color::Green);
}

// =============================================================================
// Chain termination
// =============================================================================

#[rstest]
#[case("help_desk", "General support.", 1)]
#[case("technical_support", "Technical support.", 2)]
#[case("advanced_support", "Advanced support.", 3)]
#[case("xyz", "No support available.", 3)]
fn chain_stops_at_the_first_match(
    #[case] request: &str,
    #[case] response: &str,
    #[case] visited: usize,
) {
    let chain = Chain::new()
        .append(HelpDesk)
        .append(TechnicalSupport)
        .append(AdvancedSupport);
    let route = chain.route(request);

    assert_eq!(route.response, response);
    assert_eq!(route.visited.len(), visited);
}

proptest! {
    #[test]
    fn prop_unmatched_request_visits_every_link(length in 0_usize..12) {
        let mut chain = Chain::new();
        for index in 0..length {
            chain.push(Box::new(FnHandler::new(format!("never-{index}"), |_: &str| None)));
        }

        let route = chain.route("anything");
        let expected: Vec<String> = (0..length).map(|index| format!("never-{index}")).collect();

        prop_assert_eq!(route.visited, expected);
        prop_assert_eq!(route.handled_by, None);
        prop_assert_eq!(route.response, NO_SUPPORT);
    }
}

// =============================================================================
// Decorator order
// =============================================================================

proptest! {
    #[test]
    fn prop_outermost_decorator_prefix_comes_first(message in ".*") {
        let clock = FixedClock::new("TIME", "DATE");
        let logger = ConsoleLog::new("INFO").with_time(clock).with_date(clock);

        prop_assert_eq!(logger.log(&message), format!("DATE | TIME | INFO: {message}"));
    }
}

// =============================================================================
// Builder reset
// =============================================================================

#[rstest]
#[case(Director::FULL_PAGE)]
#[case(Director::STYLES_ONLY)]
fn reset_then_rebuild_is_idempotent(#[case] director: Director) {
    let mut builder = LandingPageBuilder::new();
    director.construct(&mut builder);
    let first = builder.product().clone();

    builder.reset();
    director.construct(&mut builder);

    assert_eq!(builder.product(), &first);
}

#[rstest]
fn directors_share_one_builder_contract() {
    let mut profile = ProfilePageBuilder::new();
    Director::STYLES_ONLY.construct(&mut profile);

    assert_eq!(
        profile.finish(),
        ProfilePage {
            frames: 2,
            theme: Some("dark".to_string()),
            about: None,
        }
    );
}

// =============================================================================
// Singleton identity
// =============================================================================

#[rstest]
fn clock_is_one_instance_with_changing_readings() {
    let first = Clock::global();
    let stamp = first.display();
    let second = Clock::global();

    assert!(std::ptr::eq(first, second));
    assert!(second.display() >= stamp);
}
