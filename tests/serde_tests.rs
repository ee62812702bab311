#![cfg(feature = "serde")]
//! Serialization of transcripts and data records.

use patternbook::harness::{Family, Transcript};
use patternbook::person::Person;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn transcript_serializes_as_a_plain_array() {
    let transcript: Transcript = ["open", "close"].into_iter().collect();

    assert_eq!(serde_json::to_value(&transcript).unwrap(), json!(["open", "close"]));
}

#[rstest]
fn transcript_round_trips() {
    let transcript: Transcript = ["+", "-"].into_iter().collect();
    let encoded = serde_json::to_string(&transcript).unwrap();

    assert_eq!(serde_json::from_str::<Transcript>(&encoded).unwrap(), transcript);
}

#[rstest]
#[case(Family::Behavioral, "behavioral")]
#[case(Family::Functional, "functional")]
fn family_uses_lowercase_names(#[case] family: Family, #[case] name: &str) {
    assert_eq!(serde_json::to_value(family).unwrap(), json!(name));
}

#[rstest]
fn person_fields_are_named() {
    let person = Person::new("01", "CCC");

    assert_eq!(
        serde_json::to_value(&person).unwrap(),
        json!({ "id": "01", "name": "CCC" })
    );
}
