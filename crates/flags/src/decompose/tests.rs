use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use smartenum_registry::{Member, MemberRef};

use super::{Decomposition, decompose, decompose_opt, decompose_str};
use crate::policy::FlagPolicy;

fn members<V: crate::FlagValue>(values: &[(&str, V)]) -> Vec<MemberRef<V>> {
	values.iter().map(|&(name, value)| Arc::new(Member::new(name, value))).collect()
}

fn one_two_four() -> Vec<MemberRef<i32>> {
	members(&[("One", 1), ("Two", 2), ("Four", 4)])
}

fn names<V: crate::FlagValue>(outcome: &Decomposition<V>) -> Vec<&str> {
	outcome.members().iter().map(|m| m.name()).collect()
}

#[rstest]
#[case(1, vec!["One"])]
#[case(5, vec!["One", "Four"])]
#[case(6, vec!["Two", "Four"])]
#[case(7, vec!["One", "Two", "Four"])]
#[case(0, vec![])]
fn decomposes_into_components(#[case] input: i32, #[case] expected: Vec<&str>) {
	let set = one_two_four();
	let outcome = decompose("flags", input, &set, FlagPolicy::STRICT);
	assert_eq!(names(&outcome), expected);
}

#[test]
fn exact_match_is_reported_as_such() {
	let set = one_two_four();
	assert!(matches!(decompose("flags", 4, &set, FlagPolicy::STRICT), Decomposition::ExactMatch(m) if m.name() == "Four"));
	assert!(matches!(decompose("flags", 5, &set, FlagPolicy::STRICT), Decomposition::ComponentSet(_)));
}

#[test]
fn exact_match_beats_decomposition() {
	let set = members(&[("One", 1), ("Two", 2), ("OneAndTwo", 3)]);
	match decompose("flags", 3, &set, FlagPolicy::STRICT) {
		Decomposition::ExactMatch(member) => assert_eq!(member.name(), "OneAndTwo"),
		other => panic!("expected ExactMatch, got {other:?}"),
	}
}

#[test]
fn combined_members_join_component_sets() {
	let set = members(&[("One", 1), ("Two", 2), ("OneAndTwo", 3), ("Four", 4)]);
	let outcome = decompose("flags", 7, &set, FlagPolicy::STRICT);
	assert_eq!(names(&outcome), vec!["One", "Two", "OneAndTwo", "Four"]);
}

#[test]
fn sentinel_selects_all_positive_flags() {
	let set = members(&[("None", 0), ("One", 1), ("Two", 2), ("Four", 4)]);
	let outcome = decompose("flags", -1, &set, FlagPolicy::STRICT);
	assert!(matches!(outcome, Decomposition::AllFlags(_)));
	assert_eq!(names(&outcome), vec!["One", "Two", "Four"]);
}

#[test]
fn type_maximum_selects_all_flags() {
	let set = members(&[("One", 1u8), ("Two", 2u8)]);
	let outcome = decompose("flags", u8::MAX, &set, FlagPolicy::STRICT);
	assert!(matches!(outcome, Decomposition::AllFlags(ref all) if all.len() == 2));
}

#[test]
fn declared_sentinel_member_wins_over_all_flags() {
	let set = members(&[("One", 1), ("Two", 2), ("Everything", -1)]);
	assert!(matches!(decompose("flags", -1, &set, FlagPolicy::STRICT), Decomposition::ExactMatch(m) if m.name() == "Everything"));
}

#[rstest]
#[case(8)]
#[case(9)]
#[case(i32::MAX - 1)]
fn above_the_mask_is_invalid(#[case] input: i32) {
	assert_eq!(decompose("flags", input, &one_two_four(), FlagPolicy::STRICT), Decomposition::Invalid);
}

#[test]
fn negative_input_follows_policy() {
	let set = one_two_four();
	assert!(decompose("flags", -2, &set, FlagPolicy::STRICT).is_invalid());

	let lenient = FlagPolicy::default().allow_negative_input(true);
	// -3 is ...11111101 in two's complement: contains One and Four, not Two.
	assert_eq!(names(&decompose("flags", -3, &set, lenient)), vec!["One", "Four"]);
}

#[test]
fn absent_and_unparseable_input_is_invalid() {
	let set = one_two_four();
	assert!(decompose_opt("flags", None, &set, FlagPolicy::STRICT).is_invalid());
	assert!(decompose_str("flags", "five", &set, FlagPolicy::STRICT).is_invalid());
	assert!(decompose_str("flags", "", &set, FlagPolicy::STRICT).is_invalid());
	assert!(decompose_str("flags", "1.5", &set, FlagPolicy::STRICT).is_invalid());
	assert_eq!(names(&decompose_str("flags", " 5 ", &set, FlagPolicy::STRICT)), vec!["One", "Four"]);
}

#[test]
fn empty_component_set_is_empty() {
	let set = members(&[("Two", 2), ("Four", 4)]);
	assert_eq!(decompose("flags", 1, &set, FlagPolicy::STRICT), Decomposition::ComponentSet(Vec::new()));
}

#[test]
#[should_panic(expected = "contains negative value -8")]
fn negative_member_value_aborts() {
	let set = members(&[("One", 1), ("Bad", -8)]);
	let _ = decompose("flags", 2, &set, FlagPolicy::default().allow_unsafe_values(true));
}

#[test]
fn outcome_helpers() {
	let set = one_two_four();
	let outcome = decompose("flags", 3, &set, FlagPolicy::STRICT);
	assert_eq!(outcome.to_string(), "One, Two");
	assert_eq!(outcome.clone().into_members().len(), 2);
	assert_eq!(outcome.into_option().map(|m| m.len()), Some(2));

	assert_eq!(decompose("flags", 4, &set, FlagPolicy::STRICT).to_string(), "Four");
	assert_eq!(Decomposition::<i32>::Invalid.into_option(), None);
	assert_eq!(Decomposition::<i32>::Invalid.to_string(), "");
}

proptest! {
	#[test]
	fn components_reassemble_input(input in 0i32..=15) {
		let set = members(&[("One", 1), ("Two", 2), ("Four", 4), ("Eight", 8)]);
		let outcome = decompose("flags", input, &set, FlagPolicy::STRICT);
		let union = outcome.members().iter().fold(0, |acc, m| acc | m.value());
		prop_assert_eq!(union, input);
	}
}
