//! Structural validation of flag declarations.
//!
//! # Role
//!
//! Runs against every snapshot a flag registry publishes. During the initial build a failure is a
//! declaration defect and aborts; during dynamic registration it refuses the new member.
//!
//! # Invariants
//!
//! - No declared value is below `-1`, regardless of policy.
//! - Unless [`FlagPolicy::allow_unsafe_values`], the positive powers of two form a gapless doubling
//!   chain from the lowest to the highest present. Combined values such as `3` are ignored.

use smartenum_registry::MemberRef;

use crate::policy::FlagPolicy;
use crate::value::{FlagValue, is_power_of_two};

/// A flag set declaration that can never decompose correctly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagDeclError {
	#[error("flag set {label:?} contains negative value {value} ({name}); only -1 is allowed")]
	NegativeValue { label: String, name: String, value: i128 },
	#[error("flag set {label:?} does not contain consecutive power of two values: {missing} is missing between {lowest} and {highest}")]
	PowerOfTwoGap {
		label: String,
		missing: i128,
		lowest: i128,
		highest: i128,
	},
}

/// Checks `members` against the sign rule and, unless disabled, the power-of-two chain.
pub fn validate<V: FlagValue>(label: &str, members: &[MemberRef<V>], policy: FlagPolicy) -> Result<(), FlagDeclError> {
	if let Some(member) = members.iter().find(|m| m.value().to_bits() < -1) {
		return Err(FlagDeclError::NegativeValue {
			label: label.to_owned(),
			name: member.name().to_owned(),
			value: member.value().to_bits(),
		});
	}

	if policy.allow_unsafe_values {
		return Ok(());
	}

	let mut powers: Vec<i128> = members.iter().map(|m| m.value().to_bits()).filter(|&bits| is_power_of_two(bits)).collect();
	powers.sort_unstable();

	let (Some(&lowest), Some(&highest)) = (powers.first(), powers.last()) else {
		return Ok(());
	};

	let mut current = lowest;
	while current < highest {
		let next = current * 2;
		if powers.binary_search(&next).is_err() {
			return Err(FlagDeclError::PowerOfTwoGap {
				label: label.to_owned(),
				missing: next,
				lowest,
				highest,
			});
		}
		current = next;
	}

	Ok(())
}

/// Highest positive power of two among `members`, or `0` when there is none.
pub(crate) fn highest_power_of_two<V: FlagValue>(members: &[MemberRef<V>]) -> i128 {
	members
		.iter()
		.map(|m| m.value().to_bits())
		.filter(|&bits| is_power_of_two(bits))
		.max()
		.unwrap_or(0)
}
