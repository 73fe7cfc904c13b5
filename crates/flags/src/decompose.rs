//! Bitwise decomposition of flag values.
//!
//! # Role
//!
//! Maps an integer input back to the registered flags whose union produced it. The engine works
//! over any member slice so it does not depend on how the members are stored.
//!
//! # Precedence
//!
//! 1. Inputs below `-1` are invalid unless the policy allows negative input.
//! 2. A member whose value equals the input wins outright, including combined members such as
//!    `OneAndTwo = One | Two`.
//! 3. `-1` and the type maximum select every positive flag.
//! 4. Inputs above the largest mask the declared powers of two can form are invalid.
//! 5. Otherwise every non-zero member fully contained in the input is returned.

use std::fmt;

use smartenum_registry::MemberRef;

use crate::policy::FlagPolicy;
use crate::validate::{FlagDeclError, highest_power_of_two};
use crate::value::FlagValue;

/// Outcome of decomposing a flag input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition<V: FlagValue> {
	/// The input equals one registered value verbatim.
	ExactMatch(MemberRef<V>),
	/// The input is the all-flags sentinel; holds every member with a positive value.
	AllFlags(Vec<MemberRef<V>>),
	/// The input is a union of registered flags. Empty when no flag is contained.
	ComponentSet(Vec<MemberRef<V>>),
	/// Absent, unparseable, out of range, or negative when the policy forbids it.
	Invalid,
}

impl<V: FlagValue> Decomposition<V> {
	pub fn is_invalid(&self) -> bool {
		matches!(self, Self::Invalid)
	}

	/// Borrowed view of the resolved members; empty for [`Decomposition::Invalid`].
	pub fn members(&self) -> &[MemberRef<V>] {
		match self {
			Self::ExactMatch(member) => std::slice::from_ref(member),
			Self::AllFlags(members) | Self::ComponentSet(members) => members,
			Self::Invalid => &[],
		}
	}

	pub fn into_members(self) -> Vec<MemberRef<V>> {
		match self {
			Self::ExactMatch(member) => vec![member],
			Self::AllFlags(members) | Self::ComponentSet(members) => members,
			Self::Invalid => Vec::new(),
		}
	}

	/// Collapses the outcome into the optional member list callers usually want.
	pub fn into_option(self) -> Option<Vec<MemberRef<V>>> {
		match self {
			Self::Invalid => None,
			other => Some(other.into_members()),
		}
	}
}

/// Renders member names joined by `", "`. Invalid outcomes render as an empty string.
impl<V: FlagValue> fmt::Display for Decomposition<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, member) in self.members().iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			f.write_str(member.name())?;
		}
		Ok(())
	}
}

/// Decomposes `input` against `members`, scanned in registration order.
///
/// # Panics
///
/// Panics if a member value is below `-1`. Registries validate this at build time, so hitting it
/// means the slice did not come from a validated flag registry.
pub fn decompose<V: FlagValue>(label: &str, input: V, members: &[MemberRef<V>], policy: FlagPolicy) -> Decomposition<V> {
	let bits = input.to_bits();
	if !policy.allow_negative_input && bits < -1 {
		return Decomposition::Invalid;
	}

	for member in members {
		let value = member.value().to_bits();
		if value < -1 {
			let err = FlagDeclError::NegativeValue {
				label: label.to_owned(),
				name: member.name().to_owned(),
				value,
			};
			panic!("registry {}: {}", label, err);
		}
		if member.value() == input {
			return Decomposition::ExactMatch(member.clone());
		}
	}

	if bits == -1 || input == V::MAX {
		return Decomposition::AllFlags(members.iter().filter(|m| m.value().to_bits() > 0).cloned().collect());
	}

	let max_allowed = highest_power_of_two(members) * 2 - 1;
	if bits > max_allowed {
		return Decomposition::Invalid;
	}

	Decomposition::ComponentSet(
		members
			.iter()
			.filter(|m| {
				let value = m.value().to_bits();
				value != 0 && bits & value == value
			})
			.cloned()
			.collect(),
	)
}

/// [`decompose`] for an input that may be absent.
pub fn decompose_opt<V: FlagValue>(label: &str, input: Option<V>, members: &[MemberRef<V>], policy: FlagPolicy) -> Decomposition<V> {
	match input {
		Some(input) => decompose(label, input, members, policy),
		None => Decomposition::Invalid,
	}
}

/// [`decompose`] for textual input; anything that does not parse as `V` is invalid.
pub fn decompose_str<V: FlagValue>(label: &str, input: &str, members: &[MemberRef<V>], policy: FlagPolicy) -> Decomposition<V> {
	decompose_opt(label, input.trim().parse::<V>().ok(), members, policy)
}

#[cfg(test)]
mod tests;
