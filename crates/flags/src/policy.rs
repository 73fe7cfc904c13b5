use serde::Deserialize;

/// Per-flag-set rules consulted at validation and decomposition time.
///
/// The default rejects negative input other than the `-1` sentinel and enforces the
/// power-of-two chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlagPolicy {
	/// Accept inputs below `-1` instead of treating them as invalid.
	pub allow_negative_input: bool,
	/// Skip the power-of-two chain check. Negative declared values stay fatal.
	pub allow_unsafe_values: bool,
}

impl FlagPolicy {
	pub const STRICT: Self = Self {
		allow_negative_input: false,
		allow_unsafe_values: false,
	};

	pub const fn allow_negative_input(mut self, on: bool) -> Self {
		self.allow_negative_input = on;
		self
	}

	pub const fn allow_unsafe_values(mut self, on: bool) -> Self {
		self.allow_unsafe_values = on;
		self
	}
}
