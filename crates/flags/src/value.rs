//! Integral flag values.

use std::str::FromStr;

use smartenum_registry::EnumValue;

/// Integer types that can back a flag set.
///
/// Bit arithmetic happens on the `i128` widening so signed and unsigned types share one path.
pub trait FlagValue: EnumValue + FromStr {
	/// Largest representable value; as input it selects every flag.
	const MAX: Self;

	fn to_bits(self) -> i128;

	/// Narrows back from the widened form, failing when out of range.
	fn from_bits(bits: i128) -> Option<Self>;
}

macro_rules! impl_flag_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl FlagValue for $ty {
				const MAX: Self = <$ty>::MAX;

				#[inline]
				fn to_bits(self) -> i128 {
					self as i128
				}

				#[inline]
				fn from_bits(bits: i128) -> Option<Self> {
					<$ty>::try_from(bits).ok()
				}
			}
		)*
	};
}

impl_flag_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[inline]
pub(crate) fn is_power_of_two(bits: i128) -> bool {
	bits > 0 && bits & (bits - 1) == 0
}
