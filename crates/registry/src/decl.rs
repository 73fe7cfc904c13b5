//! Explicit member declarations.

use std::sync::Arc;

use crate::member::EnumValue;

/// Ordered `(name, value)` list a [`crate::Registry`] is seeded from.
///
/// Order is preserved: it becomes the registration order reported by
/// [`crate::Registry::values`]. Validation happens when the registry is first built.
#[derive(Debug, Clone, Default)]
pub struct Declarations<V> {
	entries: Vec<(Arc<str>, V)>,
}

impl<V: EnumValue> Declarations<V> {
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Adds a declaration, builder style.
	pub fn with(mut self, name: impl Into<Arc<str>>, value: V) -> Self {
		self.push(name, value);
		self
	}

	pub fn push(&mut self, name: impl Into<Arc<str>>, value: V) {
		self.entries.push((name.into(), value));
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, V)> + '_ {
		self.entries.iter().map(|(name, value)| (&**name, *value))
	}

	pub(crate) fn entries(&self) -> &[(Arc<str>, V)] {
		&self.entries
	}
}

impl<N: Into<Arc<str>>, V: EnumValue> FromIterator<(N, V)> for Declarations<V> {
	fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
		}
	}
}

impl<N: Into<Arc<str>>, V: EnumValue> Extend<(N, V)> for Declarations<V> {
	fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
		self.entries.extend(iter.into_iter().map(|(name, value)| (name.into(), value)));
	}
}

/// Builds [`Declarations`] from `Name = value` pairs.
///
/// ```
/// use smartenum_registry::declarations;
///
/// let decls = declarations![One = 1, Two = 2, OneAndTwo = 1 | 2];
/// assert_eq!(decls.len(), 3);
/// ```
#[macro_export]
macro_rules! declarations {
	($($name:ident = $value:expr),* $(,)?) => {
		$crate::Declarations::new()$(.with(stringify!($name), $value))*
	};
}
