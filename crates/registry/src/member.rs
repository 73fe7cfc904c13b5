//! Enumeration members.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Scalar types usable as member values.
pub trait EnumValue: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {}
impl<T> EnumValue for T where T: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {}

/// Shared handle to a registered member.
///
/// Every lookup of the same member yields a clone of the same `Arc`.
pub type MemberRef<V> = Arc<Member<V>>;

/// One named value of an enumeration.
///
/// Equality, hashing and ordering consider only the value; the name is metadata.
#[derive(Clone)]
pub struct Member<V> {
	name: Arc<str>,
	value: V,
}

impl<V: EnumValue> Member<V> {
	pub fn new(name: impl Into<Arc<str>>, value: V) -> Self {
		Self { name: name.into(), value }
	}

	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[inline]
	pub fn value(&self) -> V {
		self.value
	}

	pub(crate) fn name_arc(&self) -> &Arc<str> {
		&self.name
	}
}

impl<V: EnumValue> PartialEq for Member<V> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl<V: EnumValue> Eq for Member<V> {}

impl<V: EnumValue> Hash for Member<V> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

impl<V: EnumValue> PartialOrd for Member<V> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<V: EnumValue> Ord for Member<V> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.value.cmp(&other.value)
	}
}

impl<V: EnumValue> fmt::Debug for Member<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Member").field("name", &self.name()).field("value", &self.value).finish()
	}
}

impl<V: EnumValue> fmt::Display for Member<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}
