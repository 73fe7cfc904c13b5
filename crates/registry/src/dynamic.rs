//! Runtime-extensible registries.

use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

use crate::decl::Declarations;
use crate::error::RegisterError;
use crate::member::{EnumValue, Member, MemberRef};
use crate::registry::Registry;

/// A [`Registry`] that also accepts members after its initial build.
///
/// Members are appended only; there is no removal or replacement. All read operations are
/// available through `Deref`.
#[derive(Debug)]
pub struct DynamicRegistry<V: EnumValue> {
	inner: Registry<V>,
}

impl<V: EnumValue> From<Registry<V>> for DynamicRegistry<V> {
	fn from(inner: Registry<V>) -> Self {
		Self { inner }
	}
}

impl<V: EnumValue> Deref for DynamicRegistry<V> {
	type Target = Registry<V>;

	fn deref(&self) -> &Registry<V> {
		&self.inner
	}
}

impl<V: EnumValue> DynamicRegistry<V> {
	pub fn new(label: impl Into<Cow<'static, str>>, decls: Declarations<V>) -> Self {
		Registry::new(label, decls).into_dynamic()
	}

	/// Registers a new member, or returns `None` if its name or value is taken.
	///
	/// When several threads register the same name concurrently exactly one succeeds.
	pub fn register(&self, name: impl Into<Arc<str>>, value: V) -> Option<MemberRef<V>> {
		self.try_register(name, value)
			.inspect_err(|e| tracing::warn!(registry = %self.label(), error = %e, "registration refused"))
			.ok()
	}

	/// Registers a new member, reporting why a refused registration failed.
	pub fn try_register(&self, name: impl Into<Arc<str>>, value: V) -> Result<MemberRef<V>, RegisterError<V>> {
		self.inner.insert(Member::new(name, value))
	}
}
