//! Flag registries.
//!
//! # Role
//!
//! [`FlagRegistry`] composes a [`DynamicRegistry`] with a [`FlagPolicy`]. The structural
//! validator is installed as the registry's snapshot check, so it runs inside the single lazy
//! build and again on every runtime extension. Only [`DynamicFlagRegistry`] exposes registration.

use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

use smartenum_registry::{Declarations, DynamicRegistry, MemberRef, RegisterError, Registry, Snapshot};

use crate::decompose::{Decomposition, decompose, decompose_opt, decompose_str};
use crate::names::resolve_names;
use crate::policy::FlagPolicy;
use crate::validate::validate;
use crate::value::FlagValue;

/// Registry of power-of-two flags with decomposition.
#[derive(Debug)]
pub struct FlagRegistry<V: FlagValue> {
	inner: DynamicRegistry<V>,
	policy: FlagPolicy,
}

impl<V: FlagValue> FlagRegistry<V> {
	/// Creates an unbuilt flag registry. Declaration defects surface as a panic on first access.
	pub fn new(label: impl Into<Cow<'static, str>>, decls: Declarations<V>, policy: FlagPolicy) -> Self {
		let inner = Registry::new(label, decls)
			.with_check(move |label, snap: &Snapshot<V>| validate(label, snap.members(), policy).map_err(Into::into))
			.into_dynamic();
		Self { inner, policy }
	}

	/// Converts into a flag registry that accepts runtime registrations.
	pub fn into_dynamic(self) -> DynamicFlagRegistry<V> {
		DynamicFlagRegistry { flags: self }
	}

	pub fn label(&self) -> &str {
		self.inner.label()
	}

	pub fn policy(&self) -> FlagPolicy {
		self.policy
	}

	pub fn is_built(&self) -> bool {
		self.inner.is_built()
	}

	/// Looks up a single member by exact name.
	pub fn from_name(&self, name: &str) -> Option<MemberRef<V>> {
		self.inner.from_name(name)
	}

	/// Looks up a single member by exact value.
	pub fn from_value(&self, value: V) -> Option<MemberRef<V>> {
		self.inner.from_value(value)
	}

	/// All members in registration order.
	pub fn values(&self) -> Vec<MemberRef<V>> {
		self.inner.values()
	}

	pub fn snapshot(&self) -> Arc<Snapshot<V>> {
		self.inner.snapshot()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns the member whose value equals `value` exactly, without decomposing.
	pub fn single(&self, value: V) -> Option<MemberRef<V>> {
		self.snapshot().members().iter().find(|m| m.value() == value).cloned()
	}

	/// Decomposes `value` into the flags it is built from.
	pub fn decompose(&self, value: V) -> Decomposition<V> {
		decompose(self.label(), value, self.snapshot().members(), self.policy)
	}

	pub fn decompose_opt(&self, value: Option<V>) -> Decomposition<V> {
		decompose_opt(self.label(), value, self.snapshot().members(), self.policy)
	}

	/// Parses and decomposes textual input, e.g. a value read from a config file.
	pub fn decompose_str(&self, input: &str) -> Decomposition<V> {
		decompose_str(self.label(), input, self.snapshot().members(), self.policy)
	}

	/// Resolves a comma-separated name list; `None` unless every name is registered.
	pub fn from_names(&self, names: &str) -> Option<Vec<MemberRef<V>>> {
		resolve_names(&self.snapshot(), names)
	}
}

/// A [`FlagRegistry`] that also accepts flags after its initial build.
#[derive(Debug)]
pub struct DynamicFlagRegistry<V: FlagValue> {
	flags: FlagRegistry<V>,
}

impl<V: FlagValue> Deref for DynamicFlagRegistry<V> {
	type Target = FlagRegistry<V>;

	fn deref(&self) -> &FlagRegistry<V> {
		&self.flags
	}
}

impl<V: FlagValue> DynamicFlagRegistry<V> {
	pub fn new(label: impl Into<Cow<'static, str>>, decls: Declarations<V>, policy: FlagPolicy) -> Self {
		FlagRegistry::new(label, decls, policy).into_dynamic()
	}

	/// Registers a new flag, or returns `None` if the name or value is taken or the flag would
	/// break the power-of-two chain.
	///
	/// This is stricter than name uniqueness alone: a fresh name is still refused when its value
	/// fails the flag set's validation, e.g. `Sixteen = 16` on `{1, 2, 4}` leaves 8 missing. Use
	/// [`FlagPolicy::allow_unsafe_values`] to accept such values.
	pub fn register(&self, name: impl Into<Arc<str>>, value: V) -> Option<MemberRef<V>> {
		self.flags.inner.register(name, value)
	}

	pub fn try_register(&self, name: impl Into<Arc<str>>, value: V) -> Result<MemberRef<V>, RegisterError<V>> {
		self.flags.inner.try_register(name, value)
	}
}
