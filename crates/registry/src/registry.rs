//! Lazily built registry container.
//!
//! # Role
//!
//! [`Registry`] owns a declaration list and the published [`Snapshot`]. The snapshot is built on
//! first access, exactly once, and then read through an [`ArcSwap`].
//!
//! # Invariants
//!
//! - Concurrent first accessors observe the same fully built snapshot (see
//!   `tests::concurrent_first_access_builds_once`).
//! - A failing build check aborts every access; no partially validated snapshot is published.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::decl::Declarations;
use crate::dynamic::DynamicRegistry;
use crate::error::{CheckError, RegisterError};
use crate::member::{EnumValue, Member, MemberRef};
use crate::snapshot::Snapshot;

/// Validation run against every snapshot before it is published.
///
/// Receives the registry label. A failure during the initial build is fatal; a failure while
/// extending a [`DynamicRegistry`] refuses the registration.
pub type SnapshotCheck<V> = Box<dyn Fn(&str, &Snapshot<V>) -> Result<(), CheckError> + Send + Sync>;

/// Registry of enumeration members, built on first access.
pub struct Registry<V: EnumValue> {
	label: Cow<'static, str>,
	decls: Declarations<V>,
	check: Option<SnapshotCheck<V>>,
	snap: OnceLock<ArcSwap<Snapshot<V>>>,
}

impl<V: EnumValue> fmt::Debug for Registry<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("declared", &self.decls.len())
			.field("built", &self.is_built())
			.finish()
	}
}

impl<V: EnumValue> Registry<V> {
	/// Creates an unbuilt registry. `label` names the registry in logs and panic messages.
	pub fn new(label: impl Into<Cow<'static, str>>, decls: Declarations<V>) -> Self {
		Self {
			label: label.into(),
			decls,
			check: None,
			snap: OnceLock::new(),
		}
	}

	/// Attaches a check that every published snapshot must pass.
	pub fn with_check<F>(mut self, check: F) -> Self
	where
		F: Fn(&str, &Snapshot<V>) -> Result<(), CheckError> + Send + Sync + 'static,
	{
		self.check = Some(Box::new(check));
		self
	}

	/// Converts into a registry that accepts runtime registrations.
	pub fn into_dynamic(self) -> DynamicRegistry<V> {
		DynamicRegistry::from(self)
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns true once the first access has built the snapshot.
	pub fn is_built(&self) -> bool {
		self.snap.get().is_some()
	}

	/// Looks a member up by name. Empty and unknown names yield `None`.
	#[inline]
	pub fn from_name(&self, name: &str) -> Option<MemberRef<V>> {
		if name.is_empty() {
			return None;
		}
		self.cell().load().get_name(name)
	}

	/// Looks a member up by value.
	#[inline]
	pub fn from_value(&self, value: V) -> Option<MemberRef<V>> {
		self.cell().load().get_value(value)
	}

	pub fn contains_name(&self, name: &str) -> bool {
		self.from_name(name).is_some()
	}

	/// Returns all members in registration order.
	pub fn values(&self) -> Vec<MemberRef<V>> {
		self.cell().load().members().to_vec()
	}

	/// Returns the current snapshot, pinned for as long as the caller holds it.
	pub fn snapshot(&self) -> Arc<Snapshot<V>> {
		self.cell().load_full()
	}

	pub fn len(&self) -> usize {
		self.cell().load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn cell(&self) -> &ArcSwap<Snapshot<V>> {
		self.snap.get_or_init(|| self.build())
	}

	fn build(&self) -> ArcSwap<Snapshot<V>> {
		let snap = Snapshot::from_declarations(&self.decls).unwrap_or_else(|e| panic!("registry {}: {}", self.label, e));
		if let Some(check) = &self.check
			&& let Err(e) = check(self.label(), &snap)
		{
			panic!("registry {}: {}", self.label, e);
		}
		tracing::debug!(registry = %self.label, members = snap.len(), "registry built");
		ArcSwap::from_pointee(snap)
	}

	/// Appends `member` with linearizable semantics.
	///
	/// Duplicate detection and publication happen against the same snapshot: if another writer
	/// publishes first the CAS fails and the candidate is re-checked against the newer state.
	pub(crate) fn insert(&self, member: Member<V>) -> Result<MemberRef<V>, RegisterError<V>> {
		let cell = self.cell();

		loop {
			let old = cell.load_full();
			let (next, added) = old.with_member(member.clone())?;

			if let Some(check) = &self.check {
				check(self.label(), &next).map_err(|e| RegisterError::Rejected {
					name: member.name_arc().clone(),
					reason: e.to_string(),
				})?;
			}

			let next = Arc::new(next);
			let prev = cell.compare_and_swap(&old, next);

			if Arc::ptr_eq(&prev, &old) {
				tracing::debug!(registry = %self.label, name = added.name(), value = ?added.value(), "member registered");
				return Ok(added);
			}
			// Lost the race; retry against the newer snapshot.
		}
	}
}
