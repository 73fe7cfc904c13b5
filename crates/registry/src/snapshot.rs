//! Immutable registry state.
//!
//! # Role
//!
//! A [`Snapshot`] owns the member table and both lookup views. Snapshots are never mutated;
//! registration builds a new one and publishes it whole, so readers cannot see one view
//! updated without the other.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::decl::Declarations;
use crate::error::{DeclError, RegisterError};
use crate::member::{EnumValue, Member, MemberRef};

/// Member table plus its name and value indexes.
pub struct Snapshot<V: EnumValue> {
	table: Vec<MemberRef<V>>,
	by_name: FxHashMap<Arc<str>, u32>,
	by_value: FxHashMap<V, u32>,
}

impl<V: EnumValue> Clone for Snapshot<V> {
	fn clone(&self) -> Self {
		Self {
			table: self.table.clone(),
			by_name: self.by_name.clone(),
			by_value: self.by_value.clone(),
		}
	}
}

impl<V: EnumValue> Snapshot<V> {
	/// Builds the initial snapshot, rejecting empty names and duplicate names or values.
	pub fn from_declarations(decls: &Declarations<V>) -> Result<Self, DeclError> {
		let mut snap = Self {
			table: Vec::with_capacity(decls.len()),
			by_name: FxHashMap::with_capacity_and_hasher(decls.len(), Default::default()),
			by_value: FxHashMap::with_capacity_and_hasher(decls.len(), Default::default()),
		};

		for (name, value) in decls.entries() {
			if name.is_empty() {
				return Err(DeclError::EmptyName {
					value: format!("{value:?}"),
				});
			}
			if snap.by_name.contains_key(&**name) {
				return Err(DeclError::DuplicateName { name: name.clone() });
			}
			if let Some(existing) = snap.get_value(*value) {
				return Err(DeclError::DuplicateValue {
					value: format!("{value:?}"),
					existing: existing.name_arc().clone(),
					name: name.clone(),
				});
			}
			snap.push(Arc::new(Member::new(name.clone(), *value)));
		}

		Ok(snap)
	}

	/// Returns a copy of this snapshot with `member` appended, plus the appended handle.
	///
	/// The copy is only published by the caller; `self` is left untouched.
	pub fn with_member(&self, member: Member<V>) -> Result<(Self, MemberRef<V>), RegisterError<V>> {
		if member.name().is_empty() {
			return Err(RegisterError::EmptyName);
		}
		if let Some(existing) = self.get_name(member.name()) {
			return Err(RegisterError::DuplicateName { existing });
		}
		if let Some(existing) = self.get_value(member.value()) {
			return Err(RegisterError::DuplicateValue { existing });
		}

		let added = Arc::new(member);
		let mut next = self.clone();
		next.push(added.clone());
		Ok((next, added))
	}

	fn push(&mut self, member: MemberRef<V>) {
		let len = self.table.len();
		let idx = u32::try_from(len).unwrap_or_else(|_| panic!("member index overflow: {}", len));
		self.by_name.insert(member.name_arc().clone(), idx);
		self.by_value.insert(member.value(), idx);
		self.table.push(member);
	}

	#[inline]
	pub fn get_name(&self, name: &str) -> Option<MemberRef<V>> {
		let idx = *self.by_name.get(name)?;
		Some(self.table[idx as usize].clone())
	}

	#[inline]
	pub fn get_value(&self, value: V) -> Option<MemberRef<V>> {
		let idx = *self.by_value.get(&value)?;
		Some(self.table[idx as usize].clone())
	}

	/// Members in registration order.
	pub fn members(&self) -> &[MemberRef<V>] {
		&self.table
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}
