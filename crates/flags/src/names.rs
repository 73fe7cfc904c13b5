//! Comma-separated name lists.

use rustc_hash::FxHashSet;
use smartenum_registry::{EnumValue, MemberRef, Snapshot};

/// Resolves `"A, B"` style lists against `snap`.
///
/// Segments are trimmed, empty segments skipped and repeats collapsed. Resolution is
/// all-or-nothing: one unknown name, or no names at all, yields `None`. Members come back in
/// registration order.
pub fn resolve_names<V: EnumValue>(snap: &Snapshot<V>, names: &str) -> Option<Vec<MemberRef<V>>> {
	let wanted: FxHashSet<&str> = names.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
	if wanted.is_empty() {
		return None;
	}

	let found: Vec<MemberRef<V>> = snap.members().iter().filter(|m| wanted.contains(m.name())).cloned().collect();
	(found.len() == wanted.len()).then_some(found)
}
