use std::fmt;
use std::sync::Arc;

use crate::member::{EnumValue, MemberRef};

/// Error produced by a [`crate::SnapshotCheck`].
pub type CheckError = Box<dyn std::error::Error + Send + Sync>;

/// Defects in a declaration list. These abort the first build of a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
	#[error("member with value {value} has an empty name")]
	EmptyName { value: String },
	#[error("duplicate member name {name:?}")]
	DuplicateName { name: Arc<str> },
	#[error("duplicate member value {value}: {existing:?} and {name:?}")]
	DuplicateValue {
		value: String,
		existing: Arc<str>,
		name: Arc<str>,
	},
}

/// Reasons a runtime registration was refused.
pub enum RegisterError<V: EnumValue> {
	/// The candidate name is empty.
	EmptyName,
	/// A member with the same name is already registered.
	DuplicateName { existing: MemberRef<V> },
	/// A member with the same value is already registered.
	DuplicateValue { existing: MemberRef<V> },
	/// The registry's snapshot check refused the extended member set.
	Rejected { name: Arc<str>, reason: String },
}

impl<V: EnumValue> fmt::Debug for RegisterError<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::EmptyName => f.write_str("EmptyName"),
			Self::DuplicateName { existing } => f.debug_struct("DuplicateName").field("existing", existing).finish(),
			Self::DuplicateValue { existing } => f.debug_struct("DuplicateValue").field("existing", existing).finish(),
			Self::Rejected { name, reason } => f.debug_struct("Rejected").field("name", name).field("reason", reason).finish(),
		}
	}
}

impl<V: EnumValue> fmt::Display for RegisterError<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::EmptyName => f.write_str("member name must not be empty"),
			Self::DuplicateName { existing } => {
				write!(f, "name {:?} is already registered with value {:?}", existing.name(), existing.value())
			}
			Self::DuplicateValue { existing } => {
				write!(f, "value {:?} is already registered as {:?}", existing.value(), existing.name())
			}
			Self::Rejected { name, reason } => write!(f, "registration of {name:?} rejected: {reason}"),
		}
	}
}

impl<V: EnumValue> std::error::Error for RegisterError<V> {}
