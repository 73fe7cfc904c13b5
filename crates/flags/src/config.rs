//! Flag sets declared in TOML.
//!
//! ```toml
//! label = "permissions"
//!
//! [policy]
//! allow_negative_input = false
//! allow_unsafe_values = false
//!
//! [[members]]
//! name = "Read"
//! value = 1
//!
//! [[members]]
//! name = "Write"
//! value = 2
//! ```
//!
//! Parsing only checks shape and value ranges. Structural rules are enforced by the registry on
//! first access, exactly as for declarations written in code.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use smartenum_registry::Declarations;

use crate::policy::FlagPolicy;
use crate::registry::{DynamicFlagRegistry, FlagRegistry};
use crate::value::FlagValue;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid flag set config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("member {name:?} value {value} does not fit the flag type")]
	ValueOutOfRange { name: String, value: i128 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Serialized form of a flag set.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagSetConfig {
	pub label: String,
	#[serde(default)]
	pub policy: FlagPolicy,
	#[serde(default)]
	pub members: Vec<MemberConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberConfig {
	pub name: String,
	pub value: i64,
}

impl FlagSetConfig {
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), label = %config.label, members = config.members.len(), "loaded flag set config");
		Ok(config)
	}

	/// Converts the member list into declarations of `V`, preserving file order.
	pub fn declarations<V: FlagValue>(&self) -> Result<Declarations<V>> {
		let mut decls = Declarations::new();
		for member in &self.members {
			let value = V::from_bits(i128::from(member.value)).ok_or_else(|| ConfigError::ValueOutOfRange {
				name: member.name.clone(),
				value: i128::from(member.value),
			})?;
			decls.push(member.name.as_str(), value);
		}
		Ok(decls)
	}

	pub fn into_registry<V: FlagValue>(self) -> Result<FlagRegistry<V>> {
		let decls = self.declarations::<V>()?;
		Ok(FlagRegistry::new(self.label, decls, self.policy))
	}

	pub fn into_dynamic_registry<V: FlagValue>(self) -> Result<DynamicFlagRegistry<V>> {
		Ok(self.into_registry::<V>()?.into_dynamic())
	}
}

#[cfg(test)]
mod tests;
