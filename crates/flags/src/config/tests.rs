use std::io::Write;

use pretty_assertions::assert_eq;

use super::{ConfigError, FlagSetConfig};
use crate::decompose::Decomposition;
use crate::policy::FlagPolicy;

const PERMISSIONS: &str = r#"
label = "permissions"

[policy]
allow_unsafe_values = true

[[members]]
name = "Read"
value = 1

[[members]]
name = "Write"
value = 2

[[members]]
name = "Exec"
value = 8
"#;

#[test]
fn parses_label_policy_and_members() {
	let config = FlagSetConfig::from_toml_str(PERMISSIONS).unwrap();
	assert_eq!(config.label, "permissions");
	assert_eq!(config.policy, FlagPolicy::default().allow_unsafe_values(true));
	let names: Vec<_> = config.members.iter().map(|m| m.name.as_str()).collect();
	assert_eq!(names, vec!["Read", "Write", "Exec"]);
}

#[test]
fn policy_defaults_to_strict() {
	let config = FlagSetConfig::from_toml_str("label = \"bare\"").unwrap();
	assert_eq!(config.policy, FlagPolicy::STRICT);
	assert!(config.members.is_empty());
}

#[test]
fn unknown_keys_are_rejected() {
	let err = FlagSetConfig::from_toml_str("label = \"x\"\n[policy]\nallow_everything = true\n").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}

#[test]
fn builds_a_working_registry() {
	let registry = FlagSetConfig::from_toml_str(PERMISSIONS).unwrap().into_registry::<u16>().unwrap();
	assert_eq!(registry.label(), "permissions");
	assert_eq!(registry.decompose(9).to_string(), "Read, Exec");
	assert!(matches!(registry.decompose(2), Decomposition::ExactMatch(_)));
}

#[test]
fn out_of_range_values_are_reported() {
	let config = FlagSetConfig::from_toml_str("label = \"small\"\n[[members]]\nname = \"Big\"\nvalue = 300\n").unwrap();
	match config.declarations::<u8>() {
		Err(ConfigError::ValueOutOfRange { name, value }) => {
			assert_eq!(name, "Big");
			assert_eq!(value, 300);
		}
		other => panic!("expected ValueOutOfRange, got {other:?}"),
	}
}

#[test]
fn loads_from_disk() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(PERMISSIONS.as_bytes()).unwrap();

	let registry = FlagSetConfig::load(file.path()).unwrap().into_dynamic_registry::<i32>().unwrap();
	assert_eq!(registry.policy(), FlagPolicy::default().allow_unsafe_values(true));
	assert!(registry.register("Read", 16).is_none());
	assert!(registry.register("Admin", 16).is_some(), "unsafe values tolerate the gap at 4");
	assert_eq!(registry.len(), 4);
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = FlagSetConfig::load(&dir.path().join("absent.toml")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }), "{err}");
}
