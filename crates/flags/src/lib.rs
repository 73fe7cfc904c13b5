//! Flag enumerations over smartenum registries.
//!
//! A flag set is a registry whose values are meant to be combined with bitwise OR. On top of the
//! plain name/value lookups this crate adds:
//!
//! - [`FlagPolicy`]: per-set rules for negative input and the power-of-two check.
//! - [`validate`]: the structural validator, run once when the registry is first built.
//! - [`decompose`]: maps an integer back to the flags it is made of ([`Decomposition`]).
//! - [`FlagRegistry`] / [`DynamicFlagRegistry`]: the registry types tying these together.
//! - [`FlagSetConfig`]: flag sets declared in TOML.
//!
//! ```
//! use smartenum_flags::{Decomposition, FlagPolicy, FlagRegistry};
//! use smartenum_registry::declarations;
//!
//! let flags = FlagRegistry::new("perm", declarations![Read = 1, Write = 2, Exec = 4], FlagPolicy::default());
//! match flags.decompose(5) {
//!     Decomposition::ComponentSet(set) => assert_eq!(set.len(), 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert_eq!(flags.decompose(5).to_string(), "Read, Exec");
//! ```

mod config;
mod decompose;
mod names;
mod policy;
mod registry;
mod validate;
mod value;

pub use config::{ConfigError, FlagSetConfig, MemberConfig};
pub use decompose::{Decomposition, decompose, decompose_opt, decompose_str};
pub use names::resolve_names;
pub use policy::FlagPolicy;
pub use registry::{DynamicFlagRegistry, FlagRegistry};
pub use validate::{FlagDeclError, validate};
pub use value::FlagValue;
