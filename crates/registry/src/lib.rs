#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Named enumeration registries.
//!
//! # Purpose
//!
//! A registry is the closed set of [`Member`]s belonging to one enumeration: each member is a
//! `(name, value)` pair handed out as a shared singleton ([`MemberRef`]). The registry indexes
//! members by name and by value and optionally accepts new members at runtime.
//!
//! # Mental Model
//!
//! 1. **Declaration:** the member set is listed explicitly in [`Declarations`], usually with the
//!    [`declarations!`] macro. Nothing is discovered implicitly.
//! 2. **Build:** the first access to a [`Registry`] builds an immutable [`Snapshot`] from the
//!    declarations and runs the optional [`SnapshotCheck`]. Exactly one thread builds; the rest wait.
//! 3. **Consumption:** readers load the current snapshot and look members up by name or value.
//! 4. **Extension:** a [`DynamicRegistry`] builds an extended snapshot and publishes it with a
//!    compare-and-swap, so concurrent registrations are linearizable and reads stay lock-free.
//!
//! # Concurrency
//!
//! - **Build:** single winner through [`std::sync::OnceLock`].
//! - **Reads:** wait-free (atomic load of the current snapshot).
//! - **Writes:** lock-free CAS retry loop in [`DynamicRegistry::try_register`].
//!
//! # Invariants
//!
//! - The name view and the value view always hold the same members.
//!   - Enforced in: [`Snapshot::from_declarations`], [`Snapshot::with_member`] (both views are
//!     built together and published as one value).
//!   - Tested by: `tests::views_agree_after_registration`
//!   - Failure symptom: a member found by name but not by value.
//!
//! - Names and values are unique within a registry.
//!   - Enforced in: [`Snapshot::from_declarations`] (fatal), [`Snapshot::with_member`] (refused).
//!   - Tested by: `tests::duplicate_declared_name_is_fatal`, `tests::register_refuses_duplicate_value`
//!   - Failure symptom: lookups return different members depending on the view.
//!
//! - At most one concurrent registration of a given name succeeds.
//!   - Enforced in: [`DynamicRegistry::try_register`] (CAS against the snapshot that was checked).
//!   - Tested by: `tests::concurrent_same_name_has_one_winner`
//!   - Failure symptom: two members share a name.

mod decl;
mod dynamic;
mod error;
mod member;
mod registry;
mod snapshot;

pub use decl::Declarations;
pub use dynamic::DynamicRegistry;
pub use error::{CheckError, DeclError, RegisterError};
pub use member::{EnumValue, Member, MemberRef};
pub use registry::{Registry, SnapshotCheck};
pub use snapshot::Snapshot;
