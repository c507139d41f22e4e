//! # storefront-id
//!
//! Strongly-typed identifier types, parsing, and validation for the
//! storefront platform.
//!
//! ## Design Principles
//!
//! - One generic core, [`Id<K>`]: all construction, validation,
//!   ordering, and serialization logic is written once; a kind is a
//!   zero-sized marker declared with [`define_id!`]
//! - Populated identifiers are never nil; the nil-valued
//!   [`Id::EMPTY`] constant is the one sanctioned "no identifier yet"
//!   sentinel, reached only on purpose, never by parsing
//! - Cross-kind mixing is a compile error at ordinary call sites; the
//!   single reflective entry point ([`Id::dyn_cmp`]) reports a
//!   structured kind mismatch instead
//! - Identifiers round-trip: parse → format → parse and
//!   serialize → deserialize are identities for every populated id
//!
//! ## Wire Format
//!
//! Identifiers travel as canonical lowercase hyphenated UUID text:
//!
//! - `d88ff517-9d47-4a79-ab69-9a1aca58085f`
//!
//! Parsing additionally accepts the braced, urn, and simple textual
//! variants; formatting always emits the canonical hyphenated form.

mod binding;
mod codec;
mod error;
mod identifier;
mod macros;
mod types;

pub use binding::{bind_id, BindError, BindOutcome, BindingState, ValueSource};
pub use error::IdError;
pub use identifier::{DynId, Id, Kind};
pub use types::*;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
