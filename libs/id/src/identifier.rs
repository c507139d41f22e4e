//! The generic identifier core.
//!
//! [`Id<K>`] wraps a [`Uuid`] together with a zero-sized kind marker so
//! that identifiers of different resource kinds are different types.
//! All behavior lives here once; declaring a new kind is one line of
//! [`define_id!`](crate::define_id).

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::IdError;

/// A kind marker distinguishing one identifier family from another.
///
/// Markers are zero-sized and never instantiated; they exist purely so
/// the compiler rejects a `CustomerId` where an `OrderId` is expected.
pub trait Kind: 'static {
    /// Human-readable kind name, used in error messages.
    const NAME: &'static str;

    /// Request-parameter name this kind binds from at HTTP boundaries.
    const PARAM: &'static str;
}

/// A typed identifier over a UUID.
///
/// A populated identifier is guaranteed non-nil: every validated
/// construction path ([`from_uuid`](Id::from_uuid), [`parse`](Id::parse),
/// [`try_parse`](Id::try_parse), [`from_text`](Id::from_text)) rejects
/// the nil UUID. The distinguished [`EMPTY`](Id::EMPTY) value is the
/// only nil-valued representative and stands for "no identifier
/// assigned yet", distinct from a parse failure.
pub struct Id<K> {
    value: Uuid,
    _kind: PhantomData<fn() -> K>,
}

impl<K: Kind> Id<K> {
    /// The empty representative for this kind: the unique nil-valued id.
    ///
    /// A compile-time constant, so every use site observes the same
    /// value with no initialization race to guard against. Compare by
    /// value (`==` or [`is_empty`](Id::is_empty)), never by address.
    pub const EMPTY: Self = Self::from_uuid_unchecked(Uuid::nil());

    /// Wraps any UUID, including nil, with no validation.
    ///
    /// This is the primitive the validated constructors are built on;
    /// prefer [`from_uuid`](Id::from_uuid) at API boundaries.
    #[must_use]
    pub const fn from_uuid_unchecked(value: Uuid) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }

    /// Generates a fresh identifier with a random (v4) UUID.
    ///
    /// Never returns the empty representative.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid_unchecked(Uuid::new_v4())
    }

    /// Returns the empty representative. Same value as [`Id::EMPTY`].
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates a populated identifier from a UUID, rejecting nil.
    pub fn from_uuid(value: Uuid) -> Result<Self, IdError> {
        if value.is_nil() {
            return Err(IdError::NilUuid { kind: K::NAME });
        }
        Ok(Self::from_uuid_unchecked(value))
    }

    /// Parses canonical UUID text into a populated identifier.
    ///
    /// Accepts the textual variants `uuid::Uuid::parse_str` accepts
    /// (hyphenated, braced, urn, simple); surrounding whitespace is
    /// trimmed first. Empty or whitespace-only input and text that
    /// denotes the nil UUID are rejected: empty identifiers are only
    /// reached via [`Id::EMPTY`], never by parsing.
    pub fn parse(text: &str) -> Result<Self, IdError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(IdError::InvalidFormat {
                kind: K::NAME,
                input: text.to_string(),
            });
        }

        let value = Uuid::parse_str(trimmed).map_err(|_| IdError::InvalidFormat {
            kind: K::NAME,
            input: text.to_string(),
        })?;

        if value.is_nil() {
            return Err(IdError::NilText {
                kind: K::NAME,
                input: text.to_string(),
            });
        }

        Ok(Self::from_uuid_unchecked(value))
    }

    /// Non-failing variant of [`parse`](Id::parse).
    ///
    /// Identical acceptance criteria; any rejection yields `None`,
    /// never a partially populated value.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Parses optionally-present text, distinguishing "nothing
    /// supplied" ([`IdError::Missing`]) from "garbage supplied"
    /// ([`IdError::InvalidFormat`]).
    pub fn from_text(text: Option<&str>) -> Result<Self, IdError> {
        match text {
            None => Err(IdError::Missing { kind: K::NAME }),
            Some(text) => Self::parse(text),
        }
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.value
    }

    /// True for the empty representative.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_nil()
    }

    /// Total order with an absent other sorting after any present id.
    ///
    /// The nulls-last convention is deliberate and relied upon by
    /// callers sorting heterogeneous optional collections.
    #[must_use]
    pub fn cmp_nullable(&self, other: Option<&Self>) -> Ordering {
        match other {
            None => Ordering::Greater,
            Some(other) => self.cmp(other),
        }
    }

    /// Compares against a dynamically-typed identifier.
    ///
    /// This is the one reflective entry point: ordinary call sites use
    /// `Ord` and never reach it. An absent other sorts after, matching
    /// [`cmp_nullable`](Id::cmp_nullable); an other of a different
    /// concrete kind fails with [`IdError::KindMismatch`].
    pub fn dyn_cmp(&self, other: Option<&dyn DynId>) -> Result<Ordering, IdError> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return Err(IdError::KindMismatch {
                expected: K::NAME,
                actual: other.kind_name(),
            });
        };
        Ok(self.cmp(other))
    }
}

impl<K: Kind> Default for Id<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual trait impls: derives would put bounds on `K`, and kind
// markers carry no semantics of their own.

impl<K> Clone for Id<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Id<K> {}

impl<K> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K> Eq for Id<K> {}

impl<K> PartialOrd for Id<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Id<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K> Hash for Id<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: Kind> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::NAME, self.value)
    }
}

impl<K: Kind> fmt::Display for Id<K> {
    /// Canonical lowercase hyphenated form; the exact inverse of
    /// [`parse`](Id::parse) for any non-empty identifier.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.as_hyphenated())
    }
}

impl<K: Kind> FromStr for Id<K> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K: Kind> From<Id<K>> for Uuid {
    fn from(id: Id<K>) -> Self {
        id.value
    }
}

/// Object-safe view of an identifier for heterogeneous collections.
///
/// Exists only to serve [`Id::dyn_cmp`]; everything else goes through
/// the typed surface.
pub trait DynId: Any {
    /// The kind name of the concrete identifier.
    fn kind_name(&self) -> &'static str;

    /// The underlying UUID.
    fn uuid(&self) -> Uuid;

    /// Upcast for downcasting to the concrete `Id<K>`.
    fn as_any(&self) -> &dyn Any;
}

impl<K: Kind> DynId for Id<K> {
    fn kind_name(&self) -> &'static str {
        K::NAME
    }

    fn uuid(&self) -> Uuid {
        self.value
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
