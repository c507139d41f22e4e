//! Serde codec for identifiers.
//!
//! Identifiers cross data-interchange boundaries as a single string
//! token in canonical UUID text form. Absent identifier references are
//! `Option<Id<K>>` and serialize as the null token. Any non-string
//! token, malformed UUID text, or textual nil fails deserialization as
//! one umbrella error naming the kind and echoing the raw input;
//! sub-reasons are not distinguished to the caller.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::identifier::{Id, Kind};

impl<K: Kind> Serialize for Id<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct IdVisitor<K>(PhantomData<fn() -> K>);

impl<K: Kind> Visitor<'_> for IdVisitor<K> {
    type Value = Id<K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} identifier in canonical UUID text form", K::NAME)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Id::parse(value).map_err(|_| {
            de::Error::custom(format_args!(
                "cannot deserialize {} identifier from '{}'",
                K::NAME,
                value
            ))
        })
    }
}

impl<'de, K: Kind> Deserialize<'de> for Id<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(IdVisitor(PhantomData))
    }
}

// =============================================================================
// Tests
// =============================================================================
