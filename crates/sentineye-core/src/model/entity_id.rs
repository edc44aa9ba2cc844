// ── Core identity types ──
//
// CameraId and AlertId are the canonical identifiers for every store
// entity. All external representations ("cam-006", "006", numeric 6)
// normalize to the same numeric key at ingestion, so lookups never
// need weak string/number comparison.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure to derive a canonical id from an external representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a recognizable {kind} id: '{raw}'")]
pub struct ParseIdError {
    pub(crate) kind: &'static str,
    pub(crate) raw: String,
}

/// Strip an optional `{prefix}-` and parse the numeric remainder.
fn parse_numeric(kind: &'static str, prefix: &str, raw: &str) -> Result<u32, ParseIdError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix(prefix)
        .map_or(trimmed, |rest| rest.trim_start_matches('-'));

    digits.parse::<u32>().map_err(|_| ParseIdError {
        kind,
        raw: raw.to_owned(),
    })
}

/// External id representations accepted on deserialization.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u32),
    Text(String),
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $kind:literal, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// The numeric index behind the canonical form.
            pub fn index(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{:03}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self(index)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_numeric($kind, $prefix, s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match RawId::deserialize(deserializer)? {
                    RawId::Number(n) => Ok(Self(n)),
                    RawId::Text(s) => s.parse().map_err(de::Error::custom),
                }
            }
        }
    };
}

entity_id!(
    /// Canonical camera identifier. Displays as `cam-006`.
    CameraId,
    "camera",
    "cam"
);

entity_id!(
    /// Canonical alert identifier. Displays as `alt-101`.
    AlertId,
    "alert",
    "alt"
);
