//! Identifier type and ID providers.
//!
//! Every entity is keyed by an [`Id`]: a ULID, which sorts by creation time.
//! The all-zero ULID is the *nil* id and marks "not assigned yet" (for
//! example a question added to a survey by an update request).
//!
//! In JSON an `Id` is its 26-character Crockford base32 string. The nil id
//! serializes as `""`, and `""`, `null` or a missing field all deserialize
//! back to nil.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ulid::Ulid;

/// Sortable, time-ordered entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id(Ulid);

impl Id {
    /// The nil id (all zero bits).
    #[must_use]
    pub const fn nil() -> Self {
        Self(Ulid::nil())
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            return Ok(());
        }
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a valid ULID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid id '{input}': {reason}")]
pub struct ParseIdError {
    input: String,
    reason: String,
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::nil());
        }
        Ulid::from_string(s).map(Self).map_err(|e| ParseIdError {
            input: s.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a ULID string, an empty string, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Id, E> {
        Ok(Id::nil())
    }

    fn visit_none<E: de::Error>(self) -> Result<Id, E> {
        Ok(Id::nil())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // deserialize_any so the same impl works for map keys.
        deserializer.deserialize_any(IdVisitor)
    }
}

/// Source of fresh identifiers.
///
/// Injected into the service so tests can produce predictable ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Id;
}

/// Production generator backed by `Ulid::new()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidGenerator;

impl UlidGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UlidGenerator {
    fn generate(&self) -> Id {
        Id(Ulid::new())
    }
}

/// Deterministic generator yielding strictly increasing ids.
///
/// The n-th call (starting at 1) returns the ULID with timestamp
/// `base_ms` and random part `n`, so ids sort in generation order.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    base_ms: u64,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// 2024-01-01T00:00:00Z in milliseconds.
    const DEFAULT_BASE_MS: u64 = 1_704_067_200_000;

    #[must_use]
    pub const fn new() -> Self {
        Self::with_base(Self::DEFAULT_BASE_MS)
    }

    #[must_use]
    pub const fn with_base(base_ms: u64) -> Self {
        Self {
            base_ms,
            next: AtomicU64::new(1),
        }
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst) - 1
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> Id {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        Id(Ulid::from_parts(self.base_ms, u128::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nil_is_default_and_displays_empty() {
        assert!(Id::default().is_nil());
        assert_eq!(Id::nil().to_string(), "");
    }

    #[test]
    fn parse_display_roundtrip() {
        let id = UlidGenerator::new().generate();
        let parsed: Id = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert_eq!(id.to_string().len(), 26);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-ulid".parse::<Id>().unwrap_err();
        assert!(err.to_string().contains("not-a-ulid"));
    }

    #[test]
    fn json_empty_missing_and_null_are_nil() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default)]
            id: Id,
        }

        for raw in [r#"{"id":""}"#, r#"{"id":null}"#, "{}"] {
            let holder: Holder = serde_json::from_str(raw).unwrap();
            assert!(holder.id.is_nil(), "expected nil for {raw}");
        }
    }

    #[test]
    fn json_serializes_as_string() {
        let id = SequentialIdGenerator::new().generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::to_string(&Id::nil()).unwrap(), "\"\"");
    }

    #[test]
    fn sequential_ids_are_ordered_and_distinct() {
        let ids = SequentialIdGenerator::new();
        let a = ids.generate();
        let b = ids.generate();
        let c = ids.generate();
        assert!(a < b && b < c);
        assert!(!a.is_nil());
        assert_eq!(ids.issued(), 3);
    }
}
