//! Strongly-typed identifiers used across the persistence layer.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PersistenceError;

/// Stable client-generated identity of an entity.
///
/// Assigned once at construction, before the entity is ever saved, and
/// immutable thereafter. This is what equality and hashing key on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityUuid(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses a random UUIDv4. Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = PersistenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| PersistenceError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(EntityUuid, "EntityUuid");

/// Surrogate key assigned by the storage layer on first save.
///
/// Never generated client-side; a transient (unsaved) entity has none.
/// Repository lookups and id-based deletion address rows through it.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SurrogateId(i64);

impl SurrogateId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for SurrogateId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for SurrogateId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<SurrogateId> for i64 {
    fn from(value: SurrogateId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_uuid_roundtrips_through_str() {
        let id = EntityUuid::new();
        let parsed: EntityUuid = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn entity_uuid_rejects_malformed_text() {
        let err = "not-a-uuid".parse::<EntityUuid>().unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidId(_)));
    }

    #[test]
    fn surrogate_id_orders_by_value() {
        assert!(SurrogateId::new(1) < SurrogateId::new(2));
        assert_eq!(SurrogateId::from(7).value(), 7);
    }
}
