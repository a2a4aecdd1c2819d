//! Entity identity model: equality and hashing keyed on a stable uuid.
//!
//! Surrogate numeric keys are assigned late (only after first save), so
//! equality cannot depend on them without breaking for transient objects
//! placed into sets or maps before saving. The client-generated uuid gives
//! a stable identity from construction through persistence and deletion.

use core::any::Any;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{PersistenceError, PersistenceResult};
use crate::id::{EntityUuid, SurrogateId};

/// Identity slot embedded by value in every persistent domain object.
///
/// Equality and hashing ignore the surrogate key and are computed from the
/// uuid alone, so two instances representing the same entity compare equal
/// whether or not either has been saved yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIdentity {
    uuid: EntityUuid,
    surrogate: Option<SurrogateId>,
}

impl EntityIdentity {
    /// Fresh identity with a newly generated uuid and no surrogate key.
    pub fn new() -> Self {
        Self::with_uuid(EntityUuid::new())
    }

    /// Identity carrying a caller-supplied uuid (loading, tests).
    pub fn with_uuid(uuid: EntityUuid) -> Self {
        Self {
            uuid,
            surrogate: None,
        }
    }

    pub fn uuid(&self) -> EntityUuid {
        self.uuid
    }

    pub fn surrogate(&self) -> Option<SurrogateId> {
        self.surrogate
    }

    pub fn is_persisted(&self) -> bool {
        self.surrogate.is_some()
    }

    /// Record the storage-assigned surrogate key on first save.
    ///
    /// Re-assigning the same key is a no-op (idempotent updates); assigning
    /// a different key to an already-persisted identity is a storage
    /// contract violation.
    pub fn assign_surrogate(&mut self, id: SurrogateId) -> PersistenceResult<()> {
        match self.surrogate {
            None => {
                self.surrogate = Some(id);
                Ok(())
            }
            Some(existing) if existing == id => Ok(()),
            Some(existing) => Err(PersistenceError::storage(format!(
                "surrogate key already assigned: {existing}, attempted {id}"
            ))),
        }
    }
}

impl Default for EntityIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for EntityIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for EntityIdentity {}

impl Hash for EntityIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

/// Base contract for persistent domain objects.
///
/// Implementors embed an [`EntityIdentity`] and expose it through
/// [`identity`](Entity::identity); everything else is provided. The
/// [`impl_entity!`](crate::impl_entity) macro generates the impl together
/// with identity-delegating `PartialEq`/`Eq`/`Hash`.
pub trait Entity: Any + Send + Sync {
    /// The embedded identity slot.
    fn identity(&self) -> &EntityIdentity;

    /// Mutable access for the storage collaborator (surrogate assignment).
    fn identity_mut(&mut self) -> &mut EntityIdentity;

    /// Stable client-generated identity, set at construction.
    fn uuid(&self) -> EntityUuid {
        self.identity().uuid()
    }

    /// Storage-assigned surrogate key; `None` until first save.
    fn id(&self) -> Option<SurrogateId> {
        self.identity().surrogate()
    }

    fn is_persisted(&self) -> bool {
        self.identity().is_persisted()
    }

    /// Identity comparison across entity types.
    ///
    /// True iff the concrete runtime types are identical and the uuids
    /// match. The type check dominates: two unrelated entity types sharing
    /// a uuid value are never equal. Never panics for foreign types.
    fn entity_eq(&self, other: &dyn Entity) -> bool {
        self.type_id() == other.type_id() && self.identity().uuid() == other.identity().uuid()
    }
}

/// Nullable form of the identity comparison: `None` compares unequal.
pub fn same_entity(a: &dyn Entity, b: Option<&dyn Entity>) -> bool {
    b.is_some_and(|b| a.entity_eq(b))
}

/// Implement [`Entity`] plus identity-delegating `PartialEq`/`Eq`/`Hash`
/// for a struct with an `identity: EntityIdentity` field.
///
/// Equality is deliberately *not* structural: two loaded copies of the same
/// entity stay equal even after their mutable fields diverge.
#[macro_export]
macro_rules! impl_entity {
    ($t:ty) => {
        impl $crate::entity::Entity for $t {
            fn identity(&self) -> &$crate::entity::EntityIdentity {
                &self.identity
            }

            fn identity_mut(&mut self) -> &mut $crate::entity::EntityIdentity {
                &mut self.identity
            }
        }

        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                self.identity == other.identity
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(&self.identity, state);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    #[derive(Debug, Clone)]
    struct EntityObject {
        identity: EntityIdentity,
    }

    impl EntityObject {
        fn new() -> Self {
            Self {
                identity: EntityIdentity::new(),
            }
        }

        fn with_uuid(uuid: EntityUuid) -> Self {
            Self {
                identity: EntityIdentity::with_uuid(uuid),
            }
        }
    }

    impl_entity!(EntityObject);

    #[derive(Debug, Clone)]
    struct OtherObject {
        identity: EntityIdentity,
    }

    impl OtherObject {
        fn with_uuid(uuid: EntityUuid) -> Self {
            Self {
                identity: EntityIdentity::with_uuid(uuid),
            }
        }
    }

    impl_entity!(OtherObject);

    fn hash_of(e: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        e.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equals_reflexivity() {
        let first = EntityObject::new();

        assert_eq!(first, first);
        assert!(first.entity_eq(&first));
    }

    #[test]
    fn equals_symmetry() {
        let uuid = EntityUuid::new();
        let first = EntityObject::with_uuid(uuid);
        let second = EntityObject::with_uuid(uuid);

        assert_eq!(first, second);
        assert_eq!(second, first);
    }

    #[test]
    fn equals_transitivity() {
        let uuid = EntityUuid::new();
        let first = EntityObject::with_uuid(uuid);
        let second = EntityObject::with_uuid(uuid);
        let third = EntityObject::with_uuid(uuid);

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(first, third);
    }

    #[test]
    fn equals_none_is_false() {
        let first = EntityObject::new();

        assert!(!same_entity(&first, None));
    }

    #[test]
    fn equals_when_different_uuid() {
        let first = EntityObject::with_uuid(EntityUuid::new());
        let second = EntityObject::with_uuid(EntityUuid::new());

        assert_ne!(first, second);
        assert_ne!(second, first);
    }

    #[test]
    fn equals_when_different_types() {
        let uuid = EntityUuid::new();
        let first = EntityObject::with_uuid(uuid);
        let second = OtherObject::with_uuid(uuid);

        // Same uuid, but the runtime type check dominates.
        assert!(!first.entity_eq(&second));
        assert!(!second.entity_eq(&first));
    }

    #[test]
    fn hash_equal_for_equal_uuid() {
        let uuid = EntityUuid::new();
        let first = EntityObject::with_uuid(uuid);
        let second = EntityObject::with_uuid(uuid);

        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn equality_and_hash_survive_surrogate_assignment() {
        let uuid = EntityUuid::new();
        let mut saved = EntityObject::with_uuid(uuid);
        let transient = EntityObject::with_uuid(uuid);

        saved.identity_mut().assign_surrogate(SurrogateId::new(42)).unwrap();

        assert_eq!(saved, transient);
        assert_eq!(hash_of(&saved), hash_of(&transient));
        assert_eq!(saved.id(), Some(SurrogateId::new(42)));
        assert_eq!(transient.id(), None);
    }

    #[test]
    fn surrogate_assignment_is_idempotent_but_stable() {
        let mut identity = EntityIdentity::new();
        identity.assign_surrogate(SurrogateId::new(1)).unwrap();
        identity.assign_surrogate(SurrogateId::new(1)).unwrap();

        let err = identity.assign_surrogate(SurrogateId::new(2)).unwrap_err();
        assert!(matches!(err, PersistenceError::Storage(_)));
        assert_eq!(identity.surrogate(), Some(SurrogateId::new(1)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use uuid::Uuid;

        proptest! {
            /// Property: for any uuid, two instances built from it are
            /// equal in both directions and hash identically.
            #[test]
            fn identity_equality_laws(raw in any::<u128>()) {
                let uuid = EntityUuid::from_uuid(Uuid::from_u128(raw));
                let a = EntityObject::with_uuid(uuid);
                let b = EntityObject::with_uuid(uuid);
                let c = EntityObject::with_uuid(uuid);

                prop_assert_eq!(&a, &a);
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(&b, &a);
                prop_assert!(a == b && b == c && a == c);
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            }

            /// Property: distinct uuids never compare equal.
            #[test]
            fn distinct_uuids_are_unequal(x in any::<u128>(), y in any::<u128>()) {
                prop_assume!(x != y);
                let a = EntityObject::with_uuid(EntityUuid::from_uuid(Uuid::from_u128(x)));
                let b = EntityObject::with_uuid(EntityUuid::from_uuid(Uuid::from_u128(y)));

                prop_assert_ne!(&a, &b);
                prop_assert_ne!(&b, &a);
            }
        }
    }
}
