//! Repository capability for entities that own their own lifecycle.

use std::sync::Arc;

use agora_core::{Entity, PersistenceResult, SurrogateId};

use crate::child::ChildRepository;

/// Repository for parent-type entities.
///
/// Parent entities are fine to be deleted on their own. Child entities
/// follow a different pattern: remove the child from the parent's
/// collection, then save the parent. To ensure a child entity is never
/// deleted on its own, [`ChildRepository`] simply lacks the delete methods,
/// while this strictly additive extension for parent-type entities has
/// them.
pub trait ParentRepository<T: Entity>: ChildRepository<T> {
    /// Save or update the entity.
    ///
    /// Inserts if transient (the storage layer assigns the surrogate key
    /// through `identity_mut`), updates if already persisted. Never deletes
    /// cascaded children.
    fn save_or_update(&self, entity: &mut T) -> PersistenceResult<()>;

    /// Delete the entity by surrogate key.
    ///
    /// Note: this method does **not** delete cascaded entities. Returns
    /// `Ok(false)` when no matching entity was found.
    fn delete_by_id(&self, id: SurrogateId) -> PersistenceResult<bool>;

    /// Delete the entity by reference.
    ///
    /// This method **does** delete all cascaded references — asymmetric
    /// with the id-based variant by design. A transient argument is a
    /// contract violation (`PersistenceError::NotPersisted`).
    fn delete(&self, entity: &T) -> PersistenceResult<()>;
}

impl<T, R> ParentRepository<T> for Arc<R>
where
    T: Entity,
    R: ParentRepository<T> + ?Sized,
{
    fn save_or_update(&self, entity: &mut T) -> PersistenceResult<()> {
        (**self).save_or_update(entity)
    }

    fn delete_by_id(&self, id: SurrogateId) -> PersistenceResult<bool> {
        (**self).delete_by_id(id)
    }

    fn delete(&self, entity: &T) -> PersistenceResult<()> {
        (**self).delete(entity)
    }
}
