//! Read-only repository capability for child-type entities.

use std::sync::Arc;

use agora_core::{Entity, PersistenceResult, SurrogateId};

/// Repository capability for entities that are owned by a parent.
///
/// Deliberately exposes no save and no delete: a child entity is removed by
/// taking it out of the parent's owning collection and saving the parent.
/// The restriction is enforced by interface shape at compile time, not by
/// runtime checks.
pub trait ChildRepository<T: Entity>: Send + Sync {
    /// Get the persistent instance for `id`, or `Ok(None)` if none exists.
    /// Callers must handle absence; it is never an error.
    fn get(&self, id: SurrogateId) -> PersistenceResult<Option<T>>;

    /// Existence check without materializing the entity.
    fn is_exist(&self, id: SurrogateId) -> PersistenceResult<bool>;
}

impl<T, R> ChildRepository<T> for Arc<R>
where
    T: Entity,
    R: ChildRepository<T> + ?Sized,
{
    fn get(&self, id: SurrogateId) -> PersistenceResult<Option<T>> {
        (**self).get(id)
    }

    fn is_exist(&self, id: SurrogateId) -> PersistenceResult<bool> {
        (**self).is_exist(id)
    }
}
