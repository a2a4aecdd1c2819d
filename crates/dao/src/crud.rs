//! Full generic persistence contract.

use std::sync::Arc;

use agora_core::{Entity, PersistenceResult};

use crate::parent::ParentRepository;

/// Generic persistence operations for a domain object.
///
/// Composes the read capability and the mutation/deletion capability
/// (each operation is defined once, on its capability trait) and adds an
/// explicit flush. Entities addressed on their own get a `Crud` store;
/// entities in a parent/child relationship are handled through the
/// capability-split traits alone.
pub trait Crud<T: Entity>: ParentRepository<T> {
    /// Make all pending changes immediately visible to the backing store.
    ///
    /// Exists for callers that need the entity visible before the enclosing
    /// unit of work completes (the security layer resolves permissions
    /// against persistent state); they accept the performance cost.
    fn flush(&self) -> PersistenceResult<()>;
}

impl<T, R> Crud<T> for Arc<R>
where
    T: Entity,
    R: Crud<T> + ?Sized,
{
    fn flush(&self) -> PersistenceResult<()> {
        (**self).flush()
    }
}
