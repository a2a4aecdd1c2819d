//! In-memory repository backed by a `HashMap`.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use agora_core::{Entity, PersistenceError, PersistenceResult, SurrogateId};

use crate::child::ChildRepository;
use crate::crud::Crud;
use crate::parent::ParentRepository;

type CascadeFn<T> = Box<dyn Fn(&T) -> PersistenceResult<()> + Send + Sync>;

struct Table<T> {
    rows: HashMap<SurrogateId, T>,
    next_key: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            next_key: 0,
        }
    }
}

/// In-memory store implementing the full repository contract family.
///
/// Surrogate keys are assigned monotonically on first save. A generic
/// store cannot know a domain type's dependents, so cascade deletion is a
/// pluggable hook invoked on delete-by-reference only; id-based deletion
/// never cascades.
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
    on_cascade: Option<CascadeFn<T>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            table: RwLock::new(Table::default()),
            on_cascade: None,
        }
    }
}

impl<T> InMemoryRepository<T>
where
    T: Entity + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the cascade hook run for each entity removed by reference.
    pub fn with_cascade(
        cascade: impl Fn(&T) -> PersistenceResult<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            on_cascade: Some(Box::new(cascade)),
        }
    }

    fn read_table(&self) -> PersistenceResult<std::sync::RwLockReadGuard<'_, Table<T>>> {
        self.table
            .read()
            .map_err(|_| PersistenceError::storage("lock poisoned"))
    }

    fn write_table(&self) -> PersistenceResult<std::sync::RwLockWriteGuard<'_, Table<T>>> {
        self.table
            .write()
            .map_err(|_| PersistenceError::storage("lock poisoned"))
    }
}

impl<T> ChildRepository<T> for InMemoryRepository<T>
where
    T: Entity + Clone,
{
    fn get(&self, id: SurrogateId) -> PersistenceResult<Option<T>> {
        Ok(self.read_table()?.rows.get(&id).cloned())
    }

    fn is_exist(&self, id: SurrogateId) -> PersistenceResult<bool> {
        Ok(self.read_table()?.rows.contains_key(&id))
    }
}

impl<T> ParentRepository<T> for InMemoryRepository<T>
where
    T: Entity + Clone,
{
    fn save_or_update(&self, entity: &mut T) -> PersistenceResult<()> {
        let mut table = self.write_table()?;

        let key = match entity.id() {
            Some(key) => key,
            None => {
                table.next_key += 1;
                let key = SurrogateId::new(table.next_key);
                entity.identity_mut().assign_surrogate(key)?;
                key
            }
        };

        debug!(uuid = %entity.uuid(), %key, "save_or_update");
        table.rows.insert(key, entity.clone());
        Ok(())
    }

    fn delete_by_id(&self, id: SurrogateId) -> PersistenceResult<bool> {
        let removed = self.write_table()?.rows.remove(&id).is_some();
        debug!(key = %id, removed, "delete_by_id");
        Ok(removed)
    }

    fn delete(&self, entity: &T) -> PersistenceResult<()> {
        let key = entity.id().ok_or_else(|| {
            PersistenceError::not_persisted(format!("delete by reference, uuid {}", entity.uuid()))
        })?;

        let removed = self.write_table()?.rows.remove(&key).ok_or_else(|| {
            PersistenceError::not_persisted(format!("no row for surrogate key {key}"))
        })?;

        debug!(uuid = %removed.uuid(), %key, "delete (cascading)");
        if let Some(cascade) = &self.on_cascade {
            cascade(&removed)?;
        }
        Ok(())
    }
}

impl<T> Crud<T> for InMemoryRepository<T>
where
    T: Entity + Clone,
{
    fn flush(&self) -> PersistenceResult<()> {
        // Writes are immediately visible in memory; real backends push
        // buffered statements here.
        debug!("flush (no-op)");
        Ok(())
    }
}
