//! In-Memory Creature Repository
//!
//! Useful for testing and for one-shot runs that need no durable storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::persistence::{CreatureEntity, CreatureRepository, StorageError};

/// Thread-safe implementation using RwLock.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCreatureRepository {
    creatures: Arc<RwLock<HashMap<String, CreatureEntity>>>,
}

impl InMemoryCreatureRepository {
    pub fn new() -> Self {
        Self {
            creatures: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, CreatureEntity>>, StorageError> {
        self.creatures.read().map_err(|_| StorageError::Lock("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, CreatureEntity>>, StorageError> {
        self.creatures.write().map_err(|_| StorageError::Lock("write"))
    }
}

impl CreatureRepository for InMemoryCreatureRepository {
    fn save(&self, entity: CreatureEntity) -> Result<(), StorageError> {
        let mut creatures = self.write()?;
        debug!(creature_id = entity.id(), "Storing creature in memory");
        creatures.insert(entity.id().to_string(), entity);
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<CreatureEntity>, StorageError> {
        let creatures = self.read()?;
        Ok(creatures.get(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<CreatureEntity>, StorageError> {
        let creatures = self.read()?;
        Ok(creatures.values().cloned().collect())
    }

    fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut creatures = self.write()?;
        Ok(creatures.remove(id).is_some())
    }

    fn count(&self) -> Result<usize, StorageError> {
        let creatures = self.read()?;
        Ok(creatures.len())
    }
}
