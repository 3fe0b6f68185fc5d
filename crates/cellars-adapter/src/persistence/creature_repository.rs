//! CreatureRepository - Record-level storage capability
//!
//! Implemented by each storage backend. Works on `CreatureEntity` records and
//! plain string ids; it knows nothing about the domain model.

use thiserror::Error;

use super::creature_entity::CreatureEntity;

/// Storage backend failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to acquire {0} lock")]
    Lock(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait CreatureRepository: Send + Sync {
    /// Store a record, replacing any record with the same id
    fn save(&self, entity: CreatureEntity) -> Result<(), StorageError>;

    fn find_by_id(&self, id: &str) -> Result<Option<CreatureEntity>, StorageError>;

    fn find_all(&self) -> Result<Vec<CreatureEntity>, StorageError>;

    /// Remove a record; `Ok(false)` if there was none
    fn delete(&self, id: &str) -> Result<bool, StorageError>;

    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.find_all()?.len())
    }
}
