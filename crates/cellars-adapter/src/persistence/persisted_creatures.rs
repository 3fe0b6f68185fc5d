//! PersistedCreatures - The domain's `Creatures` port over a repository
//!
//! Saving keeps only the id. Finding rebuilds a creature from that id alone,
//! so it comes back with the standard creature type and no armor class,
//! speeds or hit points.

use std::sync::Arc;

use cellars_domain::{Creature, CreatureError, CreatureId, Creatures};
use tracing::debug;

use super::creature_entity::CreatureEntity;
use super::creature_repository::{CreatureRepository, StorageError};

#[derive(Clone)]
pub struct PersistedCreatures {
    repository: Arc<dyn CreatureRepository>,
}

impl PersistedCreatures {
    pub fn new(repository: Arc<dyn CreatureRepository>) -> Self {
        Self { repository }
    }

    fn to_entity(creature: &Creature) -> CreatureEntity {
        CreatureEntity::new(creature.id().as_str())
    }

    fn to_domain(entity: CreatureEntity) -> Creature {
        Creature::new(CreatureId::new(entity.id()))
    }
}

fn persistence_error(err: StorageError) -> CreatureError {
    CreatureError::persistence(err.to_string())
}

impl Creatures for PersistedCreatures {
    fn save(&self, creature: &Creature) -> Result<(), CreatureError> {
        debug!(creature_id = %creature.id(), "Saving creature record");
        self.repository
            .save(Self::to_entity(creature))
            .map_err(persistence_error)
    }

    fn find(&self, id: &CreatureId) -> Result<Creature, CreatureError> {
        let found = self
            .repository
            .find_by_id(id.as_str())
            .map_err(persistence_error)?;
        found
            .map(Self::to_domain)
            .ok_or_else(|| CreatureError::NotFound { id: id.clone() })
    }

    fn find_all(&self) -> Result<Vec<Creature>, CreatureError> {
        let entities = self.repository.find_all().map_err(persistence_error)?;
        Ok(entities.into_iter().map(Self::to_domain).collect())
    }

    fn delete(&self, id: &CreatureId) -> Result<(), CreatureError> {
        let removed = self
            .repository
            .delete(id.as_str())
            .map_err(persistence_error)?;
        if removed {
            Ok(())
        } else {
            Err(CreatureError::NotFound { id: id.clone() })
        }
    }
}

impl core::fmt::Debug for PersistedCreatures {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PersistedCreatures").finish_non_exhaustive()
    }
}
