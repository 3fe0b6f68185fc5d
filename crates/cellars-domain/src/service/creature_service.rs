//! CreatureService - Domain entry point for storing creatures
//!
//! Pure delegation to the `Creatures` port. The service adds no rules of its
//! own; it exists so the application layer depends on a domain service
//! instead of a storage port.

use std::sync::Arc;

use crate::model::creature::Creature;
use crate::model::creature_id::CreatureId;
use crate::repository::creatures::{CreatureError, Creatures};

#[derive(Clone)]
pub struct CreatureService {
    creatures: Arc<dyn Creatures>,
}

impl CreatureService {
    pub fn new(creatures: Arc<dyn Creatures>) -> Self {
        Self { creatures }
    }

    pub fn save(&self, creature: &Creature) -> Result<(), CreatureError> {
        self.creatures.save(creature)
    }

    pub fn find(&self, id: &CreatureId) -> Result<Creature, CreatureError> {
        self.creatures.find(id)
    }

    pub fn find_all(&self) -> Result<Vec<Creature>, CreatureError> {
        self.creatures.find_all()
    }

    pub fn delete(&self, id: &CreatureId) -> Result<(), CreatureError> {
        self.creatures.delete(id)
    }
}

impl core::fmt::Debug for CreatureService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CreatureService").finish_non_exhaustive()
    }
}
