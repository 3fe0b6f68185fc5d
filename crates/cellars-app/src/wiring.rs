//! Dependency Injection - builds the layers from configuration
//!
//! ```text
//! CreatureFacade
//!   ├── IdGenerator          (PseudoUuidGenerator | UuidV4Generator)
//!   └── CreatureService
//!         └── PersistedCreatures
//!               └── CreatureRepository (InMemory | JsonFile)
//! ```

use std::sync::Arc;

use cellars_adapter::{
    CreatureRepository, InMemoryCreatureRepository, JsonFileCreatureRepository,
    PersistedCreatures,
};
use cellars_domain::CreatureService;
use cellars_usecase::{CreatureFacade, IdGenerator, PseudoUuidGenerator, UuidV4Generator};
use tracing::debug;

use crate::config::{AppConfig, IdGeneratorKind, StorageConfig};

pub struct App {
    pub facade: CreatureFacade,
    pub id_generator: Arc<dyn IdGenerator>,
}

pub fn build(config: &AppConfig) -> App {
    let repository: Arc<dyn CreatureRepository> = match &config.storage {
        StorageConfig::Memory => {
            debug!("Using in-memory storage");
            Arc::new(InMemoryCreatureRepository::new())
        }
        StorageConfig::File { path } => {
            debug!(path = %path.display(), "Using JSON file storage");
            Arc::new(JsonFileCreatureRepository::new(path.clone()))
        }
    };

    let id_generator: Arc<dyn IdGenerator> = match (config.id_generator, config.seed) {
        (IdGeneratorKind::Pseudo, Some(seed)) => Arc::new(PseudoUuidGenerator::seeded(seed)),
        (IdGeneratorKind::Pseudo, None) => Arc::new(PseudoUuidGenerator::from_entropy()),
        (IdGeneratorKind::Uuid, _) => Arc::new(UuidV4Generator),
    };

    let creatures = Arc::new(PersistedCreatures::new(repository));
    let facade = CreatureFacade::new(CreatureService::new(creatures), Arc::clone(&id_generator));

    App {
        facade,
        id_generator,
    }
}
