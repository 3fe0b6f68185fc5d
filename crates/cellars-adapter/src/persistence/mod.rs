//! Persistence Adapters - Creatures port on top of record storage
//!
//! ```text
//! Creatures (domain port)
//!   └─ PersistedCreatures ──CreatureEntity──► dyn CreatureRepository
//! ```

pub mod creature_entity;
pub mod creature_repository;
pub mod persisted_creatures;

pub use creature_entity::CreatureEntity;
pub use creature_repository::{CreatureRepository, StorageError};
pub use persisted_creatures::PersistedCreatures;
