//! # Cellars Adapter Layer
//!
//! Outbound adapters (Hexagonal Architecture).
//!
//! ## Structure
//!
//! - `persistence/` - `CreatureEntity` records, the record-level
//!   `CreatureRepository` trait, and `PersistedCreatures`, which implements
//!   the domain's `Creatures` port on top of any repository
//! - `repository/` - Concrete repositories (in-memory, JSON file)

pub mod persistence;
pub mod repository;

pub use persistence::{CreatureEntity, CreatureRepository, PersistedCreatures, StorageError};
pub use repository::{InMemoryCreatureRepository, JsonFileCreatureRepository};
