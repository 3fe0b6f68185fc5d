//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from persistence,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────────
//! trait Creatures       │  PersistedCreatures
//!   fn save()           │    └─ InMemoryCreatureRepository
//!   fn find()           │    └─ JsonFileCreatureRepository
//! ```

pub mod creatures;
