//! Creatures - Abstract persistence for Creatures
//!
//! The domain asks for creatures by id and gets either a creature or a
//! `NotFound` error carrying the id it asked for.

use crate::model::creature::Creature;
use crate::model::creature_id::CreatureId;

/// Errors that can occur while storing or loading creatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatureError {
    /// No creature stored under this id
    NotFound { id: CreatureId },
    /// The storage behind the port failed
    Persistence { message: String },
}

impl CreatureError {
    pub fn persistence(message: impl Into<String>) -> Self {
        CreatureError::Persistence {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CreatureError::NotFound { .. })
    }
}

impl core::fmt::Display for CreatureError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CreatureError::NotFound { id } => {
                write!(f, "No creature found with id: {}", id)
            }
            CreatureError::Persistence { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for CreatureError {}

/// Creatures Port
///
/// This is a PORT in hexagonal architecture.
/// The domain defines what it needs; adapters provide implementations.
///
/// Methods take `&self` so one implementation can be shared behind an `Arc`;
/// implementations handle their own locking.
pub trait Creatures: Send + Sync {
    /// Save a creature (create or overwrite)
    fn save(&self, creature: &Creature) -> Result<(), CreatureError>;

    /// Find a creature by id, failing with `NotFound` when absent
    fn find(&self, id: &CreatureId) -> Result<Creature, CreatureError>;

    /// All stored creatures, in no particular order
    fn find_all(&self) -> Result<Vec<Creature>, CreatureError>;

    /// Remove a creature, failing with `NotFound` when absent
    fn delete(&self, id: &CreatureId) -> Result<(), CreatureError>;

    /// Check if a creature exists
    fn exists(&self, id: &CreatureId) -> Result<bool, CreatureError> {
        match self.find(id) {
            Ok(_) => Ok(true),
            Err(CreatureError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory implementation for testing
    struct InMemoryCreatures {
        creatures: Mutex<HashMap<String, Creature>>,
    }

    impl InMemoryCreatures {
        fn new() -> Self {
            Self {
                creatures: Mutex::new(HashMap::new()),
            }
        }
    }

    impl Creatures for InMemoryCreatures {
        fn save(&self, creature: &Creature) -> Result<(), CreatureError> {
            self.creatures
                .lock()
                .unwrap()
                .insert(creature.id().as_str().to_string(), creature.clone());
            Ok(())
        }

        fn find(&self, id: &CreatureId) -> Result<Creature, CreatureError> {
            self.creatures
                .lock()
                .unwrap()
                .get(id.as_str())
                .cloned()
                .ok_or_else(|| CreatureError::NotFound { id: id.clone() })
        }

        fn find_all(&self) -> Result<Vec<Creature>, CreatureError> {
            Ok(self.creatures.lock().unwrap().values().cloned().collect())
        }

        fn delete(&self, id: &CreatureId) -> Result<(), CreatureError> {
            self.creatures
                .lock()
                .unwrap()
                .remove(id.as_str())
                .map(|_| ())
                .ok_or_else(|| CreatureError::NotFound { id: id.clone() })
        }
    }

    #[test]
    fn test_exists_default_method() {
        let creatures = InMemoryCreatures::new();
        let id = CreatureId::new("c-001");
        assert!(!creatures.exists(&id).unwrap());

        creatures.save(&Creature::new(id.clone())).unwrap();
        assert!(creatures.exists(&id).unwrap());
    }

    #[test]
    fn test_not_found_carries_id() {
        let creatures = InMemoryCreatures::new();
        let err = creatures.find(&CreatureId::new("missing")).unwrap_err();
        assert_eq!(
            err,
            CreatureError::NotFound {
                id: CreatureId::new("missing")
            }
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No creature found with id: missing");
    }

    #[test]
    fn test_persistence_error_display() {
        let err = CreatureError::persistence("disk full");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Persistence error: disk full");
    }
}
