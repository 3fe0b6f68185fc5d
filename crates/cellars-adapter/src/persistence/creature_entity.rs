//! CreatureEntity - The stored form of a creature
//!
//! Only the id is persisted. Type, armor class, speeds and hit points do not
//! survive a save/find round-trip.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatureEntity {
    id: String,
}

impl CreatureEntity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
