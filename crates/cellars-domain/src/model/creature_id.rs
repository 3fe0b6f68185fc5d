//! CreatureId - Identity of a Creature
//!
//! The token is opaque to the domain. It is usually a pseudo-UUID produced by
//! the use case layer, but anything read back from storage is accepted as is.

/// Unique identifier for a Creature
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CreatureId(String);

impl CreatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CreatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CreatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_id_keeps_token() {
        let id = CreatureId::new("0f8fad5b-d9cb-469f-a165-70867728950e");
        assert_eq!(id.as_str(), "0f8fad5b-d9cb-469f-a165-70867728950e");
        assert_eq!(id.to_string(), "0f8fad5b-d9cb-469f-a165-70867728950e");
    }

    #[test]
    fn test_creature_id_equality() {
        assert_eq!(CreatureId::from("c-001"), CreatureId::new(String::from("c-001")));
        assert_ne!(CreatureId::from("c-001"), CreatureId::from("c-002"));
    }
}
