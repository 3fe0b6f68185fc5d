//! JSON File Creature Repository
//!
//! Keeps every record in one JSON document:
//!
//! ```json
//! {
//!   "version": "1",
//!   "updatedAt": "2026-10-16T12:00:00+00:00",
//!   "creatures": [{ "id": "..." }]
//! }
//! ```
//!
//! A missing file is an empty store, and so is a document without
//! `creatures`. `version` and `updatedAt` may be left out of a hand-written
//! file; they are filled in on the next write. Each write rewrites the whole
//! document through a temporary sibling file and a rename.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::persistence::{CreatureEntity, CreatureRepository, StorageError};

const FORMAT_VERSION: &str = "1";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatureDocument {
    #[serde(default)]
    version: String,
    #[serde(default)]
    updated_at: String,
    #[serde(default)]
    creatures: Vec<CreatureEntity>,
}

#[derive(Debug)]
pub struct JsonFileCreatureRepository {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    guard: Mutex<()>,
}

impl JsonFileCreatureRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, StorageError> {
        self.guard.lock().map_err(|_| StorageError::Lock("file"))
    }

    fn load(&self) -> Result<Vec<CreatureEntity>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let document: CreatureDocument = serde_json::from_str(&content)?;
        Ok(document.creatures)
    }

    fn store(&self, creatures: Vec<CreatureEntity>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let document = CreatureDocument {
            version: FORMAT_VERSION.to_string(),
            updated_at: chrono::Utc::now().to_rfc3339(),
            creatures,
        };
        let content = serde_json::to_string_pretty(&document)?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!(
            path = %self.path.display(),
            records = document.creatures.len(),
            "Wrote creature file"
        );
        Ok(())
    }
}

impl CreatureRepository for JsonFileCreatureRepository {
    fn save(&self, entity: CreatureEntity) -> Result<(), StorageError> {
        let _guard = self.lock()?;
        let mut creatures = self.load()?;
        match creatures.iter_mut().find(|c| c.id() == entity.id()) {
            Some(existing) => *existing = entity,
            None => creatures.push(entity),
        }
        self.store(creatures)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<CreatureEntity>, StorageError> {
        let _guard = self.lock()?;
        Ok(self.load()?.into_iter().find(|c| c.id() == id))
    }

    fn find_all(&self) -> Result<Vec<CreatureEntity>, StorageError> {
        let _guard = self.lock()?;
        self.load()
    }

    fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let _guard = self.lock()?;
        let mut creatures = self.load()?;
        let before = creatures.len();
        creatures.retain(|c| c.id() != id);
        if creatures.len() == before {
            return Ok(false);
        }
        self.store(creatures)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistedCreatures;
    use cellars_domain::{ArmorClass, CreatureId, CreatureService, CreatureType, Creatures};
    use cellars_usecase::{CreateCreature, CreatureFacade, PseudoUuidGenerator};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> JsonFileCreatureRepository {
        JsonFileCreatureRepository::new(dir.path().join("creatures.json"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        assert!(repo.find_all().unwrap().is_empty());
        assert_eq!(repo.find_by_id("c-001").unwrap(), None);
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = TempDir::new().unwrap();
        repo_in(&dir).save(CreatureEntity::new("c-001")).unwrap();
        repo_in(&dir).save(CreatureEntity::new("c-002")).unwrap();
        repo_in(&dir).save(CreatureEntity::new("c-001")).unwrap();

        let reopened = repo_in(&dir);
        assert_eq!(reopened.count().unwrap(), 2);
        assert_eq!(
            reopened.find_by_id("c-002").unwrap(),
            Some(CreatureEntity::new("c-002"))
        );
    }

    #[test]
    fn test_document_layout() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        repo.save(CreatureEntity::new("c-001")).unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], "1");
        assert!(value["updatedAt"].is_string());
        assert_eq!(value["creatures"][0]["id"], "c-001");
    }

    #[test]
    fn test_hand_written_file_without_envelope() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        std::fs::write(repo.path(), r#"{ "creatures": [{ "id": "c-009" }] }"#).unwrap();

        assert_eq!(
            repo.find_by_id("c-009").unwrap(),
            Some(CreatureEntity::new("c-009"))
        );

        repo.save(CreatureEntity::new("c-010")).unwrap();
        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], "1");
        assert!(value["updatedAt"].is_string());
        assert_eq!(repo.count().unwrap(), 2);

        std::fs::write(repo.path(), "{}").unwrap();
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        repo.save(CreatureEntity::new("c-001")).unwrap();

        assert!(repo.delete("c-001").unwrap());
        assert!(!repo.delete("c-001").unwrap());
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileCreatureRepository::new(dir.path().join("nested/deeper/creatures.json"));
        repo.save(CreatureEntity::new("c-001")).unwrap();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        std::fs::write(repo.path(), "not json").unwrap();
        assert!(matches!(repo.find_all(), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_facade_over_json_file() {
        let dir = TempDir::new().unwrap();
        let creatures = Arc::new(PersistedCreatures::new(Arc::new(repo_in(&dir))));
        let facade = CreatureFacade::new(
            CreatureService::new(creatures.clone()),
            Arc::new(PseudoUuidGenerator::seeded(11)),
        );

        let created = facade
            .create(CreateCreature::new(CreatureType::Fiend, ArmorClass::new(15, 0), 52))
            .unwrap();

        // A fresh adapter over the same file sees the creature by id only
        let reopened = PersistedCreatures::new(Arc::new(repo_in(&dir)));
        let found = reopened.find(created.id()).unwrap();
        assert_eq!(found.id(), created.id());
        assert_eq!(found.creature_type(), Some(CreatureType::Monstrosity));
        assert!(found.hit_points().is_none());

        assert!(reopened
            .find(&CreatureId::new("missing"))
            .unwrap_err()
            .is_not_found());
    }
}
