//! Lookup capabilities the decorator reads from.
//!
//! The host integration adapts its own objects to these traits. Both are
//! fallible: an `Err` means the dependency could not be reached or gave
//! back something unusable, and the decorator degrades to the raw name.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HudError, Result};
use crate::types::Level;

/// Registry of known monsters and their base levels.
pub trait MonsterLookup: Send + Sync {
    /// Whether `entity_id` is a registered monster.
    ///
    /// # Errors
    /// Returns `HudError::LookupUnavailable` if the registry cannot be read.
    fn exists(&self, entity_id: &str) -> Result<bool>;

    /// Base level of `entity_id`; `0` means unknown.
    ///
    /// # Errors
    /// Returns `HudError::LookupUnavailable` if the registry cannot be read.
    fn level_of(&self, entity_id: &str) -> Result<Level>;
}

/// Source of the viewer's current level.
pub trait ObserverLevelSource: Send + Sync {
    /// The observer's level right now.
    ///
    /// # Errors
    /// Returns `HudError::LookupUnavailable` if the level cannot be read.
    fn current_level(&self) -> Result<Level>;
}

impl<T: MonsterLookup + ?Sized> MonsterLookup for Arc<T> {
    fn exists(&self, entity_id: &str) -> Result<bool> {
        (**self).exists(entity_id)
    }

    fn level_of(&self, entity_id: &str) -> Result<Level> {
        (**self).level_of(entity_id)
    }
}

impl<T: ObserverLevelSource + ?Sized> ObserverLevelSource for Arc<T> {
    fn current_level(&self) -> Result<Level> {
        (**self).current_level()
    }
}

// ---------------------------------------------------------------------------
// In-memory monster table
// ---------------------------------------------------------------------------

/// One row of a monster data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterRecord {
    /// Entity identifier (prefab name).
    pub name: String,
    /// Base level; `0` hides the level.
    #[serde(default)]
    pub level: Level,
}

/// Thread-safe monster registry that may be filled after startup.
#[derive(Debug, Default)]
pub struct MonsterTable {
    levels: RwLock<HashMap<String, Level>>,
}

impl MonsterTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records. Later duplicates win.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = MonsterRecord>) -> Self {
        let table = Self::new();
        table.extend(records);
        table
    }

    /// Parse a JSON array of `{ "name": ..., "level": ... }` records.
    ///
    /// # Errors
    /// Returns `HudError::MalformedConfig` if the JSON does not match.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<MonsterRecord> = serde_json::from_str(json)
            .map_err(|e| HudError::MalformedConfig(format!("monster table: {e}")))?;
        Ok(Self::from_records(records))
    }

    /// Read and parse a JSON monster file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Register or update one monster.
    pub fn insert(&self, name: impl Into<String>, level: Level) {
        self.levels.write().insert(name.into(), level);
    }

    /// Register many monsters at once.
    pub fn extend(&self, records: impl IntoIterator<Item = MonsterRecord>) {
        let mut levels = self.levels.write();
        for record in records {
            levels.insert(record.name, record.level);
        }
        debug!(total = levels.len(), "Monster table updated");
    }

    /// Remove a monster; returns its level if it was registered.
    pub fn remove(&self, name: &str) -> Option<Level> {
        self.levels.write().remove(name)
    }

    /// Number of registered monsters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.read().len()
    }

    /// Whether no monsters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.read().is_empty()
    }
}

impl MonsterLookup for MonsterTable {
    fn exists(&self, entity_id: &str) -> Result<bool> {
        Ok(self.levels.read().contains_key(entity_id))
    }

    fn level_of(&self, entity_id: &str) -> Result<Level> {
        self.levels
            .read()
            .get(entity_id)
            .copied()
            .ok_or_else(|| HudError::lookup("monsters", format!("{entity_id} is not registered")))
    }
}

// ---------------------------------------------------------------------------
// Fixed observer level
// ---------------------------------------------------------------------------

/// Observer level that only changes when told to.
#[derive(Debug)]
pub struct FixedObserverLevel {
    level: RwLock<Level>,
}

impl FixedObserverLevel {
    /// Start at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level: RwLock::new(level),
        }
    }

    /// Update the level (e.g. on level-up).
    pub fn set(&self, level: Level) {
        *self.level.write() = level;
    }
}

impl Default for FixedObserverLevel {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ObserverLevelSource for FixedObserverLevel {
    fn current_level(&self) -> Result<Level> {
        Ok(*self.level.read())
    }
}
