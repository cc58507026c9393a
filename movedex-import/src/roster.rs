//! Roster loading: the name → id table that move targets resolve against.

use std::collections::HashMap;
use std::path::Path;

use movedex_core::{EntityId, RosterEntry};

use crate::error::ConvertError;

/// Lookup table from entity name to entity id.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    by_name: HashMap<String, EntityId>,
}

impl Roster {
    /// Build a roster from entries. A repeated name keeps the last entry's id.
    pub fn from_entries(entries: impl IntoIterator<Item = RosterEntry>) -> Self {
        let by_name = entries.into_iter().map(|e| (e.name, e.id)).collect();
        Self { by_name }
    }

    /// Parse a roster from a JSON array of `{name, id}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Look up the id for a name. Blank ids (`""`, `0`) count as missing.
    pub fn resolve(&self, name: &str) -> Option<&EntityId> {
        self.by_name.get(name).filter(|id| !id.is_blank())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Load the roster JSON file. Any failure here is fatal for the run.
pub fn load_roster(path: &Path) -> Result<Roster, ConvertError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConvertError::io(path.display().to_string(), e))?;
    let roster = Roster::from_json_str(&contents).map_err(|e| ConvertError::Roster {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("Loaded {} roster entries from {}", roster.len(), path.display());
    Ok(roster)
}
