//! Roster entries read from the app's data directory and the move records
//! written back next to them.

use serde::{Deserialize, Serialize};

use crate::{MoveCategory, MoveType};

/// Identifier of a roster entity.
///
/// The roster file is hand-maintained, so ids show up both as strings
/// (`"pikachu-2"`) and as bare numbers. Both are passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Text(String),
    Number(serde_json::Number),
}

impl EntityId {
    /// True for `""` and numeric zero.
    ///
    /// The roster uses these as placeholders for entities that have not been
    /// assigned an id yet; they never resolve a target.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => n.as_f64() == Some(0.0),
        }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<u64> for EntityId {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

/// One entity in the roster file. Fields other than `name` and `id` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub id: EntityId,
}

/// A damaging move as consumed by the app.
///
/// Field order here is the key order of the emitted JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Same as `name`; move names are unique in the spreadsheet.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: MoveType,
    pub category: MoveCategory,
    /// Always at least 1.
    pub power: u32,
    /// Resolved roster ids, in spreadsheet order. May be empty.
    pub targets: Vec<EntityId>,
}

impl MoveRecord {
    pub fn new(
        name: impl Into<String>,
        move_type: MoveType,
        category: MoveCategory,
        power: u32,
        targets: Vec<EntityId>,
    ) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            move_type,
            category,
            power,
            targets,
        }
    }
}
