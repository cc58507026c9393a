use serde::{Deserialize, Serialize};

/// Elemental types a move can have.
///
/// Serialized as the lowercase English code (`"fire"`, `"dark"`, ...), which is
/// what the app's type chart is keyed on. The spreadsheet writes them in
/// Japanese; [`MoveType::from_label`] is the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// All type variants in type-chart order.
const ALL_TYPES: &[MoveType] = &[
    MoveType::Normal,
    MoveType::Fire,
    MoveType::Water,
    MoveType::Electric,
    MoveType::Grass,
    MoveType::Ice,
    MoveType::Fighting,
    MoveType::Poison,
    MoveType::Ground,
    MoveType::Flying,
    MoveType::Psychic,
    MoveType::Bug,
    MoveType::Rock,
    MoveType::Ghost,
    MoveType::Dragon,
    MoveType::Dark,
    MoveType::Steel,
    MoveType::Fairy,
];

impl MoveType {
    /// Canonical lowercase code used in the output JSON.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }

    /// Label used for this type in the move spreadsheet.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "ノーマル",
            Self::Fire => "ほのお",
            Self::Water => "みず",
            Self::Electric => "でんき",
            Self::Grass => "くさ",
            Self::Ice => "こおり",
            Self::Fighting => "かくとう",
            Self::Poison => "どく",
            Self::Ground => "じめん",
            Self::Flying => "ひこう",
            Self::Psychic => "エスパー",
            Self::Bug => "むし",
            Self::Rock => "いわ",
            Self::Ghost => "ゴースト",
            Self::Dragon => "ドラゴン",
            Self::Dark => "あく",
            Self::Steel => "はがね",
            Self::Fairy => "フェアリー",
        }
    }

    /// Translate a spreadsheet label into a type.
    ///
    /// The match is exact: no trimming, no width or kana normalization.
    pub fn from_label(label: &str) -> Option<Self> {
        ALL_TYPES.iter().copied().find(|t| t.label() == label)
    }

    /// Returns all type variants.
    pub fn all() -> &'static [MoveType] {
        ALL_TYPES
    }
}

impl std::fmt::Display for MoveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a string is not a canonical type code.
#[derive(Debug, Clone)]
pub struct MoveTypeParseError(pub String);

impl std::fmt::Display for MoveTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown move type: '{}'", self.0)
    }
}

impl std::error::Error for MoveTypeParseError {}

impl std::str::FromStr for MoveType {
    type Err = MoveTypeParseError;

    /// Parse a canonical type code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_TYPES
            .iter()
            .copied()
            .find(|t| t.code() == lower)
            .ok_or_else(|| MoveTypeParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/move_type_tests.rs"]
mod tests;
