use serde::{Deserialize, Serialize};

/// Damage category of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    /// Non-damaging. Never written to the output.
    Status,
}

const ALL_CATEGORIES: &[MoveCategory] = &[
    MoveCategory::Physical,
    MoveCategory::Special,
    MoveCategory::Status,
];

impl MoveCategory {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Special => "special",
            Self::Status => "status",
        }
    }

    /// Label used in the spreadsheet's category column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Physical => "物理",
            Self::Special => "特殊",
            Self::Status => "変化",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.label() == label)
    }

    /// Whether moves of this category deal direct damage.
    pub fn is_damaging(&self) -> bool {
        !matches!(self, Self::Status)
    }

    pub fn all() -> &'static [MoveCategory] {
        ALL_CATEGORIES
    }
}

impl std::fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
