//! Spreadsheet column labels and the sentinel values found in those columns.

use serde::{Deserialize, Serialize};

/// Value of the legacy "implemented?" column marking a move as not in the game yet.
pub const NOT_IMPLEMENTED: &str = "未";

/// Power cell value meaning "no fixed power".
pub const NO_POWER: &str = "-";

/// Separator between roster names in the targets cell (ideographic comma).
pub const TARGET_DELIMITER: char = '、';

/// Header labels of the columns the converter reads.
///
/// Defaults match the move sheet export. Older exports also carry an
/// `implemented` column; when the header lacks it that check is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLabels {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: String,
    pub power: String,
    pub targets: String,
    pub implemented: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            name: "わざ名".to_string(),
            move_type: "タイプ".to_string(),
            category: "ぶんるい".to_string(),
            power: "いりょく".to_string(),
            targets: "配布対象".to_string(),
            implemented: "実装済み？".to_string(),
        }
    }
}
