//! Row → move record transformation.
//!
//! Each row goes through a fixed sequence of checks; the first one that fails
//! decides the [`SkipReason`]. Some skips are expected (blank separator rows,
//! status moves, moves without fixed power) and carry no diagnostic, the rest
//! point at data that needs fixing in the spreadsheet.

use std::num::ParseIntError;

use movedex_core::{EntityId, MoveCategory, MoveRecord, MoveType};

use crate::columns::{ColumnLabels, NO_POWER, NOT_IMPLEMENTED, TARGET_DELIMITER};
use crate::roster::Roster;
use crate::rows::Row;

/// Why a row produced no move record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty move name (separator row).
    Blank,
    /// Marked as not implemented in the legacy column.
    NotImplemented { name: String },
    UnknownType { name: String, label: String },
    UnknownCategory { name: String, label: String },
    /// Status moves deal no damage and are left out on purpose.
    Status { name: String },
    /// Power cell is neither empty, `-`, nor an integer.
    InvalidPower { name: String, raw: String },
    /// No fixed power, or power of zero or less.
    NoPower { name: String },
}

impl SkipReason {
    /// Message for the operator, or `None` for expected exclusions.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::UnknownType { name, label } => Some(format!("Unknown type for {name}: {label}")),
            Self::UnknownCategory { name, label } => {
                Some(format!("Unknown category for {name}: {label}"))
            }
            Self::InvalidPower { name, raw } => {
                Some(format!("Could not parse power for {name}: {raw}"))
            }
            Self::Blank | Self::NotImplemented { .. } | Self::Status { .. } | Self::NoPower { .. } => {
                None
            }
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "blank"),
            Self::NotImplemented { name } => write!(f, "{name}: not implemented"),
            Self::UnknownType { name, label } => write!(f, "{name}: unknown type '{label}'"),
            Self::UnknownCategory { name, label } => {
                write!(f, "{name}: unknown category '{label}'")
            }
            Self::Status { name } => write!(f, "{name}: status move"),
            Self::InvalidPower { name, raw } => write!(f, "{name}: bad power '{raw}'"),
            Self::NoPower { name } => write!(f, "{name}: no fixed power"),
        }
    }
}

/// Result of transforming one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Emit {
        record: MoveRecord,
        /// Target names with no roster entry, in row order.
        unresolved: Vec<String>,
    },
    Skip(SkipReason),
}

impl RowOutcome {
    /// All operator-facing messages this row produced.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            Self::Emit { record, unresolved } => unresolved
                .iter()
                .map(|target| unresolved_target_message(target, &record.name))
                .collect(),
            Self::Skip(reason) => reason.diagnostic().into_iter().collect(),
        }
    }

    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            Self::Emit { record, .. } => Some(record),
            Self::Skip(_) => None,
        }
    }
}

fn unresolved_target_message(target: &str, move_name: &str) -> String {
    format!("No roster id for {target} (move: {move_name})")
}

/// Parse a power cell.
///
/// Empty and `-` mean "no fixed power" and give `Ok(None)`. Anything else must
/// be an integer, optionally signed and padded with whitespace. Full-width
/// digits (`９０`) are accepted.
pub fn parse_power(raw: Option<&str>) -> Result<Option<i64>, ParseIntError> {
    match raw {
        None | Some("") | Some(NO_POWER) => Ok(None),
        Some(s) => s
            .trim()
            .chars()
            .map(to_ascii_digit)
            .collect::<String>()
            .parse()
            .map(Some),
    }
}

/// Fold full-width digits U+FF10..=U+FF19 to ASCII; other chars pass through.
fn to_ascii_digit(c: char) -> char {
    match c {
        '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
        c => c,
    }
}

/// Split a targets cell into roster names.
///
/// Spaces, tabs and newlines are removed anywhere in the cell (the sheet wraps
/// long lists), then the rest is split on `、`. Empty pieces are dropped.
pub fn split_targets(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n'))
        .collect();
    cleaned
        .split(TARGET_DELIMITER)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns sheet rows into move records against a fixed roster and column layout.
pub struct Converter<'a> {
    roster: &'a Roster,
    columns: &'a ColumnLabels,
}

impl<'a> Converter<'a> {
    pub fn new(roster: &'a Roster, columns: &'a ColumnLabels) -> Self {
        Self { roster, columns }
    }

    /// Transform one row. Pure: logs nothing, touches no state.
    pub fn transform(&self, row: &Row) -> RowOutcome {
        let cols = self.columns;

        let name = match row.get(&cols.name) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return RowOutcome::Skip(SkipReason::Blank),
        };

        if row.get(&cols.implemented) == Some(NOT_IMPLEMENTED) {
            return RowOutcome::Skip(SkipReason::NotImplemented { name });
        }

        let type_label = row.get(&cols.move_type).unwrap_or("");
        let Some(move_type) = MoveType::from_label(type_label) else {
            return RowOutcome::Skip(SkipReason::UnknownType {
                name,
                label: type_label.to_string(),
            });
        };

        let category_label = row.get(&cols.category).unwrap_or("");
        let Some(category) = MoveCategory::from_label(category_label) else {
            return RowOutcome::Skip(SkipReason::UnknownCategory {
                name,
                label: category_label.to_string(),
            });
        };

        if !category.is_damaging() {
            return RowOutcome::Skip(SkipReason::Status { name });
        }

        let raw_power = row.get(&cols.power);
        let power = match parse_power(raw_power) {
            Ok(Some(p)) if p > 0 => match u32::try_from(p) {
                Ok(p) => p,
                Err(_) => {
                    return RowOutcome::Skip(SkipReason::InvalidPower {
                        name,
                        raw: raw_power.unwrap_or("").to_string(),
                    });
                }
            },
            Ok(_) => return RowOutcome::Skip(SkipReason::NoPower { name }),
            Err(_) => {
                return RowOutcome::Skip(SkipReason::InvalidPower {
                    name,
                    raw: raw_power.unwrap_or("").to_string(),
                });
            }
        };

        let (targets, unresolved) = self.resolve_targets(row.get(&cols.targets).unwrap_or(""));

        RowOutcome::Emit {
            record: MoveRecord::new(name, move_type, category, power, targets),
            unresolved,
        }
    }

    fn resolve_targets(&self, raw: &str) -> (Vec<EntityId>, Vec<String>) {
        let mut targets = Vec::new();
        let mut unresolved = Vec::new();
        for target in split_targets(raw) {
            match self.roster.resolve(&target) {
                Some(id) => targets.push(id.clone()),
                None => unresolved.push(target),
            }
        }
        (targets, unresolved)
    }
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
