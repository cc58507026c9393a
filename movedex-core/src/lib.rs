//! Move data model shared by the converter and the CLI.
//!
//! Holds the elemental type and damage category enums (including the fixed
//! spreadsheet-label translation tables), roster entries, and the move records
//! the app reads. The type chart, damage and stat formulas that consume those
//! records also live here. No I/O happens in this crate.

pub mod category;
pub mod damage;
pub mod move_type;
pub mod record;
pub mod stats;
pub mod type_chart;

pub use category::MoveCategory;
pub use damage::{DamageInput, DamageResult, calc_damage, guaranteed_hits, ko_chance};
pub use move_type::{MoveType, MoveTypeParseError};
pub use record::{EntityId, MoveRecord, RosterEntry};
pub use stats::{Nature, StatKey, Stats, calc_all_stats, calc_stat, nature_multiplier};
pub use type_chart::{STAB, TypeRelation};
