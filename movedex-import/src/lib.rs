//! Convert the move spreadsheet export into the app's `moves.json`.
//!
//! This crate owns the whole ETL pass: loading the roster, reading sheet rows,
//! validating and translating each row, and writing the move records out.

pub mod columns;
pub mod config;
pub mod convert;
pub mod error;
pub mod progress;
pub mod roster;
pub mod rows;
pub mod transform;

pub use columns::ColumnLabels;
pub use config::{ConvertConfig, PathOverrides, discover_config, load_config};
pub use convert::{
    ConvertOptions, ConvertReport, ConvertStats, convert, convert_rows, load_moves, write_moves,
};
pub use error::ConvertError;
pub use progress::{ConvertProgress, LogProgress, SilentProgress};
pub use roster::{Roster, load_roster};
pub use rows::{Row, RowReader};
pub use transform::{Converter, RowOutcome, SkipReason, parse_power, split_targets};
