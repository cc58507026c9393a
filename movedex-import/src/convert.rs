//! The full conversion pass: roster + move sheet in, moves JSON out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use movedex_core::MoveRecord;

use crate::columns::ColumnLabels;
use crate::error::ConvertError;
use crate::progress::ConvertProgress;
use crate::roster::load_roster;
use crate::rows::{Row, RowReader};
use crate::transform::{Converter, RowOutcome, SkipReason};

/// Inputs and output of a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub csv_path: PathBuf,
    pub roster_path: PathBuf,
    pub output_path: PathBuf,
    pub columns: ColumnLabels,
    /// Run every step except writing the output file.
    pub dry_run: bool,
}

/// Counters for a conversion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertStats {
    pub rows_read: u64,
    pub moves_emitted: u64,
    pub skipped_blank: u64,
    pub skipped_not_implemented: u64,
    pub unknown_types: u64,
    pub unknown_categories: u64,
    pub skipped_status: u64,
    pub invalid_power: u64,
    pub skipped_no_power: u64,
    pub unresolved_targets: u64,
}

impl ConvertStats {
    fn record(&mut self, outcome: &RowOutcome) {
        self.rows_read += 1;
        match outcome {
            RowOutcome::Emit { unresolved, .. } => {
                self.moves_emitted += 1;
                self.unresolved_targets += unresolved.len() as u64;
            }
            RowOutcome::Skip(reason) => match reason {
                SkipReason::Blank => self.skipped_blank += 1,
                SkipReason::NotImplemented { .. } => self.skipped_not_implemented += 1,
                SkipReason::UnknownType { .. } => self.unknown_types += 1,
                SkipReason::UnknownCategory { .. } => self.unknown_categories += 1,
                SkipReason::Status { .. } => self.skipped_status += 1,
                SkipReason::InvalidPower { .. } => self.invalid_power += 1,
                SkipReason::NoPower { .. } => self.skipped_no_power += 1,
            },
        }
    }

    /// Number of diagnostics logged during the run.
    pub fn warnings(&self) -> u64 {
        self.unknown_types + self.unknown_categories + self.invalid_power + self.unresolved_targets
    }
}

/// What a conversion run produced.
#[derive(Debug)]
pub struct ConvertReport {
    pub moves: Vec<MoveRecord>,
    pub stats: ConvertStats,
    pub output_path: PathBuf,
    /// False for dry runs.
    pub written: bool,
}

/// Transform every row, logging diagnostics as they come up.
///
/// Stops at the first row that fails to decode; row-level skips never stop it.
pub fn convert_rows<I>(
    converter: &Converter<'_>,
    rows: I,
    progress: Option<&dyn ConvertProgress>,
) -> Result<(Vec<MoveRecord>, ConvertStats), ConvertError>
where
    I: IntoIterator<Item = Result<Row, ConvertError>>,
{
    let mut moves = Vec::new();
    let mut stats = ConvertStats::default();

    for (i, row) in rows.into_iter().enumerate() {
        let row = row?;
        let outcome = converter.transform(&row);

        for message in outcome.diagnostics() {
            log::warn!("{}", message);
        }
        stats.record(&outcome);

        if let Some(p) = progress {
            p.on_row(i + 1, &outcome);
        }

        if let RowOutcome::Emit { record, .. } = outcome {
            moves.push(record);
        }
    }

    Ok((moves, stats))
}

/// Write moves as a pretty-printed JSON array, replacing any existing file.
///
/// Non-ASCII text (move and roster names) is written as-is, not escaped.
pub fn write_moves(path: &Path, moves: &[MoveRecord]) -> Result<(), ConvertError> {
    let write_err = |e| ConvertError::Write {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, moves).map_err(|e| ConvertError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Read a moves JSON file written by [`write_moves`].
pub fn load_moves(path: &Path) -> Result<Vec<MoveRecord>, ConvertError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConvertError::io(path.display().to_string(), e))?;
    let moves: Vec<MoveRecord> =
        serde_json::from_str(&contents).map_err(|e| ConvertError::Moves {
            path: path.display().to_string(),
            source: e,
        })?;
    log::debug!("Loaded {} moves from {}", moves.len(), path.display());
    Ok(moves)
}

/// Run a full conversion.
///
/// Both inputs are read completely before anything is written, so a failure
/// to load either one leaves the output path untouched.
pub fn convert(
    options: &ConvertOptions,
    progress: Option<&dyn ConvertProgress>,
) -> Result<ConvertReport, ConvertError> {
    if let Some(p) = progress {
        p.on_phase(&format!("Loading roster from {}", options.roster_path.display()));
    }
    let roster = load_roster(&options.roster_path)?;
    if roster.is_empty() {
        log::warn!(
            "{} has no entries; every target will be unresolved",
            options.roster_path.display()
        );
    }

    if let Some(p) = progress {
        p.on_phase(&format!("Reading moves from {}", options.csv_path.display()));
    }
    let rows = RowReader::open(&options.csv_path)?;
    if !rows.has_column(&options.columns.name) {
        log::warn!(
            "{} has no '{}' column; every row will be treated as blank (columns: {})",
            options.csv_path.display(),
            options.columns.name,
            rows.headers().collect::<Vec<_>>().join(", ")
        );
    }

    let converter = Converter::new(&roster, &options.columns);
    let (moves, stats) = convert_rows(&converter, rows, progress)?;

    let written = if options.dry_run {
        false
    } else {
        write_moves(&options.output_path, &moves)?;
        true
    };

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Converted {} of {} rows",
            stats.moves_emitted, stats.rows_read
        ));
    }

    Ok(ConvertReport {
        moves,
        stats,
        output_path: options.output_path.clone(),
        written,
    })
}
