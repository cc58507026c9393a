//! Conversion progress reporting.

use crate::transform::RowOutcome;

/// Receives updates while a move sheet is converted.
///
/// Rows are streamed, so there is no total to report against.
pub trait ConvertProgress {
    /// Called once per sheet row (1-based) with what the row turned into.
    fn on_row(&self, row: usize, outcome: &RowOutcome);

    /// Called when a phase starts (e.g., "Loading roster").
    fn on_phase(&self, message: &str);

    fn on_complete(&self, message: &str);
}

/// Discards all updates.
pub struct SilentProgress;

impl ConvertProgress for SilentProgress {
    fn on_row(&self, _row: usize, _outcome: &RowOutcome) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// Logs phases at info and a per-row trace at debug.
pub struct LogProgress;

impl ConvertProgress for LogProgress {
    fn on_row(&self, row: usize, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Emit { record, unresolved } => log::debug!(
                "  [row {}] {} ({}, {}, power {}, {} targets{})",
                row,
                record.name,
                record.move_type,
                record.category,
                record.power,
                record.targets.len(),
                if unresolved.is_empty() {
                    String::new()
                } else {
                    format!(", {} unresolved", unresolved.len())
                },
            ),
            RowOutcome::Skip(reason) => log::debug!("  [row {}] skipped: {}", row, reason),
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
