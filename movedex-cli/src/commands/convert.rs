use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movedex_import::{
    ConvertOptions, ConvertStats, LogProgress, PathOverrides, discover_config, load_config,
};

use crate::cli_types::ConvertArgs;
use crate::error::CliError;

/// Convert the move sheet and report what was written.
pub(crate) fn run_convert(
    root: &Path,
    config_path: Option<&Path>,
    args: ConvertArgs,
) -> Result<(), CliError> {
    if !root.is_dir() {
        return Err(CliError::root(root.display().to_string()));
    }

    let config = match config_path {
        Some(path) => Some(load_config(path)?),
        None => discover_config(root)?,
    };

    let options = ConvertOptions::resolve(
        root,
        config.as_ref(),
        PathOverrides {
            csv: args.csv,
            roster: args.roster,
            output: args.output,
        },
        args.dry_run,
    );

    let report = movedex_import::convert(&options, Some(&LogProgress))?;

    print_stats(&report.stats);

    // Shown at every log level.
    let line = summary_line(report.moves.len(), &report.output_path, report.written);
    println!("{}", line.if_supports_color(Stdout, |t| t.bold()));

    Ok(())
}

fn print_stats(stats: &ConvertStats) {
    log::info!("  Rows read:        {}", stats.rows_read);
    log::info!(
        "  Skipped:          {} status, {} without power, {} blank, {} not implemented",
        stats.skipped_status,
        stats.skipped_no_power,
        stats.skipped_blank,
        stats.skipped_not_implemented,
    );

    let warnings = stats.warnings();
    if warnings > 0 {
        log::info!(
            "  {}          {} unknown type, {} unknown category, {} bad power, {} unresolved targets",
            "Warnings:".if_supports_color(Stdout, |t| t.yellow()),
            stats.unknown_types,
            stats.unknown_categories,
            stats.invalid_power,
            stats.unresolved_targets,
        );
    }
}

/// Final line of a conversion: how many moves went where.
fn summary_line(count: usize, output: &Path, written: bool) -> String {
    if written {
        format!("Wrote {} moves to {}", count, output.display())
    } else {
        format!("[dry run] {} moves would be written to {}", count, output.display())
    }
}
