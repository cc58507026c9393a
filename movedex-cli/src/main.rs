//! movedex CLI
//!
//! Converts the move spreadsheet export into the JSON the app loads.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::{Level, LevelFilter};

use cli_types::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));

    let result = match cli.command {
        Commands::Convert(args) => {
            commands::convert::run_convert(&root, cli.config.as_deref(), args)
        }
        Commands::Damage(args) => {
            commands::damage::run_damage(&root, cli.config.as_deref(), args)
        }
        Commands::Tables => {
            commands::tables::run_tables();
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Set up `env_logger` on stdout. `RUST_LOG` overrides the flag-derived level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            Level::Error => writeln!(buf, "error: {}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        });
    }

    builder.init();
}
