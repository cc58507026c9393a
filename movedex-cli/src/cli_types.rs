//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use movedex_core::MoveType;

#[derive(Parser)]
#[command(name = "movedex")]
#[command(about = "Convert the move spreadsheet into the app's moves.json", long_about = None)]
pub(crate) struct Cli {
    /// Project root that default and config-file paths are relative to (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/movedex.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert the move sheet CSV into moves JSON
    Convert(ConvertArgs),

    /// List the type and category label translation tables
    Tables,

    /// Damage rolls and KO odds for one move from the moves JSON
    Damage(DamageArgs),
}

#[derive(Args, Clone)]
pub(crate) struct ConvertArgs {
    /// Move sheet CSV exported from the spreadsheet
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Roster JSON with `name` and `id` for each entity
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Where to write the moves JSON (overwritten)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Convert and report without writing the output file
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[derive(Args, Clone)]
pub(crate) struct DamageArgs {
    /// Move name as written in the moves JSON
    pub name: String,

    /// Moves JSON to read (defaults to the convert output path)
    #[arg(long)]
    pub moves: Option<PathBuf>,

    /// Attacker level
    #[arg(long, default_value_t = 50)]
    pub level: u32,

    /// Attacker's Attack or Sp. Atk, matching the move category
    #[arg(long)]
    pub attack: u32,

    /// Defender's Defense or Sp. Def, matching the move category
    #[arg(long)]
    pub defense: u32,

    /// Defender's max HP
    #[arg(long)]
    pub hp: u32,

    /// Attacker type codes, comma separated (for STAB)
    #[arg(long = "attacker", value_delimiter = ',')]
    pub attacker_types: Vec<MoveType>,

    /// Defender type codes, comma separated
    #[arg(long = "defender", value_delimiter = ',')]
    pub defender_types: Vec<MoveType>,

    /// Also report the KO chance within this many hits
    #[arg(long, default_value_t = 2)]
    pub hits: u32,
}
