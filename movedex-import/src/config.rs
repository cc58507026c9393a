//! Optional `movedex.toml` config file and path resolution.
//!
//! Priority for each path: command-line flag > config file > built-in default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::columns::ColumnLabels;
use crate::convert::ConvertOptions;
use crate::error::ConvertError;

/// Config file looked up in the project root when none is given explicitly.
pub const CONFIG_FILE_NAME: &str = "movedex.toml";

pub const DEFAULT_CSV_PATH: &str = "2期生男子種族値 - 技一覧.csv";
pub const DEFAULT_ROSTER_PATH: &str = "src/data/pokemons.json";
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/moves.json";

/// TOML config file format.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub paths: PathsConfig,
    pub columns: ColumnLabels,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    pub csv: Option<PathBuf>,
    pub roster: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConvertConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// Load a config file that must exist.
pub fn load_config(path: &Path) -> Result<ConvertConfig, ConvertError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConvertError::io(path.display().to_string(), e))?;
    ConvertConfig::from_toml_str(&contents).map_err(|e| ConvertError::Config {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load `<root>/movedex.toml` if it exists.
pub fn discover_config(root: &Path) -> Result<Option<ConvertConfig>, ConvertError> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }
    log::debug!("Using config file {}", path.display());
    load_config(&path).map(Some)
}

/// Path overrides given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub csv: Option<PathBuf>,
    pub roster: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConvertOptions {
    /// Combine command-line overrides, the config file and defaults.
    ///
    /// Command-line paths are used as given. Config and default paths are
    /// relative to `root`.
    pub fn resolve(
        root: &Path,
        config: Option<&ConvertConfig>,
        overrides: PathOverrides,
        dry_run: bool,
    ) -> Self {
        let paths = config.map(|c| &c.paths);
        let pick = |flag: Option<PathBuf>, configured: Option<&PathBuf>, default: &str| {
            flag.unwrap_or_else(|| root.join(configured.map_or(Path::new(default), |p| p.as_path())))
        };

        Self {
            csv_path: pick(
                overrides.csv,
                paths.and_then(|p| p.csv.as_ref()),
                DEFAULT_CSV_PATH,
            ),
            roster_path: pick(
                overrides.roster,
                paths.and_then(|p| p.roster.as_ref()),
                DEFAULT_ROSTER_PATH,
            ),
            output_path: pick(
                overrides.output,
                paths.and_then(|p| p.output.as_ref()),
                DEFAULT_OUTPUT_PATH,
            ),
            columns: config.map(|c| c.columns.clone()).unwrap_or_default(),
            dry_run,
        }
    }
}
