use thiserror::Error;

/// Errors that abort a conversion run.
///
/// Row-level problems (unknown labels, bad power values, unresolved targets)
/// are not errors; they are reported as [`SkipReason`](crate::SkipReason)s and
/// the run continues.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Roster parse error in {path}: {source}")]
    Roster {
        path: String,
        source: serde_json::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize moves for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },

    #[error("Moves parse error in {path}: {source}")]
    Moves {
        path: String,
        source: serde_json::Error,
    },

    #[error("Config parse error in {path}: {source}")]
    Config {
        path: String,
        source: toml::de::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
