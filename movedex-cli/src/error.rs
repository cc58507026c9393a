use thiserror::Error;

use movedex_import::ConvertError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Conversion failed (unreadable input, bad config, write failure)
    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// The requested move is not in the moves JSON
    #[error("No move named '{name}' in {path}")]
    UnknownMove { name: String, path: String },

    /// `--root` does not point at a directory
    #[error("Root is not a directory: {0}")]
    Root(String),
}

impl CliError {
    pub(crate) fn root(msg: impl Into<String>) -> Self {
        Self::Root(msg.into())
    }
}
