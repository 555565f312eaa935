//! Error types for FOLIO.

use std::io;

/// Errors produced by the FOLIO crates.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A registered command failed while executing.
    #[error("command error: {0}")]
    Command(String),

    /// The typed name does not match any registered command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The resume content payload is missing or malformed.
    #[error("content error: {0}")]
    Content(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
