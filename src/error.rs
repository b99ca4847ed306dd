//! Errors with an identity beyond their underlying I/O cause

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No MPD configuration file exists at any of the known locations
    #[error("no MPD configuration file found")]
    ConfigNotFound,

    /// A configuration file was read but carries no `db_file` directive
    #[error("could not find 'db_file' in configuration file {0:?}")]
    DbFileNotConfigured(PathBuf),

    /// Structural violation in the database dump (e.g. unbalanced directory
    /// markers); continuing would produce wrong track paths
    #[error("corrupted database: {0}")]
    CorruptedDatabase(String),

    /// An external tool exited with an unexpected status
    #[error("'{tool}' failed: {status}")]
    ToolFailed { tool: String, status: ExitStatus },
}
