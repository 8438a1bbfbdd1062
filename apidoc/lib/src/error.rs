//! Error types for the apidoc library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a rendered document to disk.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output file's parent directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A verb that is not one of the supported HTTP methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method: {0}")]
pub struct ParseMethodError(pub String);
