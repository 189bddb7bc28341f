//! Error types for the file-level driver
//!
//! The lexer, parser and generator never fail; every error a compilation can
//! produce comes from reading or writing files and is represented here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced while compiling a file on disk
#[derive(Debug, Error)]
pub enum DriverError {
    /// The input file does not exist
    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    /// The input exists but could not be read (permissions, invalid UTF-8, ...)
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated code could not be written
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output path resolves to the input file itself
    #[error("refusing to overwrite input file '{}'", path.display())]
    OutputIsInput { path: PathBuf },
}

impl DriverError {
    /// Classify a read failure, keeping "not found" distinct.
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DriverError::NotFound { path }
        } else {
            DriverError::Read { path, source }
        }
    }
}
