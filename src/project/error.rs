//! Error types for source loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a source file could not be loaded.
///
/// The `Display` form is the reason string reported to callers of
/// [`read_source_file`](super::read_source_file).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resolved path cannot be represented as UTF-8 text.
    #[error("The path \"{}\" is not valid UTF-8", .path.display())]
    InvalidPath { path: PathBuf },

    /// Nothing exists at the resolved path.
    #[error("File \"{}\" does not exists", .path.display())]
    NotFound { path: PathBuf },

    /// The entry exists but is a directory or another non-regular node.
    #[error("The path \"{}\" does not point to a file", .path.display())]
    NotAFile { path: PathBuf },

    /// The permission bits or access(2) deny reading.
    #[error("File \"{}\" is not readable by the current user", .path.display())]
    NotReadable { path: PathBuf },

    /// The final read failed after all checks passed.
    #[error("File \"{}\" could not be read: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The working directory needed to resolve a relative path is unavailable.
    #[error("Could not resolve \"{}\" against the working directory: {}", .path.display(), .source)]
    WorkingDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    pub fn not_readable(path: impl Into<PathBuf>) -> Self {
        Self::NotReadable { path: path.into() }
    }

    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn working_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WorkingDirectory {
            path: path.into(),
            source,
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::InvalidPath { path }
            | Self::NotFound { path }
            | Self::NotAFile { path }
            | Self::NotReadable { path }
            | Self::Read { path, .. }
            | Self::WorkingDirectory { path, .. } => path,
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPath { .. } => "invalid-path",
            Self::NotFound { .. } => "not-found",
            Self::NotAFile { .. } => "not-a-file",
            Self::NotReadable { .. } => "not-readable",
            Self::Read { .. } => "read",
            Self::WorkingDirectory { .. } => "working-directory",
        }
    }
}
