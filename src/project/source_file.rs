use std::path::Path;

use serde::{Deserialize, Serialize};

/// A loaded source: where it came from and its full text.
///
/// Immutable once built. Files read from disk carry their resolved absolute
/// path, which the loader guarantees is valid UTF-8; in-memory sources may
/// use any label (e.g. `repl://1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceFile {
    file_path: String,
    file_contents: String,
}

impl SourceFile {
    pub fn new(file_path: impl Into<String>, file_contents: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            file_contents: file_contents.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// The path as a filesystem path.
    pub fn path(&self) -> &Path {
        Path::new(&self.file_path)
    }

    pub fn file_contents(&self) -> &str {
        &self.file_contents
    }

    pub fn is_empty(&self) -> bool {
        self.file_contents.is_empty()
    }

    /// Split into `(file_path, file_contents)`.
    pub fn into_parts(self) -> (String, String) {
        (self.file_path, self.file_contents)
    }
}
