//! Loading source files from disk.
//!
//! [`read_source_file`] checks a path in a fixed order and stops at the
//! first problem:
//!
//! 1. resolve to an absolute, normalized, UTF-8 path
//! 2. something must exist there
//! 3. it must be a regular file
//! 4. the owner-read permission bit must be set
//! 5. `access(2)` must grant read and write
//! 6. read the whole file as UTF-8 text
//!
//! Checks 4 and 5 report the same reason. The file may still change between
//! the checks and the read; that race is not guarded against.

use std::env;
#[cfg(unix)]
use std::ffi::CString;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Component, Path, PathBuf};

use super::error::LoadError;
use super::source_file::SourceFile;
use crate::base::Outcome;

#[cfg(unix)]
const OWNER_READ: u32 = 0o400;

/// Read the file at `file_path` into a [`SourceFile`].
///
/// Every failure comes back as [`Outcome::Failure`] carrying the reason text.
pub fn read_source_file(file_path: impl AsRef<Path>) -> Outcome<SourceFile, String> {
    into_outcome(load_source_file(file_path))
}

fn into_outcome(result: Result<SourceFile, LoadError>) -> Outcome<SourceFile, String> {
    Outcome::from(result).map_failure(|err| err.to_string())
}

/// Typed variant of [`read_source_file`].
pub fn load_source_file(file_path: impl AsRef<Path>) -> Result<SourceFile, LoadError> {
    load_source_file_from(file_path.as_ref(), env::current_dir)
}

fn load_source_file_from(
    file_path: &Path,
    current_dir: impl FnOnce() -> io::Result<PathBuf>,
) -> Result<SourceFile, LoadError> {
    let resolved = resolve_path_from(file_path, current_dir)
        .map_err(|source| LoadError::working_directory(file_path, source))?;

    match check_and_read(&resolved) {
        Ok((label, contents)) => {
            tracing::debug!("Loaded source file {} ({} bytes)", label, contents.len());
            Ok(SourceFile::new(label, contents))
        }
        Err(err) => {
            tracing::debug!("Rejected source file {}: {}", resolved.display(), err.kind());
            Err(err)
        }
    }
}

fn check_and_read(resolved: &Path) -> Result<(String, String), LoadError> {
    let label = resolved
        .to_str()
        .ok_or_else(|| LoadError::invalid_path(resolved))?
        .to_owned();

    // any stat error counts as missing
    let metadata = fs::metadata(resolved).map_err(|_| LoadError::not_found(resolved))?;

    if !metadata.is_file() {
        return Err(LoadError::not_a_file(resolved));
    }

    if !owner_can_read(&metadata) {
        return Err(LoadError::not_readable(resolved));
    }

    if !access_read_write(resolved) {
        return Err(LoadError::not_readable(resolved));
    }

    let contents = decode_contents(resolved, fs::read(resolved))?;
    Ok((label, contents))
}

fn decode_contents(resolved: &Path, bytes: io::Result<Vec<u8>>) -> Result<String, LoadError> {
    let bytes = bytes.map_err(|source| LoadError::read(resolved, source))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(unix)]
fn owner_can_read(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & OWNER_READ != 0
}

#[cfg(not(unix))]
fn owner_can_read(_metadata: &Metadata) -> bool {
    true
}

/// `access(2)` with `R_OK | W_OK`; checks permissions without opening the file.
#[cfg(unix)]
fn access_read_write(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;

    let Ok(path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `path` is a NUL-terminated string that outlives the call.
    let result = unsafe { libc::access(path.as_ptr(), libc::R_OK | libc::W_OK) };
    result == 0
}

#[cfg(not(unix))]
fn access_read_write(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| !metadata.permissions().readonly())
        .unwrap_or(false)
}

/// Make `path` absolute against the working directory and fold away `.`
/// and `..` components. Symlinks are left alone.
pub fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    resolve_path_from(path, env::current_dir)
}

fn resolve_path_from(
    path: &Path,
    current_dir: impl FnOnce() -> io::Result<PathBuf>,
) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir()?.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    tracing::trace!("Resolved {} to {}", path.display(), resolved.display());
    Ok(resolved)
}
