//! File and stdin reading with size enforcement and UTF-8 validation.
//!
//! This module is the single entry point for all input I/O in the
//! `railcheck` binary. `railcheck-core` never touches the filesystem; all
//! reading happens here.
//!
//! Key behaviours:
//! - Disk files: size checked via `std::fs::metadata` before any read.
//! - Stdin: buffered with a `Read::take` cap so allocation is bounded.
//! - UTF-8 validation via `String::from_utf8` with byte-offset reporting.
//! - All I/O errors are converted to [`CliError`] variants (exit code 2).
use std::io::Read as _;
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// For disk files the file length is checked against `max_size` via
/// `std::fs::metadata` before any bytes are read. For stdin a capped reader
/// (`Read::take`) is used so that the allocation is bounded.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for:
/// - file not found
/// - permission denied
/// - file or stdin stream exceeds `max_size`
/// - any other I/O error
/// - invalid UTF-8 (includes byte offset of the first bad sequence)
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

// ---------------------------------------------------------------------------
// Disk file reading
// ---------------------------------------------------------------------------

/// Reads a disk file, enforcing the size limit and UTF-8 requirement.
fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    // Size check via metadata: no allocation until the length is known to
    // be within bounds.
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` arising from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    if e.kind() == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if e.kind() == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stdin reading
// ---------------------------------------------------------------------------

/// Reads the entire stdin stream, capped at `max_size` bytes.
///
/// If the stream produces exactly `max_size` bytes, one more byte is read
/// from the uncapped handle to distinguish "exactly at the limit" from
/// "over the limit".
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let handle = stdin.lock();

    let mut limited = handle.take(max_size);
    let mut buf: Vec<u8> = Vec::new();

    limited
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let mut handle = limited.into_inner();
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    bytes_to_string(buf, "-")
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

/// Converts a byte buffer to a `String`, returning a [`CliError`] with the
/// byte offset of the first invalid sequence on failure.
fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
