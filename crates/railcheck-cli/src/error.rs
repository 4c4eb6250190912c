/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `railcheck` binary.
/// Every variant is an input failure and maps to exit code **2** via
/// [`CliError::exit_code`]: the tool could not read the input, or the map
/// was malformed. A malformed map (including an unknown road symbol) never
/// yields a verdict — the process prints a diagnostic to stderr and no
/// YES/NO token at all.
///
/// Both verdicts are normal output: `YES` and `NO` exit 0.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `railcheck` CLI can produce.
///
/// Use [`CliError::exit_code`] for the process exit code and
/// [`CliError::message`] for the human-readable string printed to stderr.
#[derive(Debug)]
pub enum CliError {
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only; `None` for
        /// stdin where the exact size is unknown).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The map content could not be parsed.
    ///
    /// Carries the rendered [`railcheck_core::MapParseError`], including
    /// line/column detail for unknown road symbols.
    ParseFailed {
        /// A description of the parse failure.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// Always `2`: every `CliError` is an input failure. Verdicts are not
    /// errors and exit 0 through the normal path.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: input too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: input too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("error: malformed map: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
