//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. Map input defaults to stdin, matching the format's
/// origin as a stdin-fed checker.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints the bare verdict token (`check`) or aligned key/value
/// lines (`inspect`) to stdout. `Json` prints a single JSON object instead.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `railcheck` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Check whether a railroad map is optimal; prints YES or NO.
    Check {
        /// Path to a .rail map file, or `-` for stdin (default).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathOrStdin,
    },

    /// Print summary statistics for a railroad map.
    Inspect {
        /// Path to a .rail map file, or `-` for stdin (default).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `railcheck` binary.
///
/// Global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "railcheck",
    version,
    about = "Railroad-map optimality checker",
    long_about = "Checks whether a railroad map over N cities is optimal.\n\
                  Each pair of cities is joined by one road, wide-gauge (B)\n\
                  or narrow-gauge (R); the map is optimal when the directed\n\
                  route graph the gauges induce contains no cycle."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `RAILCHECK_MAX_FILE_SIZE` environment
    /// variable. The CLI flag takes precedence. Default: 67108864 (64 MB).
    #[arg(
        long,
        global = true,
        env = "RAILCHECK_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,
}

#[cfg(test)]
mod tests;
