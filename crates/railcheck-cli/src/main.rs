//! The `railcheck` binary: reads a railroad map, checks it for optimality.
//!
//! All input reading goes through [`io::read_input`]; all failure paths go
//! through [`error::CliError`], which maps every input failure to exit code
//! 2 with a diagnostic on stderr and nothing on stdout.
use clap::Parser as _;

mod cli;
mod cmd;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed CLI to its subcommand implementation.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Check { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::check::run(&content, &cli.format)
        }
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, &cli.format)
        }
    }
}
