/// Command modules for the `railcheck` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input content and the output format, and returns
/// `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod check;
pub mod inspect;
