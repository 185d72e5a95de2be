//! Argument parsing with the tools' exit-code policy.
//!
//! `--help` and `--version` print to stdout and exit 0. Every other parse
//! failure (missing or malformed values, conflicting or unknown flags)
//! prints the diagnostic and usage to stderr and exits with
//! [`USAGE_EXIT_CODE`], instead of clap's default of 2.

use std::fmt::Display;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Exit status for usage errors.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Parse the process arguments, exiting on help, version or usage errors.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) => exit_with(err),
    }
}

/// Parse an explicit argument list with the same policy as [`parse_args`],
/// returning the exit code instead of exiting.
pub fn try_parse_from<P, I, T>(args: I) -> Result<P, i32>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    P::try_parse_from(args).map_err(|err| exit_code(&err))
}

/// Report a validation failure found after parsing and exit.
pub fn usage_error<P: CommandFactory>(message: impl Display) -> ! {
    let err = P::command().error(ErrorKind::ValueValidation, message);
    exit_with(err)
}

/// Exit status for a clap error under this policy.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USAGE_EXIT_CODE,
    }
}

fn exit_with(err: clap::Error) -> ! {
    // Printing only fails if the stream is closed; the exit code still
    // reports the outcome.
    let _ = err.print();
    std::process::exit(exit_code(&err))
}
