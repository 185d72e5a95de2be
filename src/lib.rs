//! tally - small archiving and text statistics tools.
//!
//! The binaries share the plumbing in this crate:
//!
//! - [`cli`] parses arguments with the tools' exit-code policy
//! - [`logging`] installs the stderr tracing subscriber

pub mod cli;
pub mod logging;
