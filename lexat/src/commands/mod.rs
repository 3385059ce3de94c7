//! Command modules for the lexat CLI.
//!
//! Each subcommand lives in its own file and follows the same pattern: an
//! `*Args` struct filled from the command line, a handler implementing
//! [`Command`], and a `run_*` convenience function.

pub mod common;

pub mod check;
pub mod dump;
pub mod init;

pub use check::{run_check, CheckArgs};
pub use dump::{run_dump, DumpArgs};
pub use init::{run_init, InitArgs};

use crate::error::Result;

/// Standard command trait implemented by every lexat command.
pub trait Command {
    /// The command name as typed on the command line.
    fn name(&self) -> &'static str;

    /// Execute the command.
    fn execute(&self) -> Result<()>;
}
