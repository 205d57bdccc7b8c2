//! Crate-wide error type
//!
//! User-input errors carry the exact message printed to the user; filesystem
//! errors wrap `std::io::Error` and keep its detail. Config-load failures are
//! not represented here: the resolver recovers from them locally.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Unknown subcommand word
    #[error("ERROR: invalid command '{0}'. See the help command for more information.")]
    InvalidCommand(String),

    /// A `--key=` override supplied without a value
    #[error("ERROR: incorrect argument formatting for '--{0}'")]
    MalformedOption(&'static str),

    /// Filesystem or process-spawn failure; fatal, no cleanup
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
