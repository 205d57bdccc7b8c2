pub mod cli;
pub mod config;
pub mod editor;
pub mod entry;
pub mod error;
pub mod slot;

pub use cli::{Cli, Command};
pub use config::{Config, Defaults, Overrides};
pub use error::{Error, Result};
pub use slot::NoteSlot;
