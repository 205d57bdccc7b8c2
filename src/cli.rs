use clap::{ArgAction, Parser, Subcommand};

/// n - a sequentially-numbered note-taking CLI
///
/// Every note lives in its own numbered directory under the notes root:
///
/// ```bash
/// n new                        # note 1/ with the default title
/// n new "Hello, world!"        # note 2/ titled 'Hello, world!'
/// n text "Same thing"          # 'text' is an alias for 'new'
/// n ref https://example.com    # reference entry pointing at a link
/// n r ~/paper.pdf "Reading"    # 'r' is an alias for 'ref'
/// ```
///
/// Configuration comes from `~/.config/n/config.yml` (keys: `config-file`,
/// `editor`, `notes-dir`) and can be overridden per invocation:
///
/// ```bash
/// n new --editor=vim --notes-dir=~/scratch
/// n version --config-file=~/Documents/another-n-config.yml
/// ```
#[derive(Parser, Debug)]
#[command(name = "n")]
#[command(version = concat!("v", env!("CARGO_PKG_VERSION")))]
#[command(disable_version_flag = true)]
#[command(about = "A sequentially-numbered note-taking CLI")]
pub struct Cli {
    /// Print version information
    #[arg(short = 'V', short_alias = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Location of the configuration file for this invocation
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<String>,

    /// Editor command used to open new notes
    #[arg(long, global = true, value_name = "EDITOR")]
    pub editor: Option<String>,

    /// Root directory the numbered note directories live under
    #[arg(long, global = true, value_name = "DIR")]
    pub notes_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new text note entry
    #[command(alias = "text")]
    New {
        /// Title for the note (a default placeholder is used if omitted)
        title: Option<String>,
    },

    /// Create a reference note entry pointing at a link or local file
    #[command(alias = "r")]
    Ref {
        /// Link or local file the entry references
        link: String,

        /// Title for the note (a default placeholder is used if omitted)
        title: Option<String>,
    },

    /// Print the current version
    Version,
}
