use std::process;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use n::{config, Cli, Command, Config, Defaults, Error, Overrides};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run() -> n::Result<()> {
    let cli = parse_cli()?;
    let overrides = Overrides::from_cli(&cli)?;
    let config: Config = config::resolve(&Defaults::default(), &overrides);

    match cli.command {
        Command::New { title } => cmd::new::run(&config, title),
        Command::Ref { link, title } => cmd::reference::run(&config, link, title),
        Command::Version => {
            println!("n v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Parse the command line, remapping clap's unknown-subcommand error onto
/// the crate's own message. Every other clap outcome (help, version, usage
/// errors) keeps clap's rendering and exit code.
fn parse_cli() -> n::Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(err) => {
            if err.kind() == ErrorKind::InvalidSubcommand {
                if let Some(ContextValue::String(word)) = err.get(ContextKind::InvalidSubcommand) {
                    return Err(Error::InvalidCommand(word.clone()));
                }
            }
            err.exit()
        }
    }
}

mod cmd {
    pub mod new;
    pub mod reference;
}
