//! Lexat CLI - tokenize and check files with a configurable lexa scanner.
//!
//! This is the main entry point for the lexat CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_dump, run_init, CheckArgs, DumpArgs, InitArgs};
use config::Config;
use error::{LexatError, Result};

/// Lexat - a configurable tokenizer
///
/// Lexat scans files with a table-driven lexical scanner configured from
/// `lexat.toml`, printing the tokens or reporting lexical errors.
#[derive(Parser, Debug)]
#[command(name = "lexat")]
#[command(author = "Lexa Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check files with a configurable scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXAT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXAT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXAT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lexat CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each file
    ///
    /// Streams every input through the scanner and prints one token per
    /// line as `line:column kind value`.
    Dump(DumpCommand),

    /// Report lexical errors
    ///
    /// Scans every input and prints a diagnostic for each lexical error.
    /// Exits with a failure status if any error was found.
    Check(CheckCommand),

    /// Write a default lexat.toml
    Init(InitCommand),
}

/// Arguments for the dump subcommand.
#[derive(Parser, Debug)]
struct DumpCommand {
    /// Files to scan (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print tokens as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to check (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// File or directory to write (default: ./lexat.toml)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the lexat CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = match &cli.command {
        Commands::Init(_) => Config::default(),
        _ => load_config(cli.config.as_deref()).context("Failed to load configuration")?,
    };

    execute_command(cli.command, cli.verbose, &config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that `dump` output stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LexatError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    Config::load(config_path)
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: &Config) -> Result<()> {
    match command {
        Commands::Dump(args) => run_dump(
            DumpArgs {
                files: args.files,
                json: args.json,
                verbose,
            },
            config,
        ),
        Commands::Check(args) => run_check(
            CheckArgs {
                files: args.files,
                verbose,
            },
            config,
        ),
        Commands::Init(args) => run_init(InitArgs {
            verbose,
            force: args.force,
            path: args.path,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_dump() {
        let cli = Cli::parse_from(["lexat", "dump", "a.cfg", "b.cfg"]);
        if let Commands::Dump(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("a.cfg"), PathBuf::from("b.cfg")]);
            assert!(!args.json);
        } else {
            panic!("Expected Dump command");
        }
    }

    #[test]
    fn test_cli_parse_dump_json() {
        let cli = Cli::parse_from(["lexat", "dump", "--json", "a.cfg"]);
        if let Commands::Dump(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Dump command");
        }
    }

    #[test]
    fn test_cli_dump_requires_files() {
        assert!(Cli::try_parse_from(["lexat", "dump"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["lexat", "check", "-"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("-")]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_init_with_path_and_force() {
        let cli = Cli::parse_from(["lexat", "init", "--path", "/tmp/lexat.toml", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/lexat.toml")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "lexat",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/lexat.toml",
            "check",
            "x",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/lexat.toml")));
    }

    #[test]
    fn test_cli_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["lexat", "dump", "x", "-v"]);
        assert!(cli.verbose);
    }
}
