//! Init command implementation.
//!
//! Writes a `lexat.toml` holding the default scanner configuration, ready
//! to be edited.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commands::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{LexatError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// File or directory to write to (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new InitCommand.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// The file the configuration is written to.
    ///
    /// A directory argument gets `lexat.toml` appended.
    pub fn target_path(&self) -> PathBuf {
        match &self.args.path {
            Some(path) if path.is_dir() => path.join(CONFIG_FILE_NAME),
            Some(path) => path.clone(),
            None => PathBuf::from(CONFIG_FILE_NAME),
        }
    }

    fn create_config_file(&self, path: &Path) -> Result<()> {
        if path.exists() && !self.args.force {
            return Err(LexatError::AlreadyExists(path.to_path_buf()));
        }

        Config::default().save_to_path(path)?;

        if self.args.verbose {
            eprintln!("📄 Created: {}", path.display());
        }
        Ok(())
    }
}

impl Command for InitCommand {
    fn name(&self) -> &'static str {
        "init"
    }

    fn execute(&self) -> Result<()> {
        self.create_config_file(&self.target_path())
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    let command = InitCommand::new(args);
    debug!(command = command.name(), target = %command.target_path().display(), "running");
    command.execute()
}
