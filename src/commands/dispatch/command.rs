//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use recall_core::config::{DataPaths, RecallConfig};
use recall_core::error::Result;
use recall_core::lexicon::Lexicon;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub data_dir: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, data_dir: PathBuf, start: Instant) -> Self {
        Self {
            cli,
            data_dir,
            start,
        }
    }

    /// `config.toml` from the data directory, or defaults
    pub fn config(&self) -> Result<RecallConfig> {
        RecallConfig::load_or_default(&self.data_dir)
    }

    pub fn paths(&self, config: &RecallConfig) -> DataPaths {
        DataPaths::resolve(&self.data_dir, &config.files)
    }

    /// Configuration, resolved paths and the loaded lexicon
    pub fn load(&self) -> Result<(RecallConfig, DataPaths, Lexicon)> {
        let config = self.config()?;
        let paths = self.paths(&config);
        let lexicon = Lexicon::load(&config, &paths)?;
        Ok((config, paths, lexicon))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("recall {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Bilingual search over past conversation transcripts.");
        println!();
        println!("Run `recall --help` for usage information.");
        Ok(())
    }
}
