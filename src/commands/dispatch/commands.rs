//! Command implementations for all recall commands

use recall_core::error::Result;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{discover, index, keywords, normalize, rank};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Index(args) => index::execute(ctx, args),
            Commands::Discover(args) => discover::execute(ctx, args),
            Commands::Rank(args) => rank::execute(ctx, args),
            Commands::Normalize(args) => normalize::execute(ctx, args),
            Commands::Keywords(args) => keywords::execute(ctx, args),
        }
    }
}
