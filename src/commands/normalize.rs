//! `recall normalize` - print the normalized form of a query
//!
//! Arguments are joined into one query; without arguments each non-empty
//! stdin line is normalized separately.

use std::io::{self, BufRead, Write};

use recall_core::error::Result;
use recall_core::text::Normalizer;

use crate::cli::NormalizeArgs;
use crate::commands::dispatch::CommandContext;

/// Execute the normalize command
pub fn execute(_ctx: &CommandContext, args: &NormalizeArgs) -> Result<()> {
    let normalizer = Normalizer::new();
    let mut out = io::stdout().lock();

    if !args.text.is_empty() {
        writeln!(out, "{}", normalizer.normalize_query(&args.text.join(" ")))?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.is_empty() {
            writeln!(out, "{}", normalizer.normalize_query(&line))?;
        }
    }
    Ok(())
}
