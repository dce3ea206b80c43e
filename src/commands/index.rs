//! `recall index` - build the normalized index from raw records
//!
//! - `recall index` streams stdin to stdout
//! - `recall index INPUT` reads a file and writes stdout
//! - `recall index INPUT OUTPUT` replaces OUTPUT atomically; an interrupted
//!   build leaves the previous OUTPUT in place

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use recall_core::error::{RecallError, Result};
use recall_core::fsutil::AtomicFile;
use recall_core::index::{BuildStats, IndexBuilder};
use recall_core::text::Normalizer;

use crate::cli::{IndexArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};

/// Execute the index command
pub fn execute(ctx: &CommandContext, args: &IndexArgs) -> Result<()> {
    let normalizer = Normalizer::new();
    let builder = match interrupt_flag(args) {
        Some(flag) => IndexBuilder::new(&normalizer).with_interrupt(flag),
        None => IndexBuilder::new(&normalizer),
    };

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(open_input(path)?),
        None => Box::new(io::stdin().lock()),
    };

    let stats = match &args.output {
        Some(path) => {
            let mut out = AtomicFile::create(path)?;
            let stats = builder.build(input, &mut out)?;
            out.commit()?;
            stats
        }
        None => {
            let mut out = io::stdout().lock();
            builder.build(input, &mut out)?
        }
    };
    trace_command!(ctx.cli, ctx.start, "index_build");

    report(ctx, args, stats)
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        return Err(RecallError::not_found("input file", path.display()));
    }
    let file =
        File::open(path).map_err(|e| RecallError::io_operation("open", path.display(), e))?;
    Ok(BufReader::new(file))
}

/// Ctrl-C handling for file-to-file builds, where the temp file must be
/// discarded; streaming builds keep the default SIGINT behavior so an idle
/// stdin can still be interrupted.
fn interrupt_flag(args: &IndexArgs) -> Option<Arc<AtomicBool>> {
    args.output.as_ref()?;
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        tracing::debug!(error = %e, "ctrl-c handler not installed");
    }
    Some(flag)
}

/// Summaries go to stderr when the index itself is on stdout
fn report(ctx: &CommandContext, args: &IndexArgs, stats: BuildStats) -> Result<()> {
    if ctx.cli.quiet {
        return Ok(());
    }
    match (ctx.cli.format, &args.output) {
        (OutputFormat::Json, Some(path)) => {
            let output = serde_json::json!({
                "status": "ok",
                "index": path.display().to_string(),
                "written": stats.written,
                "skipped": stats.skipped,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (OutputFormat::Human, Some(path)) => {
            println!("Indexed {} messages into {}", stats.written, path.display());
            if ctx.cli.verbose && stats.skipped > 0 {
                println!("  {} malformed lines skipped", stats.skipped);
            }
        }
        (_, None) => {
            if ctx.cli.verbose {
                let mut err = io::stderr().lock();
                writeln!(
                    err,
                    "Indexed {} messages ({} malformed lines skipped)",
                    stats.written, stats.skipped
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streaming_build_keeps_default_interrupt() {
        let args = IndexArgs {
            input: None,
            output: None,
        };
        assert!(interrupt_flag(&args).is_none());

        let args = IndexArgs {
            input: Some("raw.tsv".into()),
            output: None,
        };
        assert!(interrupt_flag(&args).is_none());
    }
}
