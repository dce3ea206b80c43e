//! `recall rank` - score and render pre-filtered index rows
//!
//! Candidate rows arrive on stdin. Ranked sessions go to stdout; the kept
//! short session ids go to stderr as one comma-separated line.

use std::io;

use recall_core::error::Result;
use recall_core::extract::BilingualExtractor;
use recall_core::lexicon::Lexicon;
use recall_core::rank::{read_rows, Query, RankFormatter, RankOptions};
use recall_core::text::Normalizer;

use crate::cli::{OutputFormat, RankArgs};
use crate::commands::dispatch::{trace_command, CommandContext};

/// Execute the rank command
pub fn execute(ctx: &CommandContext, args: &RankArgs) -> Result<()> {
    let config = ctx.config()?;

    // Segmentation is only needed for topic glosses
    let lexicon = if args.topics {
        Some(Lexicon::load(&config, &ctx.paths(&config))?)
    } else {
        None
    };
    let bigram = BilingualExtractor::bigram();
    let extractor = lexicon.as_ref().map_or(&bigram, |l| &l.extractor);

    let normalizer = Normalizer::new();
    let query = match &args.normalized {
        Some(normalized) => Query::with_normalized(&args.query, normalized, args.mode, &normalizer)?,
        None => Query::parse(&args.query, args.mode, &normalizer)?,
    };

    let rows = read_rows(io::stdin().lock())?;
    trace_command!(ctx.cli, ctx.start, "read_rows");

    let options = RankOptions {
        sessions_limit: args.sessions,
        messages_limit: args.messages,
        context: args.context,
        topics: args.topics,
        exclude_session: args.exclude_session.clone(),
    };
    let result = RankFormatter::new(extractor, &config.rank).rank(rows, &query, &options);
    trace_command!(ctx.cli, ctx.start, "rank");

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print!("{}", result.render_text()),
    }
    if result.candidate_sessions > 0 {
        eprintln!("{}", result.short_ids().join(","));
    }
    Ok(())
}
