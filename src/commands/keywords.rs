//! `recall keywords` - print search keywords for a piece of text

use std::io::{self, Read};

use recall_core::bail_usage;
use recall_core::error::Result;

use crate::cli::{KeywordsArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};

/// Execute the keywords command
pub fn execute(ctx: &CommandContext, args: &KeywordsArgs) -> Result<()> {
    let text = if args.text.is_empty() || args.text == ["-"] {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        args.text.join(" ")
    };
    if text.is_empty() {
        bail_usage!("no text given; pass TEXT or pipe it on stdin");
    }

    let (_, _, lexicon) = ctx.load()?;
    trace_command!(ctx.cli, ctx.start, "load_lexicon");

    let keywords = match args.max {
        Some(max) => lexicon.extractor.extract(&text, None, max),
        None => lexicon.keywords(&text, None),
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = keywords
                .iter()
                .map(|kw| serde_json::json!({ "keyword": kw, "class": lexicon.classify(kw) }))
                .collect();
            println!("{}", serde_json::to_string(&output)?);
        }
        OutputFormat::Human => {
            if !keywords.is_empty() {
                println!("{}", keywords.join(" "));
            }
        }
    }
    Ok(())
}
