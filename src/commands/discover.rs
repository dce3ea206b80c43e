//! `recall discover` - propose new custom keywords from the index
//!
//! Dry run prints the ranked candidates; `--write` merges the best new ones
//! into the custom keyword file.

use recall_core::config::RecallConfig;
use recall_core::discovery::{Discovery, DiscoveryReport};
use recall_core::error::Result;
use recall_core::index::MessageTexts;
use recall_core::keywords::KeywordFile;
use recall_core::lexicon::{BackgroundTables, Lexicon};

use crate::cli::{DiscoverArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};

const RULE_WIDTH: usize = 60;
const SEED_PREVIEW: usize = 10;

/// Execute the discover command
pub fn execute(ctx: &CommandContext, args: &DiscoverArgs) -> Result<()> {
    let (config, paths, lexicon) = ctx.load()?;
    let index_path = args.index.clone().unwrap_or_else(|| paths.index.clone());

    let mut texts = MessageTexts::open(&index_path)?;
    let backgrounds = BackgroundTables::load(&paths);
    trace_command!(ctx.cli, ctx.start, "load_references");

    let discovery = Discovery::new(
        &lexicon.extractor,
        &config.discovery.seeds,
        config.discovery.min_cooccurrence,
    );
    let mut report = discovery.run(texts.by_ref(), &backgrounds.english, &backgrounds.chinese);
    report.skipped = texts.skipped();
    trace_command!(ctx.cli, ctx.start, "discover");

    let selection = report.selection(&lexicon.custom, config.discovery.show, config.discovery.top_k);
    let written = if args.write {
        let mut file = lexicon.custom.clone();
        file.merge(selection.iter().cloned());
        file.save(&paths.custom_keywords)?;
        tracing::info!(
            path = %paths.custom_keywords.display(),
            added = selection.len(),
            total = file.len(),
            "wrote custom keywords"
        );
        Some(file.len())
    } else {
        None
    };

    match ctx.cli.format {
        OutputFormat::Json => print_json(&report, &lexicon.custom, &config, &selection, written),
        OutputFormat::Human if !ctx.cli.quiet => {
            print_human(&report, &lexicon, &config, written, &paths.custom_keywords);
            Ok(())
        }
        OutputFormat::Human => Ok(()),
    }
}

fn rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_human(
    report: &DiscoveryReport,
    lexicon: &Lexicon,
    config: &RecallConfig,
    written: Option<usize>,
    keyword_path: &std::path::Path,
) {
    rule();
    println!("Custom Keyword Discovery via Co-occurrence");
    rule();
    println!();
    println!("  {} messages loaded", report.messages);
    if report.skipped > 0 {
        println!("  {} malformed lines skipped", report.skipped);
    }
    let preview: Vec<&str> = config
        .discovery
        .seeds
        .iter()
        .take(SEED_PREVIEW)
        .map(String::as_str)
        .collect();
    println!("  Seeds: {}...", preview.join(", "));
    println!("  {} messages mention a seed", report.seed_messages);
    println!();

    rule();
    println!("TOP CANDIDATE KEYWORDS");
    rule();
    println!();
    let mut new_count = 0;
    for candidate in report.candidates.iter().take(config.discovery.show) {
        let status = if lexicon.custom.contains(&candidate.word) {
            "(already in list)"
        } else {
            new_count += 1;
            "NEW"
        };
        println!(
            "  {:<20} score={:.1}  freq={}  {}",
            candidate.word, candidate.score, candidate.frequency, status
        );
    }
    println!();
    println!("Found {} new candidate keywords", new_count);
    println!();

    match written {
        Some(total) => {
            rule();
            println!("Writing to {}", keyword_path.display());
            rule();
            println!("  Wrote {} keywords", total);
            println!();
        }
        None => {
            println!("Run with --write to save to file:");
            println!("  recall discover --write");
            println!();
        }
    }
}

fn print_json(
    report: &DiscoveryReport,
    existing: &KeywordFile,
    config: &RecallConfig,
    selection: &[String],
    written: Option<usize>,
) -> Result<()> {
    let candidates: Vec<serde_json::Value> = report
        .candidates
        .iter()
        .take(config.discovery.show)
        .map(|c| {
            serde_json::json!({
                "word": c.word,
                "score": c.score,
                "frequency": c.frequency,
                "new": !existing.contains(&c.word),
            })
        })
        .collect();
    let output = serde_json::json!({
        "messages": report.messages,
        "seed_messages": report.seed_messages,
        "skipped": report.skipped,
        "candidates": candidates,
        "selected": selection,
        "written": written,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
