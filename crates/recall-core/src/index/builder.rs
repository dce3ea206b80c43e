use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::types::{ConversationRecord, IndexRow};
use crate::error::{RecallError, Result};
use crate::text::Normalizer;

/// Lines between progress events
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Outcome of an index build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Rows written
    pub written: usize,
    /// Non-empty lines dropped as malformed
    pub skipped: usize,
}

/// Streaming index builder: raw five-field records in, six-field index rows out.
///
/// Processes one line at a time, never reorders, and skips malformed lines.
pub struct IndexBuilder<'a> {
    normalizer: &'a Normalizer,
    interrupt: Option<Arc<AtomicBool>>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(normalizer: &'a Normalizer) -> Self {
        IndexBuilder {
            normalizer,
            interrupt: None,
        }
    }

    /// Stop with [`RecallError::Interrupted`] once `flag` is set
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Derive the index row for one record
    pub fn index_row(&self, record: ConversationRecord) -> IndexRow {
        let normalized_text = self.normalizer.normalize_text(&record.text);
        IndexRow {
            record,
            normalized_text,
        }
    }

    /// Stream `input` to `output`
    #[tracing::instrument(skip_all)]
    pub fn build<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();
        let mut buf = Vec::new();

        loop {
            if self.interrupted() {
                tracing::warn!(written = stats.written, "index build interrupted");
                return Err(RecallError::Interrupted);
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }

            let Some(record) = ConversationRecord::parse_line(line) else {
                stats.skipped += 1;
                continue;
            };
            writeln!(output, "{}", self.index_row(record).to_line())?;
            stats.written += 1;

            if stats.written % PROGRESS_INTERVAL == 0 {
                tracing::info!(lines = stats.written, "Processed {} lines...", stats.written);
            }
        }

        output.flush()?;
        tracing::info!(
            written = stats.written,
            skipped = stats.skipped,
            elapsed = ?start.elapsed(),
            "Done. Processed {} lines.",
            stats.written
        );
        Ok(stats)
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}
