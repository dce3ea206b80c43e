use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::types::message_text;
use crate::error::{RecallError, Result};

/// Iterates message texts of an index file, accepting raw or normalized layouts.
///
/// Unreadable and malformed lines are skipped and counted.
pub struct MessageTexts<R> {
    reader: R,
    buf: Vec<u8>,
    skipped: usize,
}

impl MessageTexts<BufReader<File>> {
    /// Open an index file; a missing file is an error
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecallError::not_found("index file", path.display()));
        }
        let file = File::open(path)
            .map_err(|e| RecallError::io_operation("open", path.display(), e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> MessageTexts<R> {
    pub fn new(reader: R) -> Self {
        MessageTexts {
            reader,
            buf: Vec::new(),
            skipped: 0,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for MessageTexts<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "stopped reading index");
                    return None;
                }
            }
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }
            match message_text(line) {
                Some(text) => return Some(text.to_string()),
                None => self.skipped += 1,
            }
        }
    }
}
