//! Atomic file replacement
//!
//! The index and the custom keyword file are read by other invocations while a
//! writer runs. Writers always go through a temp file in the target directory
//! followed by a rename, so readers see either the old or the new file.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{RecallError, Result};

/// Replace `path` with `contents` atomically
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let mut writer = AtomicFile::create(path)?;
    writer.write_all(contents)?;
    writer.commit()
}

/// A buffered writer whose contents replace the target only on [`AtomicFile::commit`].
///
/// Dropping without committing deletes the temp file and leaves the target untouched.
pub struct AtomicFile {
    target: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl AtomicFile {
    pub fn create(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .map_err(|e| RecallError::io_operation("create directory", dir.display(), e))?;
        let temp = NamedTempFile::new_in(&dir)
            .map_err(|e| RecallError::io_operation("create temp file in", dir.display(), e))?;
        Ok(Self {
            target: target.to_path_buf(),
            writer: BufWriter::new(temp),
        })
    }

    /// Flush and rename over the target
    pub fn commit(self) -> Result<()> {
        let temp = self
            .writer
            .into_inner()
            .map_err(|e| RecallError::Io(e.into_error()))?;
        temp.persist(&self.target)
            .map_err(|e| RecallError::io_operation("replace", self.target.display(), e.error))?;
        Ok(())
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.txt");
        fs::write(&path, "old\n").unwrap();

        write_atomic(&path, b"new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_uncommitted_file_leaves_target_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.tsv");
        fs::write(&path, "original\n").unwrap();

        {
            let mut writer = AtomicFile::create(&path).unwrap();
            writer.write_all(b"partial").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "original\n");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        write_atomic(&path, b"x").unwrap();
        assert!(path.exists());
    }
}
