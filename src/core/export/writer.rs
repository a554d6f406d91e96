//! Output file writer
//!
//! One decimal value per line, no header and no trailing newline. The file is
//! removed and recreated at the start of every run.

use crate::domain::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Appends batches of values to the output file
pub struct OutputWriter {
    path: PathBuf,
    file: File,
    is_first: bool,
    lines_written: u64,
}

impl OutputWriter {
    /// Removes any previous file at `path` and opens a fresh one for appending
    ///
    /// A missing previous file is the normal case; any other removal failure
    /// is returned. The parent directory is created if needed.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        remove_existing(&path).await?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        tracing::debug!(path = %path.display(), "Output file opened");

        Ok(Self {
            path,
            file,
            is_first: true,
            lines_written: 0,
        })
    }

    /// Appends values, one per line
    pub async fn append(&mut self, values: &[String]) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }

        let mut chunk = if self.is_first {
            String::new()
        } else {
            String::from("\n")
        };
        chunk.push_str(&values.join("\n"));

        self.file.write_all(chunk.as_bytes()).await?;
        self.file.flush().await?;

        self.is_first = false;
        self.lines_written += values.len() as u64;
        Ok(())
    }

    /// Flushes file contents to disk
    pub async fn finish(mut self) -> Result<PathBuf> {
        self.file.flush().await?;
        self.file.sync_all().await?;

        tracing::debug!(
            path = %self.path.display(),
            lines = self.lines_written,
            "Output file closed"
        );
        Ok(self.path)
    }
}

async fn remove_existing(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Removed previous output file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
