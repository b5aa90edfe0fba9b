//! Destinations for event-log records.

use super::LogRecord;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Somewhere to persist [`LogRecord`]s.
///
/// `append` resolves once the record is stored. Errors are reported to the
/// [`EventLogger`](super::EventLogger), which never passes them on to its caller.
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn append(&self, record: &LogRecord) -> io::Result<()>;
}

/// Keeps records in memory for later inspection.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record appended so far, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl LogSink for MemorySink {
    async fn append(&self, record: &LogRecord) -> io::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.clone());
        Ok(())
    }
}

/// Appends records to a file, one JSON object per line.
pub struct FileSink {
    path: PathBuf,
    file: tokio::sync::Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it and its parent directories if needed.
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        Ok(Self {
            path,
            file: tokio::sync::Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LogSink for FileSink {
    async fn append(&self, record: &LogRecord) -> io::Result<()> {
        let mut line = serde_json::to_vec(record).map_err(io::Error::other)?;
        line.push(b'\n');

        let mut file = self.file.lock().await;
        file.write_all(&line).await?;
        file.flush().await
    }
}

/// Forwards every record to each of its sinks.
///
/// All sinks are attempted even when one fails; the first error is returned.
pub struct FanoutSink {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { sinks }
    }
}

#[async_trait]
impl LogSink for FanoutSink {
    async fn append(&self, record: &LogRecord) -> io::Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.append(record).await {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
