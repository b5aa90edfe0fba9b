//! # Event Log
//!
//! The application's record of what happened during a run: categories created, products
//! rejected, the demo finishing. Each record carries a UTC timestamp, a level, a message and
//! an optional JSON context.
//!
//! [`EventLogger`] is an ordinary value handed to whoever needs it, so tests can inspect a
//! [`MemorySink`] instead of a shared global. Every record is also emitted as a `tracing`
//! event, so `RUST_LOG` controls what reaches the console.
//!
//! Logging never fails. A sink error is reported through `tracing` and dropped, so it cannot
//! hide the error that was being logged.

pub mod sink;

pub use sink::{FanoutSink, FileSink, LogSink, MemorySink};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Severity of a [`LogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
        };
        f.pad(label)
    }
}

/// One entry in the event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl LogRecord {
    /// A record stamped with the current time.
    pub fn new(level: LogLevel, message: impl Into<String>, context: Option<Value>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            context,
        }
    }
}

/// Cloneable handle for appending to the event log.
#[derive(Clone)]
pub struct EventLogger {
    sink: Arc<dyn LogSink>,
}

impl EventLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// A logger backed by a fresh [`MemorySink`], returned alongside it.
    pub fn in_memory() -> (Self, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (Self::new(sink.clone()), sink)
    }

    pub async fn info(&self, message: impl Into<String>, context: Option<Value>) {
        self.log(LogLevel::Info, message.into(), context).await
    }

    pub async fn success(&self, message: impl Into<String>, context: Option<Value>) {
        self.log(LogLevel::Success, message.into(), context).await
    }

    pub async fn error(&self, message: impl Into<String>, context: Option<Value>) {
        self.log(LogLevel::Error, message.into(), context).await
    }

    async fn log(&self, level: LogLevel, message: String, context: Option<Value>) {
        let record = LogRecord::new(level, message, context);
        let ctx = record.context.as_ref().map(|c| c.to_string());
        match level {
            LogLevel::Info => info!(ctx = ctx.as_deref(), "{}", record.message),
            LogLevel::Success => {
                info!(ctx = ctx.as_deref(), success = true, "{}", record.message)
            }
            LogLevel::Error => error!(ctx = ctx.as_deref(), "{}", record.message),
        }

        if let Err(e) = self.sink.append(&record).await {
            warn!(error = %e, "Failed to append event log record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct BrokenSink;

    #[async_trait]
    impl LogSink for BrokenSink {
        async fn append(&self, _record: &LogRecord) -> std::io::Result<()> {
            Err(std::io::Error::other("read-only filesystem"))
        }
    }

    #[tokio::test]
    async fn test_records_keep_order_level_and_context() {
        let (logger, sink) = EventLogger::in_memory();

        logger.info("Sistema da padaria iniciado", None).await;
        logger.success("Categoria criada: Pães", None).await;
        logger
            .error(
                "Erro ao criar produto Sonho",
                Some(json!({ "error": "Category does not exist: Confeitaria" })),
            )
            .await;

        let records = sink.records();
        let levels: Vec<_> = records.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Info, LogLevel::Success, LogLevel::Error]
        );
        assert_eq!(records[1].message, "Categoria criada: Pães");
        assert_eq!(records[0].context, None);
        assert_eq!(
            records[2].context,
            Some(json!({ "error": "Category does not exist: Confeitaria" }))
        );
        assert!(records[0].timestamp <= records[2].timestamp);
    }

    #[tokio::test]
    async fn test_sink_failures_are_swallowed() {
        let logger = EventLogger::new(Arc::new(BrokenSink));
        // Must complete without panicking or returning an error
        logger.error("Erro ao inicializar sistema", None).await;
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let record = LogRecord::new(LogLevel::Success, "ok", None);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["level"], "success");
        assert!(value.get("context").is_none());
    }
}
