//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SessionId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Only valid as a minimum level; silences the logger.
    Off,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Off => write!(f, "OFF"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "off" | "none" => Ok(Self::Off),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Component that emitted the entry (e.g., "cart").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Wall-clock time of the entry.
    pub timestamp: DateTime<Utc>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Milliseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<i64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = match &self.component {
            Some(component) => format!("[{}] {}: {}", self.level, component, self.message),
            None => format!("[{}] {}", self.level, self.message),
        };

        if let Some(elapsed) = self.elapsed_ms {
            s.push_str(&format!(" ({}ms)", elapsed));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Look up a field value.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Where formatted entries go.
#[derive(Debug, Clone, Default)]
enum LogSink {
    /// stderr natively, the browser console on wasm32.
    #[default]
    Console,
    /// Kept in memory for inspection.
    Capture(Arc<Mutex<Vec<LogEntry>>>),
}

/// Structured logger with session context.
///
/// Clones share the same session and sink. Use [`StructuredLogger::for_component`]
/// to hand each part of the storefront its own tagged logger.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    component: Option<String>,
    start_time: DateTime<Utc>,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            start_time: Utc::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Console,
        }
    }

    /// Create a logger that keeps entries in memory instead of printing them.
    pub fn capturing(session_id: SessionId) -> Self {
        let mut logger = Self::new(session_id);
        logger.sink = LogSink::Capture(Arc::new(Mutex::new(Vec::new())));
        logger
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// A copy of this logger tagged with another component.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        self.clone().with_component(component)
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log at trace level.
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, BTreeMap::new());
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let now = Utc::now();
        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            timestamp: now,
            fields,
            elapsed_ms: Some((now - self.start_time).num_milliseconds()),
        };

        match &self.sink {
            LogSink::Console => {
                let output = match self.format {
                    LogFormat::Json => entry.to_json(),
                    LogFormat::Human => entry.to_human(),
                };
                write_console(level, &output);
            }
            LogSink::Capture(entries) => {
                if let Ok(mut entries) = entries.lock() {
                    entries.push(entry);
                }
            }
        }
    }

    /// Whether entries at `level` are emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.min_level
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Entries kept by a capturing logger. Empty for console loggers.
    pub fn captured(&self) -> Vec<LogEntry> {
        match &self.sink {
            LogSink::Capture(entries) => entries.lock().map(|e| e.clone()).unwrap_or_default(),
            LogSink::Console => Vec::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: LogLevel, output: &str) {
    eprintln!("{}", output);
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: LogLevel, output: &str) {
    let value = wasm_bindgen::JsValue::from_str(output);
    match level {
        LogLevel::Error => web_sys::console::error_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Debug | LogLevel::Trace => web_sys::console::debug_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add an unsigned integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::capturing(SessionId::from_string("s-1"))
    }

    #[test]
    fn test_min_level_filters() {
        let logger = logger();
        logger.debug("hidden");
        logger.info("shown");

        let entries = logger.captured();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "shown");
        assert_eq!(entries[0].session_id, "s-1");
    }

    #[test]
    fn test_off_silences_everything() {
        let logger = logger().with_min_level(LogLevel::Off);
        logger.error("nope");
        assert!(logger.captured().is_empty());
        assert!(!logger.enabled(LogLevel::Off));
    }

    #[test]
    fn test_component_clones_share_sink() {
        let root = logger().with_min_level(LogLevel::Debug);
        let cart = root.for_component("cart");
        cart.debug_builder("item added")
            .field("product_id", "w1")
            .field_u64("quantity", 2)
            .emit();

        let entries = root.captured();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].component.as_deref(), Some("cart"));
        assert_eq!(entries[0].field("product_id"), Some(&serde_json::json!("w1")));
        assert_eq!(entries[0].field("quantity"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_human_format() {
        let mut fields = BTreeMap::new();
        fields.insert("b".to_string(), serde_json::json!(2));
        fields.insert("a".to_string(), serde_json::json!("x"));
        let entry = LogEntry {
            level: LogLevel::Warn,
            message: "slow".to_string(),
            session_id: "s".to_string(),
            component: Some("mail".to_string()),
            timestamp: Utc::now(),
            fields,
            elapsed_ms: Some(12),
        };
        assert_eq!(entry.to_human(), "[WARN] mail: slow (12ms) | a=\"x\" b=2");
    }

    #[test]
    fn test_json_format_flattens_fields() {
        let logger = logger();
        logger
            .error_builder("send failed")
            .field_u64("status", 422)
            .emit();

        let entry = &logger.captured()[0];
        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(json["level"], "error");
        assert_eq!(json["status"], 422);
        assert_eq!(json["message"], "send failed");
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("off".parse::<LogLevel>(), Ok(LogLevel::Off));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
