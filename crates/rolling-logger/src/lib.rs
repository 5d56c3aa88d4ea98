//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer.
//! On wasm32 every accepted record is also forwarded to the browser console.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 256;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// A captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    /// Console form, e.g. `12:01:02.345 WARN [stockfarm_site::inventory] ...`
    pub fn to_line(&self) -> String {
        format!(
            "{} {} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular buffer logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogRecord>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of retained records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    /// Retained records as console lines, oldest first
    pub fn dump(&self) -> String {
        self.records()
            .iter()
            .map(LogRecord::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Install `window[name]()` returning [`dump`](Self::dump), so the
    /// buffer can be read from the devtools console. Returns whether the
    /// hook was installed.
    #[cfg(target_arch = "wasm32")]
    pub fn expose_on_window(&'static self, name: &str) -> bool {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsValue;

        let Some(win) = web_sys::window() else {
            return false;
        };
        let dump = Closure::<dyn Fn() -> String>::new(move || self.dump());
        let installed = js_sys::Reflect::set(&win, &JsValue::from_str(name), dump.as_ref())
            .unwrap_or(false);
        dump.forget();
        installed
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn expose_on_window(&'static self, _name: &str) -> bool {
        false
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogRecord>> {
        // A panic while holding the lock leaves plain data behind, keep using it.
        match self.buffer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn push(&self, record: LogRecord) {
        let mut buffer = self.lock();
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(record);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogRecord {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        forward_to_console(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn forward_to_console(entry: &LogRecord) {
    let line = entry.to_line();
    match entry.level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn forward_to_console(_entry: &LogRecord) {}

/// Install the global logger. Only the first call wins; later calls
/// return the `log` crate's error.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}
