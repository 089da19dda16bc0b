//! Logging setup
//!
//! Records go to stderr through env_logger as usual; the most recent lines
//! are also kept in memory so the menu can show them on screen.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use log::{Log, Metadata, Record};

/// Lines kept for the on-screen view
pub const HISTORY_LINES: usize = 256;

static HISTORY: Mutex<History> = Mutex::new(History::new(HISTORY_LINES));

/// Whether records are also written to stderr
static ECHO: AtomicBool = AtomicBool::new(true);

/// A bounded list of log lines, oldest first
#[derive(Debug)]
pub struct History {
    lines: VecDeque<String>,
    limit: usize,
}

impl History {
    pub const fn new(limit: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.limit == 0 {
            return;
        }
        while self.lines.len() >= self.limit {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

struct DebugLogger {
    inner: env_logger::Logger,
}

impl Log for DebugLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.inner.matches(record) {
            return;
        }
        if let Ok(mut history) = HISTORY.lock() {
            history.push(format!("{}: {}", record.level(), record.args()));
        }
        if ECHO.load(Ordering::Relaxed) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Install the logger. `debug` lowers the default filter from `info` to
/// `debug`; `RUST_LOG` still takes precedence.
pub fn init(debug: bool) -> Result<(), log::SetLoggerError> {
    let default = if debug { "debug" } else { "info" };
    let logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format(|buf, record| writeln!(buf, "[kexecboot] {}: {}", record.level(), record.args()))
        .build();

    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(DebugLogger { inner: logger }))?;
    log::set_max_level(max_level);
    Ok(())
}

/// Stop or resume writing to stderr, e.g. while a text UI owns the terminal
pub fn set_echo(enabled: bool) {
    ECHO.store(enabled, Ordering::Relaxed);
}

/// Snapshot of the kept lines, oldest first
pub fn history() -> Vec<String> {
    HISTORY
        .lock()
        .map(|history| history.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_drops_oldest() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.push(format!("line {}", i));
        }
        assert_eq!(history.len(), 3);
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines, ["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_history_zero_limit() {
        let mut history = History::new(0);
        history.push("ignored".to_string());
        assert!(history.is_empty());
    }
}
