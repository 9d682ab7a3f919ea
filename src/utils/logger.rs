//! Logger for application-wide logging
//!
//! Implements `log::Log` so the whole crate can use the `log` macros. Every
//! record can be mirrored to a log file; the terminal only sees warnings and
//! errors unless verbose output was requested.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, if any
    file: Mutex<Option<File>>,
    /// Echo info and debug records to stderr
    verbose: bool,
}

impl Logger {
    /// Creates a logger, optionally writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, created or truncated
    /// * `verbose` - Whether info/debug records reach the terminal
    pub fn new(log_file: Option<&str>, verbose: bool) -> io::Result<Self> {
        let file = match log_file {
            Some(path) => Some(File::create(Path::new(path))?),
            None => None,
        };
        Ok(Logger {
            file: Mutex::new(file),
            verbose,
        })
    }

    /// Appends a line to the log file, if one is open
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                writeln!(file, "{}", message)?;
                file.flush()?;
            }
        }
        Ok(())
    }

    fn echoes(&self, level: Level) -> bool {
        level <= Level::Warn || self.verbose
    }

    /// Installs the global logger
    ///
    /// Only the first call takes effect.
    pub fn init_global_logger(log_file: Option<&str>, verbose: bool) -> io::Result<()> {
        let global_logger = Logger::new(log_file, verbose)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = format!("[{}] {}", record.level(), record.args());
        let _ = self.write_line(&message);

        if self.echoes(record.level()) {
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}
