//! Rolling in-memory logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and echoes each one to the browser console (stderr off wasm32).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    /// `init_logger` was called twice or another logger is installed
    #[error("logger already initialized")]
    AlreadyInitialized,
    /// The global slot was set but could not be read back
    #[error("logger not initialized")]
    NotInitialized,
}

pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: impl Into<String>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            app_name: app_name.into(),
            capacity,
            level: LevelFilter::Debug,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    fn format_line(&self, level: Level, target: &str, message: &fmt::Arguments<'_>) -> String {
        format!(
            "[{}] [{}] {:<5} {}: {}",
            Local::now().format("%H:%M:%S%.3f"),
            self.app_name,
            level,
            target,
            message
        )
    }

    fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn record_line(&self, level: Level, target: &str, message: fmt::Arguments<'_>) {
        let line = self.format_line(level, target, &message);
        emit(level, &line);
        self.push(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.record_line(record.level(), record.target(), *record.args());
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Call once at startup.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), LoggerError> {
    let logger = RollingLogger::new(app_name, capacity);
    let level = logger.level;
    if LOGGER.set(logger).is_err() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let installed = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::set_logger(installed).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines held by the global logger, oldest first; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_keeps_newest_lines() {
        let logger = RollingLogger::new("Test", 3);
        for i in 0..5 {
            logger.record_line(Level::Info, "test", format_args!("line {}", i));
        }
        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
        assert!(lines[0].contains("[Test]"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new("Test", 10).with_level(LevelFilter::Warn);
        let debug = Metadata::builder().level(Level::Debug).target("x").build();
        let warn = Metadata::builder().level(Level::Warn).target("x").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LoggerError::AlreadyInitialized.to_string(), "logger already initialized");
        let boxed: Box<dyn std::error::Error> = Box::new(LoggerError::NotInitialized);
        assert_eq!(boxed.to_string(), "logger not initialized");
    }

    #[test]
    fn test_global_logger_collects_records() {
        init_logger("Global", 8).unwrap();
        log::info!("order screen opened");
        assert!(recent_lines().iter().any(|line| line.ends_with("order screen opened")));
        assert!(matches!(init_logger("Global", 8), Err(LoggerError::AlreadyInitialized)));
    }

    #[test]
    fn test_zero_capacity_holds_one_line() {
        let logger = RollingLogger::new("Test", 0);
        logger.record_line(Level::Error, "t", format_args!("a"));
        logger.record_line(Level::Error, "t", format_args!("b"));
        assert_eq!(logger.lines().len(), 1);
    }
}
