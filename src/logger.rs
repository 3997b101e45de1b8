//! Logging for FinVani
//!
//! All modules log through the `log` facade. At startup a `fern` dispatch is
//! installed that always feeds the in-memory [`Logger`] buffer (shown in the
//! logs dialog) and, when file logging is enabled, appends to
//! `finvani.log` in the platform data directory. Nothing is written to the
//! terminal while the TUI owns it.

use crate::config::LoggingConfig;
use crate::constants::MAX_LOG_ENTRIES;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_path: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_path: None,
        }
    }

    /// Build the logger described by `config` and install it as the global `log` backend
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();
        if config.enabled {
            logger.file_path = Some(Self::get_log_file_path()?);
        }

        logger
            .dispatch(config)?
            .apply()
            .context("A global logger is already installed")?;

        log::info!(
            "Logging initialized at level {} ({})",
            config.level,
            logger
                .file_path()
                .map(|p| format!("file: {}", p.display()))
                .unwrap_or_else(|| "memory only".to_string())
        );
        Ok(logger)
    }

    /// Build the `fern` dispatch feeding this buffer (and the log file, if set)
    pub fn dispatch(&self, config: &LoggingConfig) -> Result<fern::Dispatch> {
        let level = config.level_filter()?;
        let memory = self.clone();

        let mut dispatch = fern::Dispatch::new()
            .level(level)
            // HTTP internals are noisy below warn
            .level_for("hyper", LevelFilter::Warn)
            .level_for("hyper_util", LevelFilter::Warn)
            .level_for("reqwest", LevelFilter::Warn)
            .level_for("rustls", LevelFilter::Warn)
            .chain(
                fern::Dispatch::new()
                    .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
                    .chain(fern::Output::call(move |record| memory.log(record.args().to_string()))),
            );

        if let Some(path) = &self.file_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {:<5} {}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(dispatch)
    }

    /// Route file output to `path` instead of the default location
    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("finvani").join("finvani.log"))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_LOG_ENTRIES {
                let overflow = logs.len() - MAX_LOG_ENTRIES;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
