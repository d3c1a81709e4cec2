//! Run logger with file and console output.
//!
//! Every line goes both to the run log file (append mode, so consecutive
//! runs accumulate) and to stderr. Lines are timestamped and level-tagged.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

/// Dual-output run logger.
pub struct RunLogger {
    log_path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl RunLogger {
    /// Open (or create) the run log file in append mode.
    pub fn new(log_path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let log_path = log_path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        Ok(Self {
            log_path,
            writer: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    /// Path of the run log file.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Log an informational message.
    pub fn info(&self, message: &str) {
        self.write_line("INFO", message);
    }

    /// Log a warning.
    pub fn warn(&self, message: &str) {
        self.write_line("WARNING", message);
    }

    /// Log an error.
    pub fn error(&self, message: &str) {
        self.write_line("ERROR", message);
    }

    /// Flush and close the log file. Further messages only reach the console.
    pub fn close(&self) {
        if let Some(mut writer) = self.writer.lock().take() {
            let _ = writer.flush();
        }
    }

    fn write_line(&self, level: &str, message: &str) {
        let line = format!(
            "{} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            message
        );

        eprintln!("{line}");

        if let Some(writer) = self.writer.lock().as_mut() {
            // Write failures must not take the run down with them.
            let _ = writeln!(writer, "{line}");
        }
    }
}

impl Drop for RunLogger {
    fn drop(&mut self) {
        self.close();
    }
}
