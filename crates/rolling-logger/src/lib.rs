//! Rolling File Logger
//!
//! Writes log lines to one file per day under an app-provided directory,
//! prunes old files, and keeps a circular in-memory buffer of recent lines
//! so the app can show them without touching disk.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::{Local, NaiveDate};

/// Lines kept in the in-memory circular buffer
const MAX_RECENT_LINES: usize = 200;

/// Daily files kept on disk before pruning
const MAX_LOG_FILES: usize = 7;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

struct Inner {
    date: NaiveDate,
    file: Option<File>,
    recent: VecDeque<String>,
}

pub struct RollingLogger {
    dir: PathBuf,
    prefix: String,
    inner: Mutex<Inner>,
}

/// File name for a given day, e.g. `Finboard-2026-08-29.log`
fn file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.log", prefix, date.format("%Y-%m-%d"))
}

impl RollingLogger {
    fn new(dir: PathBuf, prefix: String) -> Self {
        Self {
            dir,
            prefix,
            inner: Mutex::new(Inner {
                date: Local::now().date_naive(),
                file: None,
                recent: VecDeque::with_capacity(MAX_RECENT_LINES),
            }),
        }
    }

    fn open_file(&self, date: NaiveDate) -> io::Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(file_name(&self.prefix, date)))
    }

    fn write_line(&self, level: &str, msg: &str) -> io::Result<()> {
        let now = Local::now();
        let line = format!("{} [{}] {}", now.format("%Y-%m-%d %H:%M:%S%.3f"), level, msg);

        let mut inner = self.inner.lock().map_err(|_| {
            io::Error::new(io::ErrorKind::Other, "logger mutex poisoned")
        })?;

        // Roll to a new file at midnight
        let today = now.date_naive();
        if inner.file.is_none() || inner.date != today {
            inner.date = today;
            inner.file = Some(self.open_file(today)?);
            drop_old_files(&self.dir, &self.prefix, MAX_LOG_FILES)?;
        }

        if inner.recent.len() == MAX_RECENT_LINES {
            inner.recent.pop_front();
        }
        inner.recent.push_back(line.clone());

        if let Some(file) = inner.file.as_mut() {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }

    fn recent(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.recent.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Delete the oldest daily files beyond `keep`
fn drop_old_files(dir: &Path, prefix: &str, keep: usize) -> io::Result<()> {
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(prefix) && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();
    // Date is embedded in the name, so lexical order is chronological
    logs.sort();
    while logs.len() > keep {
        let oldest = logs.remove(0);
        let _ = fs::remove_file(oldest);
    }
    Ok(())
}

/// Initialize the global logger writing under `dir` with file prefix `prefix`.
///
/// Also installs a console tracing subscriber; calling twice is harmless.
pub fn init_logger(dir: PathBuf, prefix: &str) -> io::Result<()> {
    fs::create_dir_all(&dir)?;
    let _ = LOGGER.set(RollingLogger::new(dir, prefix.to_string()));
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
    info(&format!("{} logging started", prefix))
}

fn write(level: &str, msg: &str) -> io::Result<()> {
    match LOGGER.get() {
        Some(logger) => logger.write_line(level, msg),
        None => Err(io::Error::new(io::ErrorKind::Other, "logger not initialized")),
    }
}

pub fn info(msg: &str) -> io::Result<()> {
    tracing::info!("{}", msg);
    write("INFO", msg)
}

pub fn warn(msg: &str) -> io::Result<()> {
    tracing::warn!("{}", msg);
    write("WARN", msg)
}

pub fn error(msg: &str) -> io::Result<()> {
    tracing::error!("{}", msg);
    write("ERROR", msg)
}

/// Most recent lines from the circular buffer, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|l| l.recent()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(file_name("Finboard", date), "Finboard-2026-03-07.log");
    }

    #[test]
    fn recent_buffer_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RollingLogger::new(dir.path().to_path_buf(), "Test".into());
        for i in 0..MAX_RECENT_LINES + 25 {
            logger.write_line("INFO", &format!("line {}", i)).unwrap();
        }
        let recent = logger.recent();
        assert_eq!(recent.len(), MAX_RECENT_LINES);
        assert!(recent.last().unwrap().ends_with(&format!("line {}", MAX_RECENT_LINES + 24)));
    }

    #[test]
    fn lines_reach_the_daily_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RollingLogger::new(dir.path().to_path_buf(), "Test".into());
        logger.write_line("ERROR", "boom").unwrap();
        let path = dir.path().join(file_name("Test", Local::now().date_naive()));
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("[ERROR] boom"));
    }

    #[test]
    fn old_files_are_pruned() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=10 {
            let date = NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
            fs::write(dir.path().join(file_name("Test", date)), "x").unwrap();
        }
        drop_old_files(dir.path(), "Test", MAX_LOG_FILES).unwrap();
        let left = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(left, MAX_LOG_FILES);
        // Oldest days are the ones gone
        assert!(!dir.path().join(file_name("Test", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())).exists());
        assert!(dir.path().join(file_name("Test", NaiveDate::from_ymd_opt(2026, 1, 10).unwrap())).exists());
    }
}
