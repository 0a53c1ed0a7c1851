use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

struct Sink {
    path: PathBuf,
    file: File,
}

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<Sink>> = Mutex::new(None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Opens the log file in append mode. Later calls are ignored once a file is
/// open. Logging stays off if the file cannot be opened.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(Sink {
            path: path.to_path_buf(),
            file,
        });
    }
}

/// File the logger writes to, once `init` succeeded.
pub fn log_path() -> Option<PathBuf> {
    LOGGER
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(|sink| sink.path.clone()))
}

pub fn log(level: Level, message: &str) {
    if let Ok(mut guard) = LOGGER.lock()
        && let Some(sink) = guard.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(sink.file, "[{}] {:<5} {}", timestamp, level.as_str(), message);
    }
}

pub fn info(message: &str) {
    log(Level::Info, message);
}

pub fn warn(message: &str) {
    log(Level::Warn, message);
}

pub fn error(message: &str) {
    log(Level::Error, message);
}
