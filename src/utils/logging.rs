use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

use crate::utils::app_paths::AppPaths;

/// Log file writer shared by every tracing event
#[derive(Clone)]
pub struct FileWriter {
    file: Arc<Mutex<File>>,
}

impl FileWriter {
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.file.lock() {
            Ok(mut file) => file.write(buf),
            // A poisoned lock only loses this line
            Err(_) => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Timestamped log file path inside `dir`
pub fn log_file_path(dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("btc-info_{}.log", timestamp))
}

/// Point `latest.log` at the current log file
fn link_latest(dir: &Path, log_path: &Path) {
    let latest_path = dir.join("latest.log");

    #[cfg(unix)]
    {
        let _ = std::fs::remove_file(&latest_path);
        let _ = std::os::unix::fs::symlink(log_path, &latest_path);
    }

    #[cfg(windows)]
    {
        let pointer_content = format!("Current log file: {}\n", log_path.display());
        let _ = std::fs::write(&latest_path, pointer_content);
    }
}

/// Initialize tracing to a log file under the data directory.
///
/// `default_level` applies when RUST_LOG is unset. Returns the log path, or
/// `None` when no log file could be opened, in which case events are dropped.
/// Nothing is ever written to stdout.
pub fn init_file_logging(default_level: &str) -> Option<PathBuf> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_dir = AppPaths::log_dir().ok()?;
    let log_path = log_file_path(&log_dir);
    let writer = FileWriter::open(&log_path).ok()?;
    link_latest(&log_dir, &log_path);

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok()?;

    tracing::info!(target: "btc_info", "Logging initialized at {}", log_path.display());
    Some(log_path)
}
