//! Append-only CSV log for score submissions.
//!
//! Format: `Timestamp,Name,Score`, one row per accepted submission. The
//! header is written only when the file does not already exist at the time
//! of the first write in the process's lifetime.

use crate::scores::score_record::ScoreRecord;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Header row, written exactly once per file lifetime
const HEADER: &str = "Timestamp,Name,Score";

/// Mutex-guarded append-only score log.
///
/// The file is opened lazily on the first append. The existence check, the
/// header write and every row write run under one lock, so concurrent
/// submissions cannot interleave rows or duplicate the header.
pub struct ScoreLog {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl ScoreLog {
    /// Create a log backed by the given file path. Nothing is opened or
    /// written until the first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            writer: Mutex::new(None),
        }
    }

    /// Path the log appends to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, opening the file and writing the header first if
    /// the file is fresh. Flushes after every row.
    pub fn append(&self, record: &ScoreRecord) -> std::io::Result<()> {
        let mut guard = self.writer.lock().unwrap();

        if guard.is_none() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }

            let file_exists = self.path.exists();
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            let mut writer = BufWriter::new(file);

            if !file_exists {
                writeln!(writer, "{}", HEADER)?;
            }

            *guard = Some(writer);
        }

        if let Some(ref mut writer) = *guard {
            writeln!(
                writer,
                "{},{},{}",
                escape_field(&record.timestamp),
                escape_field(&record.name),
                escape_field(&record.score.to_string())
            )?;
            writer.flush()?;
        }

        Ok(())
    }

    /// Flush any buffered data
    pub fn flush(&self) -> std::io::Result<()> {
        if let Some(ref mut writer) = *self.writer.lock().unwrap() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for ScoreLog {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// A score row loaded back from the log
#[derive(Debug, Clone)]
pub struct LoadedScore {
    pub timestamp: String,
    pub name: String,
    pub score: String,
}

/// Load persisted scores from a log file
pub fn load_scores<P: AsRef<Path>>(path: P) -> Result<Vec<LoadedScore>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut scores = Vec::new();

    for result in reader.records() {
        let record = result?;
        scores.push(LoadedScore {
            timestamp: record.get(0).unwrap_or("").to_string(),
            name: record.get(1).unwrap_or("").to_string(),
            score: record.get(2).unwrap_or("").to_string(),
        });
    }

    Ok(scores)
}
