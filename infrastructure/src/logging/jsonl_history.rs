//! JSONL file writer for conversion history.
//!
//! Each [`ConversionEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use numconv_application::ports::conversion_history::{ConversionEvent, ConversionHistory};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL conversion history that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlConversionHistory {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversionHistory {
    /// Open (or create) the history file at the given path.
    ///
    /// Existing history is kept; new records are appended. Creates parent
    /// directories if needed. Returns `None` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create history directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConversionHistory for JsonlConversionHistory {
    fn record(&self, event: ConversionEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = match serde_json::to_value(&event) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => return,
            Err(e) => {
                warn!("Could not serialize history record: {}", e);
                return;
            }
        };
        record.insert(
            "type".to_string(),
            serde_json::Value::String(event.event_type.to_string()),
        );
        record.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Could not write history to {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for JsonlConversionHistory {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
