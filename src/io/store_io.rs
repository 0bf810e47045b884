use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry, parent_dir};
use crate::model::collection::TaskCollection;
use crate::parse::{DroppedRecord, parse_tasks, serialize_tasks};

/// Error type for task file and settings I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid setting in {path}: {message}")]
    InvalidSetting { path: PathBuf, message: String },
}

/// Load every task from the file at `path`.
///
/// A missing file is an empty collection. Lines that fail to parse are
/// skipped and returned to the caller; nothing is written here.
pub fn load_tasks(path: &Path) -> Result<(TaskCollection, Vec<DroppedRecord>), StoreError> {
    let source = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no task file yet, starting empty");
            return Ok((TaskCollection::new(), Vec::new()));
        }
        Err(e) => {
            return Err(StoreError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let (tasks, dropped) = parse_tasks(&source);
    for record in &dropped {
        tracing::debug!(
            line = record.line_number,
            error = %record.error,
            "skipping unreadable task record"
        );
    }

    tracing::debug!(path = %path.display(), tasks = tasks.len(), "loaded tasks");
    Ok((TaskCollection::from_tasks(tasks), dropped))
}

/// Keep records skipped by [`load_tasks`] in the recovery log. Call this
/// only when the task file is about to be rewritten without them.
pub fn log_dropped_records(path: &Path, dropped: &[DroppedRecord]) {
    if dropped.is_empty() {
        return;
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let lines: Vec<String> = dropped.iter().map(|r| r.line_number.to_string()).collect();
    let body: Vec<&str> = dropped.iter().map(|r| r.text.as_str()).collect();
    recovery::log_recovery(
        parent_dir(path),
        RecoveryEntry::new(RecoveryCategory::Parser, "dropped lines")
            .field("Source", file_name)
            .field("Lines", lines.join(", "))
            .body(body.join("\n")),
    );
}

/// Rewrite the task file with the collection in its current order.
///
/// The old file is replaced in one step; if that fails the unsaved text is
/// kept in the recovery log.
pub fn save_tasks(path: &Path, collection: &TaskCollection) -> Result<(), StoreError> {
    let content = serialize_tasks(collection.tasks());
    if let Err(e) = recovery::atomic_write(path, content.as_bytes()) {
        recovery::log_recovery(
            parent_dir(path),
            RecoveryEntry::new(RecoveryCategory::Write, "task file write failed")
                .field("Target", path.display().to_string())
                .field("Error", e.to_string())
                .body(content),
        );
        return Err(StoreError::WriteError {
            path: path.to_path_buf(),
            source: e,
        });
    }
    tracing::debug!(path = %path.display(), tasks = collection.len(), "saved tasks");
    Ok(())
}
