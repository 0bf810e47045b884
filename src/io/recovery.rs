use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

const LOG_FILE_NAME: &str = ".tasktrack-recovery.log";

/// Written once at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- tasktrack recovery log: append-only
     Lines skipped while loading and saves that failed end up here.
     Safe to delete once you have checked it. -->

---
";

/// Category of a recovery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryCategory {
    Parser,
    Write,
}

impl fmt::Display for RecoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryCategory::Parser => write!(f, "parser"),
            RecoveryCategory::Write => write!(f, "write"),
        }
    }
}

/// A single entry in the recovery log.
#[derive(Debug, Clone)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub category: RecoveryCategory,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

/// Path of the recovery log kept in `dir`
pub fn recovery_log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

/// Directory that holds `path`, for the temp file and side files like the log.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(parent_dir(path))?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl RecoveryEntry {
    pub fn new(category: RecoveryCategory, description: impl Into<String>) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            category,
            description: description.into(),
            fields: Vec::new(),
            body: String::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.push((key.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Format this entry as a markdown block for the recovery log.
    fn to_markdown(&self) -> String {
        let mut out = format!(
            "## {} | {}: {}\n\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        );

        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }

        if !self.body.is_empty() {
            out.push_str("\n```text\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }

        out.push_str("\n---\n");
        out
    }
}

/// Append an entry to the log in `dir`. Failures only produce a warning.
pub fn log_recovery(dir: &Path, entry: RecoveryEntry) {
    if let Err(e) = log_recovery_inner(dir, &entry) {
        tracing::warn!(error = %e, "could not write to recovery log");
    }
}

fn log_recovery_inner(dir: &Path, entry: &RecoveryEntry) -> io::Result<()> {
    let path = recovery_log_path(dir);
    let needs_header = std::fs::metadata(&path).map_or(true, |m| m.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_replaces_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.csv");
        fs::write(&path, "old content that is longer\n").unwrap();
        atomic_write(&path, b"new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn parent_dir_of_bare_file_name_is_current_dir() {
        assert_eq!(parent_dir(Path::new("tasks.csv")), Path::new("."));
        assert_eq!(parent_dir(Path::new("data/tasks.csv")), Path::new("data"));
    }

    #[test]
    fn entries_append_after_single_header() {
        let tmp = TempDir::new().unwrap();
        log_recovery(
            tmp.path(),
            RecoveryEntry::new(RecoveryCategory::Parser, "dropped line")
                .field("Line", "2")
                .body("Quiz,Maths,soon,None,False"),
        );
        log_recovery(
            tmp.path(),
            RecoveryEntry::new(RecoveryCategory::Write, "save failed").body("Essay,English,1,None,False\n"),
        );

        let log = fs::read_to_string(recovery_log_path(tmp.path())).unwrap();
        assert_eq!(log.matches("tasktrack recovery log").count(), 1);
        assert!(log.contains("parser: dropped line"));
        assert!(log.contains("Line: 2\n"));
        assert!(log.contains("```text\nQuiz,Maths,soon,None,False\n```"));
        assert!(log.contains("write: save failed"));
        assert!(log.find("parser:").unwrap() < log.find("write:").unwrap());
    }
}
