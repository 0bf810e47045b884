use crate::model::date::{Date, FormatError};
use crate::model::task::Task;
use crate::parse::{DELIMITER, FIELD_COUNT, TRUE_TEXT};

/// Why a single line of the task file could not be read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordParseError {
    #[error("expected {expected} fields, found {0}", expected = FIELD_COUNT)]
    WrongFieldCount(usize),
    #[error("priority {0:?} is not a whole number")]
    InvalidPriority(String),
    #[error("bad due date: {0}")]
    InvalidDate(#[from] FormatError),
}

/// A line that was skipped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRecord {
    /// 1-based line number in the source
    pub line_number: usize,
    pub text: String,
    pub error: RecordParseError,
}

/// Parse one record: `name,subject,priority,due_date,is_completed`.
///
/// Anything other than the exact true literal reads as not completed.
pub fn parse_record(line: &str) -> Result<Task, RecordParseError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(RecordParseError::WrongFieldCount(fields.len()));
    }

    let priority = fields[2]
        .trim()
        .parse::<i64>()
        .map_err(|_| RecordParseError::InvalidPriority(fields[2].to_string()))?;
    let due_date = Date::parse(fields[3])?;

    let mut task = Task::new(fields[0], fields[1], priority, due_date);
    task.is_completed = fields[4] == TRUE_TEXT;
    Ok(task)
}

/// Parse a whole task file. Bad lines are returned alongside the tasks
/// instead of failing the load; blank lines are ignored.
pub fn parse_tasks(source: &str) -> (Vec<Task>, Vec<DroppedRecord>) {
    let mut tasks = Vec::new();
    let mut dropped = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_record(line) {
            Ok(task) => tasks.push(task),
            Err(error) => dropped.push(DroppedRecord {
                line_number: idx + 1,
                text: raw.to_string(),
                error,
            }),
        }
    }

    (tasks, dropped)
}
