use crate::model::collection::TaskCollection;
use crate::model::date::{Date, FormatError};
use crate::model::task::{Task, TaskId};
use crate::parse::DELIMITER;

/// Rejected input for a new task. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields must be completed")]
    MissingField,
    #[error("Please enter a valid priority")]
    InvalidPriority,
    #[error("Priority must be > 0")]
    NonPositivePriority,
    #[error("Please enter a valid date (dd/mm/yyyy) or leave blank")]
    InvalidDate(#[source] FormatError),
    #[error("Name and subject cannot contain commas")]
    ContainsDelimiter,
}

/// Error type for operations on existing tasks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("no task at position {position} (the list has {len})")]
    NoSuchPosition { position: usize, len: usize },
}

// ---------------------------------------------------------------------------
// Adding
// ---------------------------------------------------------------------------

/// Build a task from raw user input.
///
/// Name and subject are trimmed and title-cased. An empty due date (or
/// `none` in any case) means no due date. Calendar validity is not checked
/// here; an impossible date is kept and simply never shown as due.
pub fn build_task(name: &str, subject: &str, priority: &str, due: &str) -> Result<Task, ValidationError> {
    let name = title_case(name.trim());
    let subject = title_case(subject.trim());
    let priority = priority.trim();
    if name.is_empty() || subject.is_empty() || priority.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if name.contains(DELIMITER) || subject.contains(DELIMITER) {
        return Err(ValidationError::ContainsDelimiter);
    }

    let priority: i64 = priority
        .parse()
        .map_err(|_| ValidationError::InvalidPriority)?;

    let due = due.trim();
    let due_date = if due.is_empty() || due.eq_ignore_ascii_case(crate::model::date::NO_DATE_TOKEN) {
        Date::NoDate
    } else {
        Date::parse(due).map_err(ValidationError::InvalidDate)?
    };

    if priority <= 0 {
        return Err(ValidationError::NonPositivePriority);
    }

    Ok(Task::new(name, subject, priority, due_date))
}

/// Validate input and add the task. Returns its id and the confirmation.
pub fn add_task(
    collection: &mut TaskCollection,
    name: &str,
    subject: &str,
    priority: &str,
    due: &str,
) -> Result<(TaskId, String), ValidationError> {
    let task = build_task(name, subject, priority, due)?;
    Ok(collection.add(task))
}

/// Capitalize the first letter of every word and lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Flip a task between completed and uncompleted.
pub fn toggle_completion(collection: &mut TaskCollection, id: TaskId) -> Result<String, TaskError> {
    let completed = collection
        .get(id)
        .ok_or(TaskError::NotFound(id))?
        .is_completed;
    set_completion(collection, id, !completed)
}

/// Mark a task completed or uncompleted and describe the result.
pub fn set_completion(
    collection: &mut TaskCollection,
    id: TaskId,
    completed: bool,
) -> Result<String, TaskError> {
    let task = collection.get_mut(id).ok_or(TaskError::NotFound(id))?;
    let message = if completed {
        task.mark_completed();
        let mut message = format!("You completed {}.", task.name);
        if task.is_important() {
            message.push_str(" Great work!");
        }
        message
    } else {
        task.mark_uncompleted();
        let mut message = format!("You need to complete {}.", task.name);
        if task.is_important() {
            message.push_str(" Get to work!");
        }
        message
    };
    Ok(message)
}

// ---------------------------------------------------------------------------
// Priority and removal
// ---------------------------------------------------------------------------

/// Raise or lower a task's priority number (never below 1).
pub fn adjust_priority(collection: &mut TaskCollection, id: TaskId, amount: i64) -> Result<String, TaskError> {
    let task = collection.get_mut(id).ok_or(TaskError::NotFound(id))?;
    task.adjust_priority(amount);
    Ok(format!("{} is now priority {}.", task.name, task.priority))
}

/// Remove every completed task.
pub fn remove_completed(collection: &mut TaskCollection) -> String {
    if collection.remove_completed() > 0 {
        "All completed tasks removed.".to_string()
    } else {
        "No completed tasks to remove.".to_string()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Id of the task shown at a 1-based list position.
pub fn resolve_position(collection: &TaskCollection, position: usize) -> Result<TaskId, TaskError> {
    position
        .checked_sub(1)
        .and_then(|index| collection.id_at(index))
        .ok_or(TaskError::NoSuchPosition {
            position,
            len: collection.len(),
        })
}

pub fn status_line(collection: &TaskCollection) -> String {
    format!("Tasks to complete: {}", collection.count_uncompleted())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
