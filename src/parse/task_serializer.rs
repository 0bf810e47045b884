use crate::model::task::Task;
use crate::parse::{DELIMITER, FALSE_TEXT, TRUE_TEXT};

/// Serialize one task as a record line (no trailing newline).
pub fn serialize_task(task: &Task) -> String {
    let completed = if task.is_completed { TRUE_TEXT } else { FALSE_TEXT };
    format!(
        "{name}{d}{subject}{d}{priority}{d}{due}{d}{completed}",
        name = task.name,
        subject = task.subject,
        priority = task.priority,
        due = task.due_date,
        d = DELIMITER,
    )
}

/// Serialize tasks in order, one record per line.
pub fn serialize_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&serialize_task(task));
        out.push('\n');
    }
    out
}
