use serde::Serialize;

use crate::io::state::ViewState;
use crate::model::collection::TaskCollection;
use crate::model::date::Date;
use crate::model::sort::SortKey;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub position: usize,
    pub name: String,
    pub subject: String,
    pub priority: i64,
    pub due_date: Date,
    pub is_completed: bool,
    pub is_important: bool,
    pub is_due: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub sort_by: SortKey,
    pub reversed: bool,
    pub grouped: bool,
    pub uncompleted: usize,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct MessageJson {
    pub message: String,
    pub uncompleted: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(position: usize, task: &Task, today: Date) -> TaskJson {
    TaskJson {
        position,
        name: task.name.clone(),
        subject: task.subject.clone(),
        priority: task.priority,
        due_date: task.due_date,
        is_completed: task.is_completed,
        is_important: task.is_important(),
        is_due: task.is_due_on(today),
    }
}

pub fn list_to_json(collection: &TaskCollection, view: &ViewState, today: Date) -> TaskListJson {
    TaskListJson {
        sort_by: view.sort_by,
        reversed: view.reversed,
        grouped: view.grouped,
        uncompleted: collection.count_uncompleted(),
        tasks: collection
            .tasks()
            .enumerate()
            .map(|(idx, task)| task_to_json(idx + 1, task, today))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One row of the list. Uncompleted tasks that are due get a trailing `!`.
pub fn format_task_line(position: usize, task: &Task, today: Date) -> String {
    let check = if task.is_completed { 'x' } else { ' ' };
    let due = if task.is_due_on(today) && !task.is_completed {
        " !"
    } else {
        ""
    };
    format!("{}. [{}] {}{}", position, check, task.render_summary(), due)
}

pub fn format_view_header(title: &str, view: &ViewState) -> String {
    let mut modes = vec![format!("by {}", view.sort_by)];
    if view.reversed {
        modes.push("reversed".to_string());
    }
    if view.grouped {
        modes.push("grouped".to_string());
    }
    format!("== {} ({}) ==", title, modes.join(", "))
}

/// Header, one row per task, then the status line
pub fn format_task_listing(
    title: &str,
    collection: &TaskCollection,
    view: &ViewState,
    today: Date,
) -> Vec<String> {
    let mut lines = vec![format_view_header(title, view), String::new()];
    if collection.is_empty() {
        lines.push("No tasks yet.".to_string());
    }
    for (idx, task) in collection.tasks().enumerate() {
        lines.push(format_task_line(idx + 1, task, today));
    }
    lines.push(String::new());
    lines.push(crate::ops::task_ops::status_line(collection));
    lines
}
