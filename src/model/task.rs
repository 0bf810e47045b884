use std::fmt;

use serde::{Deserialize, Serialize};

use super::date::Date;

/// Tasks at or below this priority number count as important.
pub const IMPORTANT_THRESHOLD: i64 = 3;

/// Session-scoped handle for a task inside a [`TaskCollection`](super::TaskCollection).
///
/// Assigned when the task enters the collection and never written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub subject: String,
    /// Lower numbers are more urgent
    pub priority: i64,
    pub due_date: Date,
    pub is_completed: bool,
}

impl Task {
    /// Create an uncompleted task
    pub fn new(name: impl Into<String>, subject: impl Into<String>, priority: i64, due_date: Date) -> Self {
        Task {
            name: name.into(),
            subject: subject.into(),
            priority,
            due_date,
            is_completed: false,
        }
    }

    pub fn mark_completed(&mut self) {
        self.is_completed = true;
    }

    pub fn mark_uncompleted(&mut self) {
        self.is_completed = false;
    }

    pub fn is_important(&self) -> bool {
        self.priority <= IMPORTANT_THRESHOLD
    }

    /// Due today or overdue, judged against the local date.
    pub fn is_due(&self) -> bool {
        self.is_due_on(Date::today())
    }

    /// Due on or before `today`. Tasks without a valid due date are never due.
    pub fn is_due_on(&self, today: Date) -> bool {
        self.due_date.is_valid() && self.due_date <= today
    }

    /// Add `amount` to the priority, never going below 1.
    pub fn adjust_priority(&mut self, amount: i64) {
        self.priority = self.priority.saturating_add(amount).max(1);
    }

    /// One-line description, e.g. `Essay in English, priority 1, due 1/1/2030`.
    pub fn render_summary(&self) -> String {
        let mut out = format!("{} in {}, priority {}", self.name, self.subject, self.priority);
        if self.due_date.is_valid() {
            out.push_str(&format!(", due {}", self.due_date));
        }
        if self.is_completed {
            out.push_str(" (completed)");
        }
        out
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_summary())
    }
}
