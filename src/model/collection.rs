use super::sort::SortSpec;
use super::task::{Task, TaskId};

/// Result of [`TaskCollection::remove`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Confirmation message for the removed task
    Removed(String),
    /// No task with that id is in the collection
    NotFound(TaskId),
}

/// All tasks of a session, kept in display order.
///
/// Each task is paired with the [`TaskId`] it was given on entry; ids are
/// never reused within a collection.
#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    entries: Vec<(TaskId, Task)>,
    next_id: u64,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from tasks in the given order
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut collection = TaskCollection::new();
        for task in tasks {
            collection.push(task);
        }
        collection
    }

    fn push(&mut self, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, task));
        id
    }

    /// Append a task and return its id with a confirmation message.
    pub fn add(&mut self, task: Task) -> (TaskId, String) {
        let message = format!("{} added.", task.render_summary());
        let id = self.push(task);
        (id, message)
    }

    pub fn remove(&mut self, id: TaskId) -> RemoveOutcome {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                let (_, task) = self.entries.remove(index);
                RemoveOutcome::Removed(format!("{} removed.", task.render_summary()))
            }
            None => RemoveOutcome::NotFound(id),
        }
    }

    /// Drop every completed task, returning how many went.
    pub fn remove_completed(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(_, task)| !task.is_completed);
        before - self.entries.len()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, task)| task)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, task)| task)
    }

    /// Id of the task at a 0-based position in the current order
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.entries.get(index).map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.entries.iter().map(|(id, task)| (*id, task))
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.entries.iter().map(|(_, task)| task)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_uncompleted(&self) -> usize {
        self.tasks().filter(|task| !task.is_completed).count()
    }

    /// Stable sort by `spec`; tasks equal on every key keep their order.
    pub fn sort(&mut self, spec: &SortSpec) {
        self.entries.sort_by(|(_, a), (_, b)| spec.compare(a, b));
    }
}
