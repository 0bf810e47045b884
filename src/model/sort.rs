use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::Task;

/// A task attribute the list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Subject,
    Priority,
    DueDate,
    /// Uncompleted before completed
    Completion,
}

impl SortKey {
    /// Keys a user can pick for the list view (completion is reserved for grouping)
    pub const SELECTABLE: [SortKey; 4] = [
        SortKey::DueDate,
        SortKey::Name,
        SortKey::Priority,
        SortKey::Subject,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Subject => "subject",
            SortKey::Priority => "priority",
            SortKey::DueDate => "due_date",
            SortKey::Completion => "completion",
        }
    }

    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Subject => a.subject.cmp(&b.subject),
            SortKey::Priority => a.priority.cmp(&b.priority),
            SortKey::DueDate => a.due_date.cmp(&b.due_date),
            SortKey::Completion => a.is_completed.cmp(&b.is_completed),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key {0:?} (expected name, subject, priority or due_date)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "name" => Ok(SortKey::Name),
            "subject" => Ok(SortKey::Subject),
            "priority" => Ok(SortKey::Priority),
            "due_date" | "due" => Ok(SortKey::DueDate),
            "completion" | "completed" => Ok(SortKey::Completion),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

/// Three-level ordering applied by [`TaskCollection::sort`](super::TaskCollection::sort)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub primary: SortKey,
    pub secondary: SortKey,
    pub tertiary: SortKey,
    pub reversed: bool,
}

impl SortSpec {
    pub fn new(primary: SortKey, secondary: SortKey) -> Self {
        SortSpec {
            primary,
            secondary,
            tertiary: SortKey::Priority,
            reversed: false,
        }
    }

    /// Build the spec for a list view. Grouping puts completion first so the
    /// completed tasks form one block; without it both leading keys are `chosen`.
    pub fn for_view(chosen: SortKey, grouped: bool, reversed: bool) -> Self {
        let primary = if grouped { SortKey::Completion } else { chosen };
        SortSpec {
            reversed,
            ..SortSpec::new(primary, chosen)
        }
    }

    /// Compare on all three keys, flipped when reversed. Ties stay `Equal`
    /// in both directions so a stable sort keeps their relative order.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ordering = self
            .primary
            .compare(a, b)
            .then_with(|| self.secondary.compare(a, b))
            .then_with(|| self.tertiary.compare(a, b));
        if self.reversed {
            ordering.reverse()
        } else {
            ordering
        }
    }
}
