use crate::{Task, TaskStatus};

/// Combined status + free-text filter over the task list.
///
/// Both parts apply as AND. `None` status and an empty search string each
/// pass everything; the search matches case-insensitively against title or
/// description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub search: String,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Returns `true` when no filtering is active.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.search.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status
            && task.status != status
        {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
    }
}
