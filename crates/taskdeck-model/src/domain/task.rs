use serde::{Deserialize, Serialize};

use crate::{TaskId, TaskStatus};

/// A stored task record.
///
/// `due_date` is kept as the raw date string (`"2024-05-17"`) the date
/// input produces; presence is enforced by form validation, not the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: TaskStatus,
}

/// Task fields without an id.
///
/// This is both the create payload of the store (which assigns the id) and
/// the POST body of the gateway, which never carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: TaskStatus,
}

impl NewTask {
    /// Attach an id, producing a stored record.
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        }
    }
}

impl Task {
    /// The id-less view of this task, as sent on create.
    pub fn fields(&self) -> NewTask {
        NewTask {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            status: self.status,
        }
    }
}
