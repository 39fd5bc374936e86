use async_trait::async_trait;

use taskdeck_model::{NewTask, Task, TaskId};

use crate::error::GatewayError;

/// Remote task endpoint.
///
/// This trait abstracts the HTTP backend so the store can be driven against
/// a mock in tests or a custom transport. Responses of the write calls are
/// ignored by all callers; only transport-level failure is reported.
#[async_trait]
pub trait TaskGateway: Send + Sync + 'static {
    /// Fetch the full task list.
    async fn list(&self) -> Result<Vec<Task>, GatewayError>;

    /// Announce a newly created task. The server assigns nothing; the id
    /// was already allocated locally and is not part of the payload.
    async fn create(&self, task: &NewTask) -> Result<(), GatewayError>;

    /// Push the full record of an edited task.
    async fn update(&self, task: &Task) -> Result<(), GatewayError>;

    /// Remove a task by id.
    async fn delete(&self, id: TaskId) -> Result<(), GatewayError>;
}
